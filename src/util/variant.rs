use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    Int(i32),
}

impl Variant {
    pub fn as_int(&self) -> i32 {
        match self {
            &Self::Int(v) => v,
        }
    }

    // parse `value` as the same kind of variant as `self`
    pub fn parse_as(&self, value: &str) -> anyhow::Result<Variant> {
        Ok(match self {
            Variant::Int(_) => Variant::Int(value.trim().parse::<i32>()?),
        })
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{}", v),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Arg {
    pub name: String,
    pub value: Variant,
}

impl Arg {
    pub fn int(name: &str, value: i32) -> Self {
        Self {
            name: name.to_string(),
            value: Variant::Int(value),
        }
    }
}

#[test]
fn test_parse_as() {
    assert_eq!(Variant::Int(0).parse_as("12").unwrap(), Variant::Int(12));
    assert_eq!(Variant::Int(0).parse_as(" -3 ").unwrap(), Variant::Int(-3));
    assert!(Variant::Int(0).parse_as("x").is_err());
}
