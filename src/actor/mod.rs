// Discard policies for seats driven by the engine
mod isolated;
mod random;
mod tsumogiri;

use std::fmt;

use anyhow::{bail, Context};

use crate::model::*;
use crate::util::variant::*;

pub use isolated::{choose_discard, IsolatedDiscard};
pub use random::RandomDiscard;
pub use tsumogiri::Tsumogiri;

#[derive(Debug, Clone)]
pub struct Config {
    pub name: String,
    pub args: Vec<Arg>,
}

// Actor trait
pub trait Actor: ActorClone + Send {
    // called once per round
    fn init(&mut self, _seat: Seat) {}

    // Index into `hand` (held tiles followed by the drawn tile, 14 in total) to discard.
    fn select_discard(&mut self, hand: &[Tile]) -> Index;

    // Whether to take a self-drawn win. `hand` is already complete.
    fn declare_tsumo(&mut self, _hand: &[Tile]) -> bool {
        true
    }

    // Whether to claim a discard. Only asked for the human seat in simulations.
    fn declare_ron(&mut self, _hand: &[Tile], _tile: Tile) -> bool {
        true
    }

    fn get_config(&self) -> &Config;

    fn get_name(&self) -> &str {
        &self.get_config().name
    }
}

impl fmt::Debug for dyn Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let conf = self.get_config();
        let arg_str = conf
            .args
            .iter()
            .map(|arg| format!("{}={}", arg.name, arg.value))
            .collect::<Vec<String>>()
            .join(",");
        write!(f, "{}({})", conf.name, arg_str)
    }
}

// https://stackoverflow.com/questions/30353462/how-to-clone-a-struct-storing-a-boxed-trait-object
pub trait ActorClone {
    fn clone_box(&self) -> Box<dyn Actor>;
}

impl<T> ActorClone for T
where
    T: 'static + Actor + Clone,
{
    fn clone_box(&self) -> Box<dyn Actor> {
        Box::new(self.clone())
    }
}

trait ActorBuilder {
    fn get_default_config(&self) -> Config;
    fn create(&self, config: Config) -> Box<dyn Actor>;
}

// "Name" or "Name(arg0,arg1,...)". Empty arguments keep their defaults.
pub fn create_actor(exp: &str) -> anyhow::Result<Box<dyn Actor>> {
    let builders: Vec<Box<dyn ActorBuilder>> = vec![
        Box::new(isolated::IsolatedDiscardBuilder {}),
        Box::new(random::RandomDiscardBuilder {}),
        Box::new(tsumogiri::TsumogiriBuilder {}),
    ];

    let exp = exp.trim();
    let (name, args): (&str, Vec<&str>) = match (exp.find('('), exp.rfind(')')) {
        (Some(l), Some(r)) => {
            if r < l {
                bail!("invalid paren: {}", exp);
            }
            let inner = &exp[l + 1..r];
            let args = if inner.is_empty() {
                vec![]
            } else {
                inner.split(',').collect()
            };
            (&exp[..l], args)
        }
        (None, None) => (exp, vec![]),
        _ => bail!("invalid paren: {}", exp),
    };

    for b in &builders {
        let mut conf = b.get_default_config();
        if name != conf.name {
            continue;
        }

        if conf.args.len() < args.len() {
            bail!(
                "expected {} arguments for {}. but {} arguments are provided.",
                conf.args.len(),
                name,
                args.len(),
            );
        }
        for (i, &a) in args.iter().enumerate() {
            if !a.trim().is_empty() {
                let arg = &mut conf.args[i];
                arg.value = arg
                    .value
                    .parse_as(a)
                    .with_context(|| format!("{}: {}", arg.name, a))?;
            }
        }
        return Ok(b.create(conf));
    }

    bail!("unknown actor name: {}", name)
}

#[test]
fn test_create_actor() {
    let a = create_actor("Isolated").unwrap();
    assert_eq!(a.get_name(), "Isolated");

    let a = create_actor("Random(7)").unwrap();
    assert_eq!(format!("{:?}", a), "Random(seed=7)");

    let a = create_actor("Random( )").unwrap();
    assert_eq!(format!("{:?}", a), "Random(seed=0)");

    assert!(create_actor("Unknown").is_err());
    assert!(create_actor("Random(x)").is_err());
    assert!(create_actor("Random(1,2)").is_err());
    assert!(create_actor("Random)1(").is_err());
}
