use rand::Rng;

use super::*;

pub struct RandomDiscardBuilder;

impl ActorBuilder for RandomDiscardBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Random".to_string(),
            args: vec![Arg::int("seed", 0)],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(RandomDiscard::from_config(config))
    }
}

#[derive(Clone)]
pub struct RandomDiscard {
    config: Config,
    rng: rand::rngs::StdRng,
}

impl RandomDiscard {
    pub fn from_config(config: Config) -> Self {
        let seed = config.args[0].value.as_int() as u64;
        Self {
            config,
            rng: rand::SeedableRng::seed_from_u64(seed),
        }
    }
}

impl Actor for RandomDiscard {
    fn select_discard(&mut self, hand: &[Tile]) -> Index {
        self.rng.gen_range(0..hand.len())
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

#[test]
fn test_random_discard_in_range() {
    let h = crate::control::string::hand_from_string("m123456789p1234s5").unwrap();
    let mut a = create_actor("Random(3)").unwrap();
    for _ in 0..100 {
        assert!(a.select_discard(&h) < h.len());
    }
}

#[test]
fn test_random_always_tsumo() {
    let h = crate::control::string::hand_from_string("m123456789p11z555").unwrap();
    let mut a = create_actor("Random(3)").unwrap();
    assert!(a.declare_tsumo(&h));
    assert!(create_actor("Random(3,false)").is_err());
}
