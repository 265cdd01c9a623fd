use super::*;

pub struct TsumogiriBuilder;

impl ActorBuilder for TsumogiriBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Tsumogiri".to_string(),
            args: vec![],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(Tsumogiri { config })
    }
}

// Always discards the drawn tile (the last one in the hand).
#[derive(Clone)]
pub struct Tsumogiri {
    config: Config,
}

impl Actor for Tsumogiri {
    fn select_discard(&mut self, hand: &[Tile]) -> Index {
        hand.len().saturating_sub(1)
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}
