use super::*;
use crate::hand::{count_tile, tiles_to_tile_table};

pub struct IsolatedDiscardBuilder;

impl ActorBuilder for IsolatedDiscardBuilder {
    fn get_default_config(&self) -> Config {
        Config {
            name: "Isolated".to_string(),
            args: vec![
                Arg::int("pair", PAIR_WEIGHT),
                Arg::int("near", NEAR_WEIGHT),
                Arg::int("far", FAR_WEIGHT),
            ],
        }
    }

    fn create(&self, config: Config) -> Box<dyn Actor> {
        Box::new(IsolatedDiscard::from_config(config))
    }
}

const PAIR_WEIGHT: i32 = 10; // another copy of the same value is held
const NEAR_WEIGHT: i32 = 8; // neighbour at rank distance 1
const FAR_WEIGHT: i32 = 3; // neighbour at rank distance 2

// Discards the most isolated tile. No lookahead and no defence.
#[derive(Clone)]
pub struct IsolatedDiscard {
    config: Config,
    weights: (i32, i32, i32),
}

impl IsolatedDiscard {
    pub fn from_config(config: Config) -> Self {
        let weights = (
            config.args[0].value.as_int(),
            config.args[1].value.as_int(),
            config.args[2].value.as_int(),
        );
        Self { config, weights }
    }
}

impl Actor for IsolatedDiscard {
    fn select_discard(&mut self, hand: &[Tile]) -> Index {
        choose_discard_weighted(hand, self.weights)
    }

    fn get_config(&self) -> &Config {
        &self.config
    }
}

// Index of the tile with the lowest connectivity score, first occurrence on ties.
pub fn choose_discard(hand: &[Tile]) -> Index {
    choose_discard_weighted(hand, (PAIR_WEIGHT, NEAR_WEIGHT, FAR_WEIGHT))
}

fn choose_discard_weighted(hand: &[Tile], (pair, near, far): (i32, i32, i32)) -> Index {
    let tt = tiles_to_tile_table(hand);
    let mut best = 0;
    let mut best_score = i32::MAX;
    for (i, t) in hand.iter().enumerate() {
        let mut score = 0;
        if count_tile(&tt, t.key()) >= 2 {
            score += pair;
        }
        if !t.is_honor() {
            for (d, w) in [(1, near), (2, far)] {
                if t.rank > d && count_tile(&tt, (t.suit, t.rank - d)) > 0 {
                    score += w;
                }
                if t.rank + d <= 9 && count_tile(&tt, (t.suit, t.rank + d)) > 0 {
                    score += w;
                }
            }
        }
        if score < best_score {
            best_score = score;
            best = i;
        }
    }
    best
}

#[cfg(test)]
fn hand(exp: &str) -> Vec<Tile> {
    crate::control::string::hand_from_string(exp).unwrap()
}

#[test]
fn test_choose_isolated_tile() {
    // z1 has no pair and no neighbours
    let h = hand("m123p456s789z2233z1");
    assert_eq!(h[choose_discard(&h)].to_string(), "z1");

    // s7 and s9 only see each other at distance 2, s7 comes first
    let h = hand("m123p456s7z55s9m999");
    assert_eq!(h[choose_discard(&h)].to_string(), "s7");
}

#[test]
fn test_tie_breaks_by_first_occurrence() {
    let h = hand("z1m5z2p5");
    assert_eq!(choose_discard(&h), 0);
    let h = hand("m159p159");
    assert_eq!(choose_discard(&h), 0);
}

#[test]
fn test_choose_discard_is_pure() {
    let h = hand("m1122p3s55789z123");
    let first = choose_discard(&h);
    for _ in 0..3 {
        assert_eq!(choose_discard(&h), first);
    }
    let mut actor = create_actor("Isolated").unwrap();
    assert_eq!(actor.select_discard(&h), first);
}
