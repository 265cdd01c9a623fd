use anyhow::{ensure, Context};
use rand::prelude::*;

use super::string::tiles_from_string;
use crate::model::*;

// All 136 tiles in deterministic order (m1 x4, m2 x4, ..., z7 x4).
pub fn build_deck() -> Vec<Tile> {
    let mut deck = Vec::with_capacity(TOTAL_TILES);
    for (suit, rank) in all_tile_keys() {
        for _ in 0..TILE {
            deck.push(Tile::new(deck.len(), suit, rank));
        }
    }
    deck
}

// Uniform permutation (Fisher-Yates).
pub fn shuffle<R: Rng + ?Sized>(tiles: &mut [Tile], rng: &mut R) {
    tiles.shuffle(rng);
}

pub fn create_wall(seed: u64) -> Vec<Tile> {
    let mut wall = build_deck();
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    shuffle(&mut wall, &mut rng);
    wall
}

// [Wall]
#[derive(Debug, Clone, Default)]
pub struct Wall {
    tiles: Vec<Tile>,
}

impl Wall {
    pub fn new(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    // Remove and return the first `n` tiles (fewer if the wall runs short).
    pub fn deal(&mut self, n: usize) -> Vec<Tile> {
        let n = n.min(self.tiles.len());
        self.tiles.drain(..n).collect()
    }

    // None means exhaustion.
    pub fn draw(&mut self) -> Option<Tile> {
        if self.tiles.is_empty() {
            None
        } else {
            Some(self.tiles.remove(0))
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}

// Crafted wall for debugging and tests.
// `hands[s]` (at most 13 tiles) is dealt to seat s and `deals` are the first draws,
// in turn order starting from seat 0. Unspecified positions are filled from a shuffled
// remainder so the 136 tile multiset is kept.
pub fn create_wall_debug(seed: u64, hands: [&str; SEAT], deals: &str) -> anyhow::Result<Vec<Tile>> {
    let mut remain = build_deck();
    let mut rng: rand::rngs::StdRng = rand::SeedableRng::seed_from_u64(seed);
    shuffle(&mut remain, &mut rng);

    let mut fixed_hands = vec![];
    for (s, exp) in hands.iter().enumerate() {
        let keys = tiles_from_string(exp).with_context(|| format!("hand of seat {}", s))?;
        ensure!(
            keys.len() <= HAND_SIZE,
            "seat {}: {} tiles given, at most {} allowed",
            s,
            keys.len(),
            HAND_SIZE
        );
        fixed_hands.push(take_tiles(&mut remain, &keys)?);
    }
    let deal_keys = tiles_from_string(deals).context("deal tiles")?;
    let fixed_deals = take_tiles(&mut remain, &deal_keys)?;

    let mut wall = Vec::with_capacity(TOTAL_TILES);
    for h in fixed_hands {
        let n = HAND_SIZE - h.len();
        wall.extend(h);
        move_tiles(&mut remain, &mut wall, n);
    }
    wall.extend(fixed_deals);
    wall.append(&mut remain);

    assert_eq!(wall.len(), TOTAL_TILES);
    Ok(wall)
}

// pull physical tiles of the requested values out of `source`
fn take_tiles(source: &mut Vec<Tile>, keys: &[TileKey]) -> anyhow::Result<Vec<Tile>> {
    let mut tiles = vec![];
    for &k in keys {
        let pos = source
            .iter()
            .position(|t| t.key() == k)
            .with_context(|| format!("no copy of {}{} left", k.0.to_char(), k.1))?;
        tiles.push(source.remove(pos));
    }
    Ok(tiles)
}

fn move_tiles(source: &mut Vec<Tile>, target: &mut Vec<Tile>, count: usize) {
    let n = count.min(source.len());
    target.extend(source.drain(..n));
}

#[test]
fn test_build_deck() {
    let deck = build_deck();
    assert_eq!(deck.len(), TOTAL_TILES);
    for (i, t) in deck.iter().enumerate() {
        assert_eq!(t.id, i);
    }
    for k in all_tile_keys() {
        assert_eq!(deck.iter().filter(|t| t.key() == k).count(), TILE);
    }
}

#[test]
fn test_shuffle_conserves_tiles() {
    let mut wall = create_wall(42);
    assert_eq!(wall.len(), TOTAL_TILES);
    assert_ne!(wall, build_deck());
    wall.sort_by_key(|t| t.id);
    assert_eq!(wall, build_deck());
}

#[test]
fn test_deal_and_draw() {
    let mut wall = Wall::new(create_wall(1));
    for _ in 0..SEAT {
        assert_eq!(wall.deal(HAND_SIZE).len(), HAND_SIZE);
    }
    assert_eq!(wall.len(), 84);
    let mut n = 0;
    while wall.draw().is_some() {
        n += 1;
    }
    assert_eq!(n, 84);
    assert!(wall.is_empty());
    assert!(wall.draw().is_none());
    assert!(wall.deal(3).is_empty());
}

#[test]
fn test_debug_wall() {
    let wall = create_wall_debug(0, ["m111222333p111", "", "z1122", ""], "p1z7").unwrap();
    let mut ids: Vec<TileId> = wall.iter().map(|t| t.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), TOTAL_TILES);

    assert!(wall[..3].iter().all(|t| t.key() == (Suit::Man, 1)));
    assert_eq!(wall[3].key(), (Suit::Man, 2));
    assert_eq!(wall[26].key(), (Suit::Honor, 1));
    assert_eq!(wall[52].key(), (Suit::Pin, 1));
    assert_eq!(wall[53].key(), (Suit::Honor, 7));

    assert!(create_wall_debug(0, ["m11111", "", "", ""], "").is_err());
}
