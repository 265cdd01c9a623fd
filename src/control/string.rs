use anyhow::{anyhow, bail};

use crate::model::*;

pub fn tile_suit_from_char(ch: char) -> anyhow::Result<Suit> {
    Suit::from_char(ch).ok_or_else(|| anyhow!("invalid tile suit char: {}", ch))
}

pub fn tile_rank_from_char(suit: Suit, ch: char) -> anyhow::Result<Tnum> {
    match ch.to_digit(10) {
        Some(n) if 1 <= n as Tnum && n as Tnum <= suit.max_rank() => Ok(n as Tnum),
        _ => bail!("invalid tile rank char for {}: {}", suit.to_char(), ch),
    }
}

// "m123p456z77" -> [(m,1), (m,2), ...]
pub fn tiles_from_string(exp: &str) -> anyhow::Result<Vec<TileKey>> {
    let mut keys = vec![];
    let mut suit = None;
    for ch in exp.chars() {
        match ch {
            'm' | 'p' | 's' | 'z' => suit = Some(tile_suit_from_char(ch)?),
            '0'..='9' => {
                let Some(s) = suit else {
                    bail!("tile number before tile suit");
                };
                keys.push((s, tile_rank_from_char(s, ch)?));
            }
            ' ' | ',' => {}
            _ => bail!("invalid char: '{}'", ch),
        }
    }
    Ok(keys)
}

pub fn tiles_to_string(tiles: &[Tile]) -> String {
    let mut res = String::new();
    let mut last_suit = None;
    for t in tiles {
        if last_suit != Some(t.suit) {
            last_suit = Some(t.suit);
            res.push(t.suit.to_char());
        }
        res.push_str(&t.rank.to_string());
    }
    res
}

// Physical tiles for a tile string, ids assigned in deck order.
// Intended for building hands in tests and the terminal front end.
pub fn hand_from_string(exp: &str) -> anyhow::Result<Vec<Tile>> {
    let mut used = [[0; TNUM]; TYPE];
    let mut tiles = vec![];
    for (suit, rank) in tiles_from_string(exp)? {
        let c = &mut used[suit.index()][rank];
        if *c >= TILE {
            bail!("more than {} copies of {}{}", TILE, suit.to_char(), rank);
        }
        tiles.push(Tile::new(tile_base_id(suit, rank) + *c, suit, rank));
        *c += 1;
    }
    Ok(tiles)
}

// id of the first copy of a tile value in build_deck order
fn tile_base_id(suit: Suit, rank: Tnum) -> TileId {
    (suit.index() * 9 + rank - 1) * TILE
}

#[test]
fn test_tiles_to_string() {
    let hand_str = "p34777s123567z66";
    let hand = hand_from_string(hand_str).unwrap();
    assert_eq!(tiles_to_string(&hand), hand_str);
}

#[test]
fn test_hand_ids_match_deck() {
    let deck = super::wall::build_deck();
    for t in hand_from_string("m19p5s9z1177").unwrap() {
        assert_eq!(deck[t.id], t);
    }
}

#[test]
fn test_invalid_strings() {
    assert!(tiles_from_string("1m").is_err());
    assert!(tiles_from_string("z8").is_err());
    assert!(tiles_from_string("m0").is_err());
    assert!(tiles_from_string("x1").is_err());
    assert!(hand_from_string("m11111").is_err());
}
