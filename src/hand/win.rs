use crate::model::*;

// [TileTable]

pub fn tiles_to_tile_table(tiles: &[Tile]) -> TileTable {
    let mut tt = TileTable::default();
    for t in tiles {
        inc_tile(&mut tt, t.key());
    }
    tt
}

#[inline]
pub fn inc_tile(tt: &mut TileTable, (suit, rank): TileKey) {
    tt[suit.index()][rank] += 1;
}

#[inline]
pub fn count_tile(tt: &TileTable, (suit, rank): TileKey) -> usize {
    tt[suit.index()][rank]
}

fn count_total(tt: &TileTable) -> usize {
    tt.iter().map(|tr| tr[1..].iter().sum::<usize>()).sum()
}

// [Decomposition]
// Exhaustive backtracking over the count table.

// Whether the whole table splits into triplets and runs.
// The lowest remaining value must be part of a triplet or the head of a run.
pub fn is_sets(tt: &mut TileTable) -> bool {
    let Some((ti, ni)) = first_tile(tt) else {
        return true;
    };

    if tt[ti][ni] >= 3 {
        tt[ti][ni] -= 3;
        let ok = is_sets(tt);
        tt[ti][ni] += 3;
        if ok {
            return true;
        }
    }

    let sequential = Suit::from_index(ti).is_some_and(|s| s.is_sequential());
    if sequential && ni + 2 <= 9 && tt[ti][ni + 1] > 0 && tt[ti][ni + 2] > 0 {
        tt[ti][ni] -= 1;
        tt[ti][ni + 1] -= 1;
        tt[ti][ni + 2] -= 1;
        let ok = is_sets(tt);
        tt[ti][ni] += 1;
        tt[ti][ni + 1] += 1;
        tt[ti][ni + 2] += 1;
        if ok {
            return true;
        }
    }

    false
}

fn first_tile(tt: &TileTable) -> Option<(usize, Tnum)> {
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] > 0 {
                return Some((ti, ni));
            }
        }
    }
    None
}

// four groups + pair, every distinct value tried as the pair
pub fn is_normal_win(tt: &TileTable) -> bool {
    if count_total(tt) != 14 {
        return false;
    }
    let mut tt = *tt;
    for ti in 0..TYPE {
        for ni in 1..TNUM {
            if tt[ti][ni] >= 2 {
                tt[ti][ni] -= 2;
                let ok = is_sets(&mut tt);
                tt[ti][ni] += 2;
                if ok {
                    return true;
                }
            }
        }
    }
    false
}

// seven distinct pairs
pub fn is_chiitoitsu_win(tt: &TileTable) -> bool {
    let mut n_pair = 0;
    for tr in tt {
        for &c in &tr[1..] {
            match c {
                0 => {}
                2 => n_pair += 1,
                _ => return false,
            }
        }
    }
    n_pair == 7
}

// [Winning hand]

pub fn is_winning_hand(tiles: &[Tile]) -> bool {
    if tiles.len() != 14 {
        return false;
    }
    let tt = tiles_to_tile_table(tiles);
    is_normal_win(&tt) || is_chiitoitsu_win(&tt)
}

// Values from the full 34-value space that complete a 13-tile hand.
// The physical wall is not consulted.
pub fn calc_winning_tiles(tiles: &[Tile]) -> Vec<TileKey> {
    if tiles.len() != 13 {
        return vec![];
    }
    let base = tiles_to_tile_table(tiles);
    let mut res = vec![];
    for k in all_tile_keys() {
        let mut tt = base;
        inc_tile(&mut tt, k);
        if is_normal_win(&tt) || is_chiitoitsu_win(&tt) {
            res.push(k);
        }
    }
    res
}

pub fn is_tenpai(tiles: &[Tile]) -> bool {
    !calc_winning_tiles(tiles).is_empty()
}

#[cfg(test)]
fn hand(exp: &str) -> Vec<Tile> {
    crate::control::string::hand_from_string(exp).unwrap()
}

#[test]
fn test_normal_win() {
    assert!(is_winning_hand(&hand("m123456789p11z555")));
    assert!(is_winning_hand(&hand("m111222333p789s55")));
    assert!(is_winning_hand(&hand("m112233p445566z77")));
    assert!(is_winning_hand(&hand("s11123456789999")));
    // run across suits is not a group
    assert!(!is_winning_hand(&hand("m89p1s123456789z11")));
    // honors never form runs
    assert!(!is_winning_hand(&hand("z123m123456p111s22")));
}

#[test]
fn test_non_winning_hand() {
    assert!(!is_winning_hand(&hand("m147p258s369z1234m5")));
    assert!(!is_winning_hand(&hand("m123456789p12z555")));
}

#[test]
fn test_chiitoitsu() {
    assert!(is_winning_hand(&hand("m1199p2288s3377z44")));
    // four of a kind is not two pairs
    assert!(!is_winning_hand(&hand("m1111p2288s3377z44")));
}

#[test]
fn test_wrong_length() {
    assert!(!is_winning_hand(&hand("m123456789p11z55")));
    assert!(!is_winning_hand(&hand("m123456789p11z5555")));
    assert!(!is_tenpai(&hand("m123456789p11z5")));
    assert!(!is_tenpai(&[]));
}

#[test]
fn test_tenpai() {
    // nobetan 1-4 wait
    let h = hand("m1234p456s789z111");
    assert!(is_tenpai(&h));
    assert_eq!(
        calc_winning_tiles(&h),
        vec![(Suit::Man, 1), (Suit::Man, 4)]
    );

    // tanki on an honor
    assert_eq!(
        calc_winning_tiles(&hand("m123456789p111z7")),
        vec![(Suit::Honor, 7)]
    );

    // chiitoitsu wait
    assert_eq!(
        calc_winning_tiles(&hand("m1199p2288s3377z4")),
        vec![(Suit::Honor, 4)]
    );
}

#[test]
fn test_not_tenpai() {
    assert!(!is_tenpai(&hand("m147p258s369z1234")));
    // two tiles away
    assert!(!is_tenpai(&hand("m1357p2468s159z12")));
}
