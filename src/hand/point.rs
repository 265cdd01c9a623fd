use crate::model::{Point, SEAT};

// 300 * 2^(han+1), saturating at Point::MAX
pub fn calc_base_point(han: usize) -> Point {
    u32::try_from(han)
        .ok()
        .and_then(|h| h.checked_add(1))
        .and_then(|e| 2_i32.checked_pow(e))
        .and_then(|p| p.checked_mul(300))
        .unwrap_or(Point::MAX)
}

// Points gained by the winner.
// Ron is paid in full by the discarder, tsumo is split between the other three seats.
pub fn calc_points(han: usize, is_ron: bool) -> Point {
    let base = calc_base_point(han);
    if is_ron {
        base.saturating_mul(4)
    } else {
        base.saturating_mul(2)
    }
}

// Score deltas of a tsumo win.
// Each payer is charged floor(points / 3); the remainder is not collected from anyone,
// so the sum of the deltas may be positive.
pub fn tsumo_deltas(winner: usize, points: Point) -> [Point; SEAT] {
    let mut d_scores = [0; SEAT];
    for s in 0..SEAT {
        d_scores[s] = if s == winner { points } else { -(points / 3) };
    }
    d_scores
}

// Score deltas of a ron win.
pub fn ron_deltas(winner: usize, from: usize, points: Point) -> [Point; SEAT] {
    let mut d_scores = [0; SEAT];
    d_scores[winner] += points;
    d_scores[from] -= points;
    d_scores
}

#[test]
fn test_calc_points() {
    assert_eq!(calc_base_point(1), 1200);
    assert_eq!(calc_points(1, false), 2400);
    assert_eq!(calc_points(1, true), 4800);
    assert_eq!(calc_points(2, true), 9600);
}

#[test]
fn test_large_han_saturates() {
    assert_eq!(calc_base_point(21), 300 << 22);
    assert_eq!(calc_base_point(23), Point::MAX);
    assert_eq!(calc_base_point(40), Point::MAX);
    assert_eq!(calc_base_point(usize::MAX), Point::MAX);
    assert_eq!(calc_points(21, true), Point::MAX);
    assert_eq!(calc_points(64, false), Point::MAX);
}

#[test]
fn test_tsumo_truncation() {
    let d = tsumo_deltas(2, 2400);
    assert_eq!(d, [-800, -800, 2400, -800]);
    assert_eq!(d.iter().sum::<Point>(), 0);

    // 1000 / 3 truncates, 1 point is not collected
    let d = tsumo_deltas(0, 1000);
    assert_eq!(d, [1000, -333, -333, -333]);
    assert_eq!(d.iter().sum::<Point>(), 1);
}

#[test]
fn test_ron_deltas() {
    let d = ron_deltas(0, 3, 4800);
    assert_eq!(d, [4800, 0, 0, -4800]);
    assert_eq!(d.iter().sum::<Point>(), 0);
}
