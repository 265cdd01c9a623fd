use super::*;
use crate::control::round_controller::{can_declare_ron, can_declare_tsumo};

// Read-only view handed to the rendering side.
// Only the human seat's tiles are exposed; opponents are reduced to counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub step: usize,
    pub wall_count: usize,
    pub hand: Vec<Tile>,               // human hand
    pub drawn: Option<Tile>,           // human drawn tile
    pub hand_counts: [usize; SEAT],    // held tiles per seat
    pub has_drawn: [bool; SEAT],       // drawn slot occupied per seat
    pub discards: [Vec<Tile>; SEAT],
    pub melds: [Vec<Meld>; SEAT],
    pub scores: [Point; SEAT],
    pub turn: Seat,
    pub phase: Phase,
    pub selected: Option<Selection>,
    pub is_over: bool,
    pub pending_ron: Option<PendingRon>,
    pub result: Option<RoundResult>,
    pub can_tsumo: bool,
    pub can_ron: bool,
}

impl Snapshot {
    pub fn from_state(stg: &RoundState) -> Self {
        let mut hand_counts = [0; SEAT];
        let mut has_drawn = [false; SEAT];
        for s in 0..SEAT {
            hand_counts[s] = stg.hands[s].len();
            has_drawn[s] = stg.drawn[s].is_some();
        }

        Self {
            step: stg.step,
            wall_count: stg.wall_count(),
            hand: stg.hands[HUMAN].clone(),
            drawn: stg.drawn[HUMAN],
            hand_counts,
            has_drawn,
            discards: stg.discards.clone(),
            melds: stg.melds.clone(),
            scores: stg.scores,
            turn: stg.turn,
            phase: stg.phase,
            selected: stg.selected,
            is_over: stg.is_over,
            pending_ron: stg.pending_ron,
            result: stg.result.clone(),
            can_tsumo: can_declare_tsumo(stg),
            can_ron: can_declare_ron(stg),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[test]
fn test_snapshot_hides_opponents() {
    let wall = crate::control::wall::create_wall(3);
    let stg = RoundState::new(wall, [INITIAL_SCORE; SEAT]);
    let snap = Snapshot::from_state(&stg);
    assert_eq!(snap.hand, stg.hands[HUMAN]);
    assert_eq!(snap.hand_counts, [HAND_SIZE; SEAT]);
    assert_eq!(snap.wall_count, TOTAL_TILES - HAND_SIZE * SEAT);

    let json = snap.to_json().unwrap();
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v["phase"], "Draw");
    assert!(v.get("hands").is_none());
}
