use super::*;
use crate::control::wall::Wall;
use crate::util::misc::vec_to_string;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    #[default]
    Draw, // active seat is about to draw
    Discard,            // active seat holds 14 tiles and must discard or win
    WaitForRonDecision, // the human may claim the last discard
    Ended,              // terminal until a new round is dealt
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRon {
    pub tile: Tile,
    pub from: Seat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RoundResult {
    Tsumo { winner: Seat, points: Point },
    Ron { winner: Seat, from: Seat, points: Point },
    Ryukyoku { tenpai: [bool; SEAT] },
}

impl RoundResult {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            RoundResult::Tsumo { winner, .. } | RoundResult::Ron { winner, .. } => Some(*winner),
            RoundResult::Ryukyoku { .. } => None,
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundResult::Tsumo { winner, points } => {
                write!(f, "tsumo by seat {} ({} points)", winner, points)
            }
            RoundResult::Ron {
                winner,
                from,
                points,
            } => write!(
                f,
                "ron by seat {} from seat {} ({} points)",
                winner, from, points
            ),
            RoundResult::Ryukyoku { tenpai } => {
                let ten = if tenpai[HUMAN] { "tenpai" } else { "noten" };
                write!(f, "ryukyoku (seat {}: {})", HUMAN, ten)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundState {
    pub wall: Vec<Tile>,                 // live wall, next draw at index 0
    pub hands: [Vec<Tile>; SEAT],        // held tiles (13 between turns)
    pub drawn: [Option<Tile>; SEAT],     // drawn tile kept apart from the hand
    pub discards: [Vec<Tile>; SEAT],     // discard piles
    pub melds: [Vec<Meld>; SEAT],        // always empty
    pub scores: [Point; SEAT],           // point totals
    pub turn: Seat,                      // active seat
    pub phase: Phase,                    // round phase
    pub selected: Option<Selection>,     // human selection before confirming a discard
    pub is_over: bool,                   // terminal flag
    pub pending_ron: Option<PendingRon>, // discard the human may claim
    pub result: Option<RoundResult>,     // set when the round ends
    pub step: usize,                     // +1 on every applied transition
}

impl RoundState {
    // Deal 13 tiles to each seat from the head of the wall.
    pub fn new(wall: Vec<Tile>, scores: [Point; SEAT]) -> Self {
        let mut wall = Wall::new(wall);
        let hands = [
            wall.deal(HAND_SIZE),
            wall.deal(HAND_SIZE),
            wall.deal(HAND_SIZE),
            wall.deal(HAND_SIZE),
        ];
        Self {
            wall: wall.into_tiles(),
            hands,
            drawn: [None; SEAT],
            discards: Default::default(),
            melds: Default::default(),
            scores,
            turn: HUMAN,
            phase: Phase::Draw,
            selected: None,
            is_over: false,
            pending_ron: None,
            result: None,
            step: 0,
        }
    }

    #[inline]
    pub fn wall_count(&self) -> usize {
        self.wall.len()
    }

    // held tiles plus the drawn tile, if any
    pub fn full_hand(&self, seat: Seat) -> Vec<Tile> {
        let mut tiles = self.hands[seat].clone();
        if let Some(t) = self.drawn[seat] {
            tiles.push(t);
        }
        tiles
    }

    // tile referenced by a human selection
    pub fn selected_tile(&self, sel: Selection) -> Option<Tile> {
        match sel {
            Selection::Held(i) => self.hands[HUMAN].get(i).copied(),
            Selection::Drawn => self.drawn[HUMAN],
        }
    }

    // every tile currently on the table, in any zone
    pub fn all_tiles(&self) -> Vec<Tile> {
        let mut tiles = self.wall.clone();
        for s in 0..SEAT {
            tiles.extend(self.hands[s].iter().copied());
            tiles.extend(self.drawn[s]);
            tiles.extend(self.discards[s].iter().copied());
            for m in &self.melds[s] {
                tiles.extend(m.tiles.iter().copied());
            }
        }
        tiles
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "step: {}, turn: {}, phase: {:?}, wall_count: {}",
            self.step,
            self.turn,
            self.phase,
            self.wall_count(),
        )?;
        let boader = "-".repeat(80);
        write!(f, "{}", boader)?;
        for s in 0..SEAT {
            let mut hand = self.hands[s].clone();
            hand.sort();
            writeln!(f)?;
            writeln!(
                f,
                "seat {}: score: {}, hand: {}, drawn: {}",
                s,
                self.scores[s],
                vec_to_string(&hand),
                self.drawn[s].map_or("None".to_string(), |t| t.to_string()),
            )?;
            writeln!(f, "discards: {}", vec_to_string(&self.discards[s]))?;
            write!(f, "{}", boader)?;
        }
        if let Some(r) = &self.result {
            writeln!(f)?;
            write!(f, "result: {}", r)?;
        }
        Ok(())
    }
}
