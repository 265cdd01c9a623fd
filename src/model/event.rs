use super::*;

// Notifications delivered to listeners after each applied transition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    New(EventNew),             // round dealt
    Deal(EventDeal),           // tile drawn
    Select(EventSelect),       // human selection changed
    Discard(EventDiscard),     // tile discarded
    RonChance(EventRonChance), // human may claim a discard
    RonSkip(EventRonSkip),     // human declined the claim
    Win(EventWin),             // round ended by tsumo or ron
    Draw(EventDraw),           // round ended by wall exhaustion
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventNew {
    pub scores: [Point; SEAT],
    pub hands: [Vec<Tile>; SEAT],
    pub wall_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDeal {
    pub seat: Seat,
    pub tile: Tile,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSelect {
    pub selection: Selection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDiscard {
    pub seat: Seat,
    pub tile: Tile,
    pub is_drawn: bool, // the drawn tile itself was discarded
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRonChance {
    pub tile: Tile,
    pub from: Seat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRonSkip {
    pub from: Seat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventWin {
    pub result: RoundResult,
    pub hand: Vec<Tile>, // winning hand (14 tiles)
    pub scores: [Point; SEAT],
    pub delta_scores: [Point; SEAT],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraw {
    pub result: RoundResult,
    pub hands: [Vec<Tile>; SEAT], // opened hands of tenpai seats
    pub scores: [Point; SEAT],
}

impl Event {
    #[inline]
    pub fn new(scores: [Point; SEAT], hands: [Vec<Tile>; SEAT], wall_count: usize) -> Self {
        Self::New(EventNew {
            scores,
            hands,
            wall_count,
        })
    }

    #[inline]
    pub fn deal(seat: Seat, tile: Tile) -> Self {
        Self::Deal(EventDeal { seat, tile })
    }

    #[inline]
    pub fn select(selection: Selection) -> Self {
        Self::Select(EventSelect { selection })
    }

    #[inline]
    pub fn discard(seat: Seat, tile: Tile, is_drawn: bool) -> Self {
        Self::Discard(EventDiscard {
            seat,
            tile,
            is_drawn,
        })
    }

    #[inline]
    pub fn ron_chance(tile: Tile, from: Seat) -> Self {
        Self::RonChance(EventRonChance { tile, from })
    }

    #[inline]
    pub fn ron_skip(from: Seat) -> Self {
        Self::RonSkip(EventRonSkip { from })
    }

    #[inline]
    pub fn win(
        result: RoundResult,
        hand: Vec<Tile>,
        scores: [Point; SEAT],
        delta_scores: [Point; SEAT],
    ) -> Self {
        Self::Win(EventWin {
            result,
            hand,
            scores,
            delta_scores,
        })
    }

    #[inline]
    pub fn draw(result: RoundResult, hands: [Vec<Tile>; SEAT], scores: [Point; SEAT]) -> Self {
        Self::Draw(EventDraw {
            result,
            hands,
            scores,
        })
    }

    // round-ending events
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Event::Win(_) | Event::Draw(_))
    }
}
