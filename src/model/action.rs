use super::*;

// Tile chosen by the human for discard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "c")]
pub enum Selection {
    Held(Index), // index into the held hand
    Drawn,       // the drawn-tile slot
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Held(i) => write!(f, "held[{}]", i),
            Selection::Drawn => write!(f, "drawn"),
        }
    }
}

// Input to the round transition function.
// Draw and OpponentTurn are produced by the scheduler, the rest by the human seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Action {
    Draw,
    OpponentTurn,
    SelectTile { selection: Selection },
    ConfirmDiscard,
    DeclareTsumo,
    DeclareRon,
    DeclineRon,
}

impl Action {
    #[inline]
    pub fn select(selection: Selection) -> Self {
        Self::SelectTile { selection }
    }

    // actions issued by the human seat
    #[inline]
    pub fn is_human_input(&self) -> bool {
        !matches!(self, Action::Draw | Action::OpponentTurn)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::SelectTile { selection } => write!(f, "SelectTile({})", selection),
            a => write!(f, "{:?}", a),
        }
    }
}
