use super::*;

// [Suit]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    #[serde(rename = "m")]
    Man,
    #[serde(rename = "p")]
    Pin,
    #[serde(rename = "s")]
    Sou,
    #[serde(rename = "z")]
    Honor,
}

impl Suit {
    pub const ALL: [Suit; TYPE] = [Suit::Man, Suit::Pin, Suit::Sou, Suit::Honor];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(ti: usize) -> Option<Self> {
        Self::ALL.get(ti).copied()
    }

    // number of ranks in this suit
    #[inline]
    pub fn max_rank(self) -> Tnum {
        if self == Suit::Honor {
            DR
        } else {
            9
        }
    }

    // runs are only formed within man, pin and sou
    #[inline]
    pub fn is_sequential(self) -> bool {
        self != Suit::Honor
    }

    pub fn to_char(self) -> char {
        ['m', 'p', 's', 'z'][self.index()]
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            'm' => Some(Suit::Man),
            'p' => Some(Suit::Pin),
            's' => Some(Suit::Sou),
            'z' => Some(Suit::Honor),
            _ => None,
        }
    }
}

// (suit, rank) without physical identity
pub type TileKey = (Suit, Tnum);

// all 34 tile values in deck order
pub fn all_tile_keys() -> Vec<TileKey> {
    let mut keys = Vec::with_capacity(TILE_KINDS);
    for suit in Suit::ALL {
        for rank in 1..=suit.max_rank() {
            keys.push((suit, rank));
        }
    }
    keys
}

// [Tile]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: TileId,
    pub suit: Suit,
    pub rank: Tnum,
}

impl Tile {
    #[inline]
    pub fn new(id: TileId, suit: Suit, rank: Tnum) -> Self {
        Self { id, suit, rank }
    }

    #[inline]
    pub fn key(&self) -> TileKey {
        (self.suit, self.rank)
    }

    #[inline]
    pub fn is_honor(&self) -> bool {
        self.suit == Suit::Honor
    }

    #[inline]
    pub fn same_kind(&self, other: &Tile) -> bool {
        self.key() == other.key()
    }

    pub fn unicode(&self) -> char {
        const TABLE: [&str; TYPE] = [
            "🀇🀈🀉🀊🀋🀌🀍🀎🀏",
            "🀙🀚🀛🀜🀝🀞🀟🀠🀡",
            "🀐🀑🀒🀓🀔🀕🀖🀗🀘",
            "🀀🀁🀂🀃🀆🀅🀄",
        ];
        TABLE[self.suit.index()]
            .chars()
            .nth(self.rank - 1)
            .unwrap_or('?')
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.to_char(), self.rank)
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self, self.id)
    }
}

impl PartialOrd for Tile {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// suit, then rank, then id
impl Ord for Tile {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key()
            .cmp(&other.key())
            .then(self.id.cmp(&other.id))
    }
}

// [TileTable]
// counts indexed by [suit][rank], rank 0 is unused
pub type TileRow = [usize; TNUM];
pub type TileTable = [TileRow; TYPE];

#[test]
fn test_tile_keys() {
    let keys = all_tile_keys();
    assert_eq!(keys.len(), TILE_KINDS);
    assert_eq!(keys[0], (Suit::Man, 1));
    assert_eq!(keys[TILE_KINDS - 1], (Suit::Honor, DR));
}

#[test]
fn test_tile_display() {
    let t = Tile::new(0, Suit::Honor, DR);
    assert_eq!(t.to_string(), "z7");
    assert_eq!(t.unicode(), '🀄');
    assert_eq!(Tile::new(5, Suit::Sou, 9).to_string(), "s9");
}
