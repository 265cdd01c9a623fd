// Type aliases
pub type Seat = usize; // seat index (0: human, 1..=3: opponents)
pub type Tnum = usize; // rank part of a tile (1~9, honors 1~7)
pub type Index = usize; // other indices
pub type TileId = usize; // unique id of a physical tile
pub type Point = i32; // score and score deltas

// Number
pub const SEAT: usize = 4; // number of seats
pub const TYPE: usize = 4; // number of suits (man, pin, sou, honor)
pub const TNUM: usize = 10; // rank slots in a TileRow (index 0 unused)
pub const TILE: usize = 4; // copies of each tile value
pub const TILE_KINDS: usize = 34; // distinct (suit, rank) values
pub const TOTAL_TILES: usize = TILE_KINDS * TILE; // 136
pub const HAND_SIZE: usize = 13; // held tiles between turns

// Seat
pub const HUMAN: Seat = 0;

// Honor ranks
pub const WE: Tnum = 1; // Wind:    East
pub const WS: Tnum = 2; // Wind:    South
pub const WW: Tnum = 3; // Wind:    West
pub const WN: Tnum = 4; // Wind:    North
pub const DW: Tnum = 5; // Dragon:  White
pub const DG: Tnum = 6; // Dragon:  Green
pub const DR: Tnum = 7; // Dragon:  Red

// Rule defaults
pub const INITIAL_SCORE: Point = 25000;
pub const FIXED_HAN: usize = 1; // no yaku counting, every win is valued at 1 han

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    (seat + 1) % SEAT
}
