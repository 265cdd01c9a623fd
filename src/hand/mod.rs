// Winning-hand detection and point calculation
mod point;
mod win;

pub use self::{
    point::{calc_base_point, calc_points, ron_deltas, tsumo_deltas},
    win::{
        calc_winning_tiles, count_tile, inc_tile, is_chiitoitsu_win, is_normal_win, is_sets,
        is_tenpai, is_winning_hand, tiles_to_tile_table,
    },
};
