pub mod engine;
pub mod round_controller;
pub mod scheduler;
pub mod string;
pub mod wall;

pub use engine::{RoundEngine, Rule};
pub use round_controller::{apply, can_declare_ron, can_declare_tsumo, update};
pub use scheduler::{next_action, Scheduler, Step};
pub use wall::{build_deck, create_wall, create_wall_debug, shuffle, Wall};
