// Data model of a single round
mod action;
mod define;
mod event;
mod meld;
mod round;
mod snapshot;
mod tile;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use action::*;
pub use define::*;
pub use event::*;
pub use meld::*;
pub use round::*;
pub use snapshot::*;
pub use tile::*;
