#![warn(rust_2018_idioms)]
// The following lints are disabled to keep seat loops and table indexing uniform
#![allow(clippy::needless_range_loop)]
#![allow(clippy::collapsible_else_if)]
#![allow(clippy::new_without_default)]
#![allow(clippy::too_many_arguments)]

pub mod actor;
pub mod app;
pub mod control;
pub mod hand;
pub mod listener;
pub mod model;
pub mod util;
