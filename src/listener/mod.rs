mod event_printer;
mod snapshot_channel;
mod snapshot_writer;

use std::fmt;

use crate::model::*;

pub use event_printer::EventPrinter;
pub use snapshot_channel::SnapshotChannel;
pub use snapshot_writer::SnapshotWriter;

// Observer of every applied transition. `stg` is the state after the event.
// Events and `stg` carry every seat's tiles. Anything shown to the seat 0 player
// goes through `Snapshot`, which reduces opponents to counts.
pub trait Listener: Send {
    fn notify_event(&mut self, _stg: &RoundState, _event: &Event) {}
}

impl fmt::Debug for dyn Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Listener")
    }
}
