use std::sync::mpsc;

use log::debug;

use crate::listener::Listener;
use crate::model::*;

// [SnapshotChannel]
// Pushes a snapshot per event to a receiver, typically a rendering thread.
#[derive(Debug)]
pub struct SnapshotChannel {
    tx: mpsc::Sender<Snapshot>,
}

impl SnapshotChannel {
    pub fn new(tx: mpsc::Sender<Snapshot>) -> Self {
        Self { tx }
    }
}

impl Listener for SnapshotChannel {
    fn notify_event(&mut self, stg: &RoundState, _event: &Event) {
        if self.tx.send(Snapshot::from_state(stg)).is_err() {
            debug!("snapshot receiver dropped");
        }
    }
}

#[test]
fn test_snapshot_channel() {
    let (tx, rx) = mpsc::channel();
    let mut ch = SnapshotChannel::new(tx);
    let stg = RoundState::new(crate::control::wall::create_wall(1), [INITIAL_SCORE; SEAT]);
    ch.notify_event(&stg, &Event::new(stg.scores, stg.hands.clone(), stg.wall_count()));
    let snap = rx.recv().unwrap();
    assert_eq!(snap.step, 0);
    assert_eq!(snap.hand, stg.hands[HUMAN]);

    // a dropped receiver is not an error
    drop(rx);
    ch.notify_event(&stg, &Event::select(Selection::Drawn));
}

#[test]
fn test_snapshot_channel_hides_opponents_for_a_round() {
    use crate::actor::create_actor;
    use crate::control::{RoundEngine, Rule};

    let a = create_actor("Isolated").unwrap();
    let actors = [a.clone_box(), a.clone_box(), a.clone_box(), a.clone_box()];
    let (tx, rx) = mpsc::channel();
    let listeners: Vec<Box<dyn Listener>> = vec![Box::new(SnapshotChannel::new(tx))];
    let mut e = RoundEngine::new(5, Rule::default(), 0.0, actors, listeners);
    e.start_new_round();
    while !e.is_over() {
        e.run_until_input();
        if !e.is_over() {
            assert!(e.auto_play_human());
        }
    }
    drop(e);

    let mut n = 0;
    for snap in rx.iter() {
        n += 1;
        let v: serde_json::Value = serde_json::from_str(&snap.to_json().unwrap()).unwrap();
        assert!(v.get("hands").is_none());

        // seat 0 tiles and discards are the only tiles a snapshot names
        let shown = snap.hand.len()
            + snap.drawn.iter().count()
            + snap.discards.iter().map(|d| d.len()).sum::<usize>();
        let hidden: usize = (1..SEAT)
            .map(|s| snap.hand_counts[s] + snap.has_drawn[s] as usize)
            .sum();
        assert_eq!(shown + hidden + snap.wall_count, TOTAL_TILES);
        assert_eq!(snap.hand.len(), snap.hand_counts[HUMAN]);
    }
    assert!(n > 2);
}
