use std::collections::VecDeque;

use crate::model::*;

// An engine-driven transition waiting to run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub seat: Seat,
    pub action: Action,
    pub delay: f64, // seconds to wait before applying
}

// Pending engine-driven transitions, derived from the current state.
// Human-driven transitions are never queued.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: VecDeque<Step>,
    pause: f64,
}

impl Scheduler {
    pub fn new(pause: f64) -> Self {
        Self {
            queue: VecDeque::new(),
            pause,
        }
    }

    // Drop whatever was pending and queue the step the state calls for.
    pub fn schedule(&mut self, stg: &RoundState) {
        self.queue.clear();
        if let Some(action) = next_action(stg) {
            let seat = stg.turn;
            let delay = if seat == HUMAN { 0.0 } else { self.pause };
            self.queue.push_back(Step {
                seat,
                action,
                delay,
            });
        }
    }

    pub fn pop(&mut self) -> Option<Step> {
        self.queue.pop_front()
    }

    pub fn peek(&self) -> Option<&Step> {
        self.queue.front()
    }

    pub fn clear(&mut self) {
        self.queue.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

// Transition the engine itself must apply next, None when waiting for the human
// or when the round is over.
pub fn next_action(stg: &RoundState) -> Option<Action> {
    if stg.is_over {
        return None;
    }
    match stg.phase {
        Phase::Draw => Some(Action::Draw),
        Phase::Discard if stg.turn != HUMAN => Some(Action::OpponentTurn),
        _ => None,
    }
}

#[cfg(test)]
fn stage() -> RoundState {
    RoundState::new(crate::control::wall::create_wall(5), [INITIAL_SCORE; SEAT])
}

#[test]
fn test_next_action() {
    let mut stg = stage();
    assert_eq!(next_action(&stg), Some(Action::Draw));

    stg.phase = Phase::Discard;
    assert_eq!(next_action(&stg), None);
    stg.turn = 2;
    assert_eq!(next_action(&stg), Some(Action::OpponentTurn));

    stg.phase = Phase::WaitForRonDecision;
    assert_eq!(next_action(&stg), None);

    stg.phase = Phase::Ended;
    stg.is_over = true;
    assert_eq!(next_action(&stg), None);
}

#[test]
fn test_schedule_replaces_pending() {
    let mut sch = Scheduler::new(0.5);
    let mut stg = stage();
    sch.schedule(&stg);
    assert_eq!(sch.peek().map(|s| s.delay), Some(0.0));

    stg.turn = 3;
    sch.schedule(&stg);
    sch.schedule(&stg);
    let s = sch.pop().unwrap();
    assert_eq!((s.seat, s.action, s.delay), (3, Action::Draw, 0.5));
    assert!(sch.is_empty());

    stg.turn = HUMAN;
    stg.phase = Phase::Discard;
    sch.schedule(&stg);
    assert!(sch.is_empty());
}
