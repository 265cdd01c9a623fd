use std::sync::{mpsc, Arc, Mutex};

use mahjong_round::actor::{create_actor, Actor};
use mahjong_round::control::{create_wall_debug, RoundEngine, Rule};
use mahjong_round::listener::{Listener, SnapshotChannel};
use mahjong_round::model::*;

#[derive(Clone, Default)]
struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Listener for Recorder {
    fn notify_event(&mut self, _stg: &RoundState, event: &Event) {
        self.events.lock().unwrap().push(event.clone());
    }
}

fn actors(human: &str, opponent: &str) -> [Box<dyn Actor>; SEAT] {
    let op = create_actor(opponent).unwrap();
    [
        create_actor(human).unwrap(),
        op.clone_box(),
        op.clone_box(),
        op.clone_box(),
    ]
}

fn engine(listeners: Vec<Box<dyn Listener>>) -> RoundEngine {
    RoundEngine::new(
        0,
        Rule::default(),
        0.0,
        actors("Tsumogiri", "Tsumogiri"),
        listeners,
    )
}

fn start(e: &mut RoundEngine, hands: [&str; SEAT], deals: &str) {
    let wall = create_wall_debug(7, hands, deals).unwrap();
    e.start_round_with_wall(wall);
}

fn assert_conserved(stg: &RoundState) {
    let mut ids: Vec<TileId> = stg.all_tiles().iter().map(|t| t.id).collect();
    ids.sort();
    assert_eq!(ids, (0..TOTAL_TILES).collect::<Vec<_>>());
}

// seat 0 waits on p1 and z5
const WAITING: &str = "m123456789p11z55";
// 13 scattered tiles, far from any win
const SCATTERED: &str = "m19p19s19z1234p5s5";

#[test]
fn test_tsumo_settlement() {
    let rec = Recorder::default();
    let mut e = engine(vec![Box::new(rec.clone())]);
    start(&mut e, [WAITING, "", "", ""], "z5");

    e.run_until_input();
    let snap = e.snapshot();
    assert_eq!(snap.phase, Phase::Discard);
    assert_eq!(snap.turn, HUMAN);
    assert!(snap.can_tsumo);
    assert!(!snap.can_ron);
    // still waiting for the human, never auto-declared
    assert!(!e.is_over());

    assert!(e.declare_tsumo());
    let stg = e.get_stage();
    assert!(stg.is_over);
    assert_eq!(stg.phase, Phase::Ended);
    assert_eq!(
        stg.result,
        Some(RoundResult::Tsumo {
            winner: HUMAN,
            points: 2400
        })
    );
    assert_eq!(stg.scores, [27400, 24200, 24200, 24200]);
    assert_conserved(stg);

    // terminal state rejects everything but a new round
    assert!(!e.declare_tsumo());
    assert!(!e.select_tile(Selection::Drawn));
    assert!(!e.step());

    let events = rec.events.lock().unwrap();
    assert!(matches!(events.first(), Some(Event::New(_))));
    match events.last() {
        Some(Event::Win(w)) => {
            assert_eq!(w.delta_scores, [2400, -800, -800, -800]);
            assert_eq!(w.hand.len(), 14);
        }
        other => panic!("unexpected last event: {:?}", other),
    }
}

#[test]
fn test_ron_settlement() {
    let mut e = engine(vec![]);
    start(&mut e, [WAITING, SCATTERED, "", ""], "s1z5");

    e.run_until_input();
    assert!(!e.can_tsumo());
    assert!(e.select_tile(Selection::Drawn));
    assert!(e.confirm_discard());

    // seat 1 draws z5 and discards it at once
    e.run_until_input();
    let snap = e.snapshot();
    assert_eq!(snap.phase, Phase::WaitForRonDecision);
    assert!(snap.can_ron);
    let ron = snap.pending_ron.unwrap();
    assert_eq!(ron.tile.to_string(), "z5");
    assert_eq!(ron.from, 1);
    assert_eq!(snap.discards[1].last(), Some(&ron.tile));

    assert!(e.declare_ron());
    let stg = e.get_stage();
    assert_eq!(
        stg.result,
        Some(RoundResult::Ron {
            winner: HUMAN,
            from: 1,
            points: 4800
        })
    );
    assert_eq!(stg.scores, [29800, 20200, 25000, 25000]);
    assert_eq!(stg.pending_ron, None);
    assert_conserved(stg);
}

#[test]
fn test_decline_ron() {
    let mut e = engine(vec![]);
    start(&mut e, [WAITING, SCATTERED, "", ""], "s1z5");
    e.run_until_input();
    e.select_tile(Selection::Drawn);
    e.select_tile(Selection::Drawn);
    e.run_until_input();
    assert!(e.can_ron());

    assert!(e.decline_ron());
    assert!(!e.can_ron());
    let stg = e.get_stage();
    assert_eq!(stg.turn, 2);
    assert_eq!(stg.phase, Phase::Draw);
    assert_eq!(stg.scores, [INITIAL_SCORE; SEAT]);

    assert!(e.step());
    assert!(e.get_stage().drawn[2].is_some());
    assert!(!e.decline_ron());
}

#[test]
fn test_ryukyoku_with_tenpai() {
    let rec = Recorder::default();
    let mut e = engine(vec![Box::new(rec.clone())]);
    // every z7 is held, so the tanki wait of seat 0 never shows up
    start(
        &mut e,
        [
            "m123456789p111z7",
            "m147p258s369z1237",
            "m258p369s147z4567",
            "m369p47s258z12347",
        ],
        "",
    );

    let mut n = 0;
    while !e.is_over() {
        e.run_until_input();
        if e.is_over() {
            break;
        }
        assert!(!e.can_ron());
        assert!(e.auto_play_human());
        n += 1;
    }
    assert_eq!(n, 21);

    let stg = e.get_stage();
    assert_eq!(
        stg.result,
        Some(RoundResult::Ryukyoku {
            tenpai: [true, false, false, false]
        })
    );
    assert_eq!(stg.wall_count(), 0);
    assert_eq!(stg.scores, [INITIAL_SCORE; SEAT]);
    assert_eq!(stg.discards.iter().map(|d| d.len()).sum::<usize>(), 84);
    assert_conserved(stg);

    let events = rec.events.lock().unwrap();
    match events.last() {
        Some(Event::Draw(d)) => {
            assert_eq!(d.hands[HUMAN].len(), HAND_SIZE);
            assert!(d.hands[1..].iter().all(|h| h.is_empty()));
        }
        other => panic!("unexpected last event: {:?}", other),
    }
}

#[test]
fn test_inputs_are_guarded() {
    let mut e = engine(vec![]);
    start(&mut e, [SCATTERED, "", "", ""], "");

    // the opening draw is still pending
    assert!(!e.select_tile(Selection::Held(0)));
    assert!(!e.confirm_discard());

    e.run_until_input();
    let before = e.snapshot();
    assert!(!e.confirm_discard());
    assert!(!e.declare_tsumo());
    assert!(!e.declare_ron());
    assert!(!e.decline_ron());
    assert!(!e.select_tile(Selection::Held(HAND_SIZE)));
    assert_eq!(e.snapshot(), before);

    assert!(e.select_tile(Selection::Held(0)));
    assert_eq!(e.snapshot().selected, Some(Selection::Held(0)));
    assert!(e.confirm_discard());

    // seat 1 is now pending
    assert!(!e.select_tile(Selection::Drawn));
    assert_eq!(e.get_stage().turn, 1);
}

#[test]
fn test_steps_are_observable() {
    let (tx, rx) = mpsc::channel();
    let mut e = engine(vec![Box::new(SnapshotChannel::new(tx))]);
    start(&mut e, [SCATTERED, SCATTERED, "", ""], "");
    let snap = rx.recv().unwrap();
    assert_eq!(snap.step, 0);
    assert_eq!(snap.wall_count, 84);

    assert!(e.step());
    let snap = rx.recv().unwrap();
    assert_eq!(snap.step, 1);
    assert_eq!(snap.phase, Phase::Discard);
    assert!(snap.drawn.is_some());
    assert!(!e.step());

    e.select_tile(Selection::Drawn);
    e.confirm_discard();
    assert_eq!(rx.recv().unwrap().step, 2);
    assert_eq!(rx.recv().unwrap().step, 3);

    // seat 1 draws, then discards in a separate step
    assert!(e.step());
    let snap = rx.recv().unwrap();
    assert_eq!((snap.step, snap.turn, snap.phase), (4, 1, Phase::Discard));
    assert!(snap.has_drawn[1]);
    assert!(e.step());
    let snap = rx.recv().unwrap();
    assert_eq!((snap.step, snap.turn, snap.phase), (5, 2, Phase::Draw));
    assert_eq!(snap.discards[1].len(), 1);
    assert_eq!(snap.hand_counts, [HAND_SIZE; SEAT]);
}
