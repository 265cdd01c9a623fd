use log::{debug, info};
use rand::prelude::*;

use super::{
    round_controller::{can_declare_ron, can_declare_tsumo, update},
    scheduler::Scheduler,
    wall::create_wall,
};
use crate::{actor::Actor, listener::Listener, model::*, util::misc::sleep};

#[derive(Debug, Clone)]
pub struct Rule {
    pub initial_score: Point, // scores of a fresh table
    pub carry_scores: bool,   // keep scores across start_new_round
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            initial_score: INITIAL_SCORE,
            carry_scores: false,
        }
    }
}

// [Engine]
// Owns the round state and drives every engine-side transition.
// The human seat (0) only moves through the input methods, each of which
// returns whether the state changed.
#[derive(Debug)]
pub struct RoundEngine {
    seed: u64,               // seed of the wall generator
    rng: rand::rngs::StdRng, // wall generator
    rule: Rule,
    stage: RoundState,
    actors: [Box<dyn Actor>; SEAT], // seat 0 only plays through auto_play_human
    listeners: Vec<Box<dyn Listener>>,
    scheduler: Scheduler,
    n_round: usize, // rounds dealt so far
}

impl RoundEngine {
    pub fn new(
        seed: u64,
        rule: Rule,
        pause: f64,
        actors: [Box<dyn Actor>; SEAT],
        listeners: Vec<Box<dyn Listener>>,
    ) -> Self {
        let rng = rand::SeedableRng::seed_from_u64(seed);
        let stage = RoundState::new(vec![], [rule.initial_score; SEAT]);
        Self {
            seed,
            rng,
            rule,
            stage,
            actors,
            listeners,
            scheduler: Scheduler::new(pause),
            n_round: 0,
        }
    }

    pub fn get_seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn get_stage(&self) -> &RoundState {
        &self.stage
    }

    pub fn get_actors(&self) -> &[Box<dyn Actor>; SEAT] {
        &self.actors
    }

    pub fn get_round_count(&self) -> usize {
        self.n_round
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_state(&self.stage)
    }

    pub fn can_tsumo(&self) -> bool {
        can_declare_tsumo(&self.stage)
    }

    pub fn can_ron(&self) -> bool {
        can_declare_ron(&self.stage)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.stage.is_over
    }

    // Waiting for the human to act (or the round is over).
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.scheduler.is_empty()
    }

    // [Round]

    // Discard the current round and deal a fresh one from the next wall seed.
    pub fn start_new_round(&mut self) {
        let wall = create_wall(self.rng.next_u64());
        self.start_round_with_wall(wall);
    }

    // Deal a round from the given 136-tile wall.
    pub fn start_round_with_wall(&mut self, wall: Vec<Tile>) {
        debug_assert_eq!(wall.len(), TOTAL_TILES);
        let scores = if self.rule.carry_scores && self.n_round > 0 {
            self.stage.scores
        } else {
            [self.rule.initial_score; SEAT]
        };

        self.stage = RoundState::new(wall, scores);
        self.n_round += 1;
        for s in 0..SEAT {
            self.actors[s].init(s);
        }
        info!("round {} dealt (wall: {})", self.n_round, self.stage.wall_count());

        let stg = &self.stage;
        let event = Event::new(stg.scores, stg.hands.clone(), stg.wall_count());
        self.notify(&[event]);
        self.scheduler.schedule(&self.stage);
    }

    // [Step]

    // Apply the next engine-side transition. False if nothing was pending.
    pub fn step(&mut self) -> bool {
        let Some(step) = self.scheduler.pop() else {
            return false;
        };
        sleep(step.delay);

        let events = update(
            &mut self.stage,
            &step.action,
            self.actors[step.seat].as_mut(),
        );
        if events.is_empty() {
            debug!("scheduled {} for seat {} was rejected", step.action, step.seat);
        }
        self.notify(&events);
        self.scheduler.schedule(&self.stage);
        true
    }

    // Run engine-side transitions until the human must act or the round ends.
    pub fn run_until_input(&mut self) {
        while self.step() {}
    }

    // [Human input]

    pub fn select_tile(&mut self, selection: Selection) -> bool {
        self.handle_input(Action::select(selection))
    }

    pub fn confirm_discard(&mut self) -> bool {
        self.handle_input(Action::ConfirmDiscard)
    }

    pub fn declare_tsumo(&mut self) -> bool {
        self.handle_input(Action::DeclareTsumo)
    }

    pub fn declare_ron(&mut self) -> bool {
        self.handle_input(Action::DeclareRon)
    }

    pub fn decline_ron(&mut self) -> bool {
        self.handle_input(Action::DeclineRon)
    }

    // Ignored while an engine-side transition is pending.
    pub fn handle_input(&mut self, act: Action) -> bool {
        if !act.is_human_input() || !self.scheduler.is_empty() {
            debug!("input {} ignored", act);
            return false;
        }
        let events = update(&mut self.stage, &act, self.actors[HUMAN].as_mut());
        if events.is_empty() {
            return false;
        }
        self.notify(&events);
        self.scheduler.schedule(&self.stage);
        true
    }

    // Let the seat 0 actor make the pending human decision.
    // Returns false if no decision is pending.
    pub fn auto_play_human(&mut self) -> bool {
        let stg = &self.stage;
        if can_declare_ron(stg) {
            let Some(ron) = stg.pending_ron else {
                return false;
            };
            let hand = stg.hands[HUMAN].clone();
            return if self.actors[HUMAN].declare_ron(&hand, ron.tile) {
                self.declare_ron()
            } else {
                self.decline_ron()
            };
        }

        if stg.phase != Phase::Discard || stg.turn != HUMAN || stg.is_over {
            return false;
        }
        let hand = stg.full_hand(HUMAN);
        if can_declare_tsumo(stg) && self.actors[HUMAN].declare_tsumo(&hand) {
            return self.declare_tsumo();
        }

        let i = self.actors[HUMAN].select_discard(&hand);
        let selection = if i < stg.hands[HUMAN].len() {
            Selection::Held(i)
        } else {
            Selection::Drawn
        };
        self.discard_tile(selection)
    }

    // Select and commit in one call. An already selected tile is only confirmed.
    pub fn discard_tile(&mut self, selection: Selection) -> bool {
        if self.stage.selected != Some(selection) && !self.select_tile(selection) {
            return false;
        }
        self.confirm_discard()
    }

    fn notify(&mut self, events: &[Event]) {
        for event in events {
            for l in &mut self.listeners {
                l.notify_event(&self.stage, event);
            }
        }
    }
}

#[cfg(test)]
fn engine(seed: u64) -> RoundEngine {
    let actor = crate::actor::create_actor("Isolated").unwrap();
    let actors = [
        actor.clone_box(),
        actor.clone_box(),
        actor.clone_box(),
        actor.clone_box(),
    ];
    RoundEngine::new(seed, Rule::default(), 0.0, actors, vec![])
}

#[test]
fn test_same_seed_same_wall() {
    let mut e0 = engine(11);
    let mut e1 = engine(11);
    e0.start_new_round();
    e1.start_new_round();
    assert_eq!(e0.get_stage(), e1.get_stage());

    e0.start_new_round();
    assert_ne!(e0.get_stage().hands, e1.get_stage().hands);
}

#[test]
fn test_run_until_input() {
    let mut e = engine(1);
    e.start_new_round();
    e.run_until_input();
    let stg = e.get_stage();
    if !stg.is_over {
        assert_eq!(stg.turn, HUMAN);
        assert_eq!(stg.phase, Phase::Discard);
        assert!(stg.drawn[HUMAN].is_some());
        assert!(e.is_waiting());
    }

    // opponent input methods are not human inputs
    assert!(!e.handle_input(Action::Draw));
    assert!(!e.handle_input(Action::OpponentTurn));
}

#[test]
fn test_auto_play_to_end() {
    let mut e = engine(2);
    e.start_new_round();
    let mut n = 0;
    while !e.is_over() {
        e.run_until_input();
        if e.is_over() {
            break;
        }
        assert!(e.auto_play_human());
        n += 1;
        assert!(n < TOTAL_TILES);
    }
    let stg = e.get_stage();
    assert_eq!(stg.phase, Phase::Ended);
    assert!(stg.result.is_some());
    assert_eq!(stg.scores.iter().sum::<Point>(), INITIAL_SCORE * SEAT as Point);

    let mut ids: Vec<TileId> = stg.all_tiles().iter().map(|t| t.id).collect();
    ids.sort();
    assert_eq!(ids, (0..TOTAL_TILES).collect::<Vec<_>>());
}

#[test]
fn test_carry_scores() {
    let actor = crate::actor::create_actor("Tsumogiri").unwrap();
    let actors = [
        actor.clone_box(),
        actor.clone_box(),
        actor.clone_box(),
        actor.clone_box(),
    ];
    let rule = Rule {
        initial_score: 30000,
        carry_scores: true,
    };
    let mut e = RoundEngine::new(3, rule, 0.0, actors, vec![]);
    e.start_new_round();
    assert_eq!(e.get_stage().scores, [30000; SEAT]);
    e.start_new_round();
    assert_eq!(e.get_round_count(), 2);
    assert_eq!(e.get_stage().scores, [30000; SEAT]);
}

#[test]
fn test_auto_play_with_choice_preselected() {
    let mut e = engine(4);
    let wall = super::wall::create_wall_debug(4, ["m19p19s19z1234p5s5", "", "", ""], "").unwrap();
    e.start_round_with_wall(wall);
    e.run_until_input();

    let hand = e.get_stage().full_hand(HUMAN);
    let i = crate::actor::choose_discard(&hand);
    let selection = if i < HAND_SIZE {
        Selection::Held(i)
    } else {
        Selection::Drawn
    };
    assert!(e.select_tile(selection));

    assert!(e.auto_play_human());
    let stg = e.get_stage();
    assert_eq!(stg.discards[HUMAN].len(), 1);
    assert_eq!(stg.discards[HUMAN][0], hand[i]);
    assert_eq!(stg.turn, 1);
    assert_eq!(stg.selected, None);
}

#[test]
fn test_discard_tile() {
    let mut e = engine(6);
    let wall = super::wall::create_wall_debug(6, ["m19p19s19z1234p5s5", "", "", ""], "").unwrap();
    e.start_round_with_wall(wall);
    e.run_until_input();

    assert!(e.select_tile(Selection::Held(2)));
    assert!(e.discard_tile(Selection::Drawn));
    assert_eq!(e.get_stage().turn, 1);
    assert!(!e.discard_tile(Selection::Drawn));
}
