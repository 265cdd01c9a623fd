use log::{debug, info, warn};

use crate::{
    actor::Actor,
    hand::{calc_points, calc_winning_tiles, is_tenpai, is_winning_hand, ron_deltas, tsumo_deltas},
    model::*,
    util::misc::vec_to_string,
};

// [Transition]
// `apply` and `update` are the only mutators of a RoundState.
// An action whose precondition fails leaves the state untouched and yields no event.

pub fn apply(stg: &RoundState, act: &Action, actor: &mut dyn Actor) -> RoundState {
    let mut next = stg.clone();
    update(&mut next, act, actor);
    next
}

// In-place transition. Returns the events produced, empty if the action was ignored.
// `actor` is consulted only for OpponentTurn.
pub fn update(stg: &mut RoundState, act: &Action, actor: &mut dyn Actor) -> Vec<Event> {
    let events = match *act {
        Action::Draw => do_draw(stg),
        Action::OpponentTurn => do_opponent_turn(stg, actor),
        Action::SelectTile { selection } => do_select(stg, selection),
        Action::ConfirmDiscard => do_confirm_discard(stg),
        Action::DeclareTsumo => do_declare_tsumo(stg),
        Action::DeclareRon => do_declare_ron(stg),
        Action::DeclineRon => do_decline_ron(stg),
    };

    if events.is_empty() {
        debug!(
            "ignored {} (step: {}, phase: {:?}, turn: {})",
            act, stg.step, stg.phase, stg.turn
        );
    } else {
        stg.step += 1;
    }
    events
}

// [Query]

pub fn can_declare_tsumo(stg: &RoundState) -> bool {
    stg.phase == Phase::Discard
        && stg.turn == HUMAN
        && stg.drawn[HUMAN].is_some()
        && is_winning_hand(&stg.full_hand(HUMAN))
}

pub fn can_declare_ron(stg: &RoundState) -> bool {
    stg.phase == Phase::WaitForRonDecision && stg.pending_ron.is_some()
}

// [Draw]

fn do_draw(stg: &mut RoundState) -> Vec<Event> {
    if stg.phase != Phase::Draw || stg.is_over {
        return vec![];
    }
    let seat = stg.turn;
    debug_assert_eq!(stg.hands[seat].len(), HAND_SIZE);
    debug_assert!(stg.drawn[seat].is_none());

    if stg.wall.is_empty() {
        return vec![end_ryukyoku(stg)];
    }

    let t = stg.wall.remove(0);
    stg.drawn[seat] = Some(t);
    stg.phase = Phase::Discard;
    debug!("seat {} draws {}", seat, t);
    vec![Event::deal(seat, t)]
}

fn end_ryukyoku(stg: &mut RoundState) -> Event {
    let mut tenpai = [false; SEAT];
    let mut hands: [Vec<Tile>; SEAT] = Default::default();
    for s in 0..SEAT {
        tenpai[s] = is_tenpai(&stg.hands[s]);
        if tenpai[s] {
            hands[s] = stg.hands[s].clone();
        }
    }

    let result = RoundResult::Ryukyoku { tenpai };
    info!("{}", result);
    finish(stg, result.clone());
    Event::draw(result, hands, stg.scores)
}

// [Opponent]

fn do_opponent_turn(stg: &mut RoundState, actor: &mut dyn Actor) -> Vec<Event> {
    if stg.phase != Phase::Discard || stg.turn == HUMAN || stg.is_over {
        return vec![];
    }
    let seat = stg.turn;
    let Some(drawn) = stg.drawn[seat] else {
        return vec![];
    };

    let mut hand = stg.full_hand(seat);
    debug_assert_eq!(hand.len(), HAND_SIZE + 1);

    // tsumo is checked before a discard is chosen
    if is_winning_hand(&hand) && actor.declare_tsumo(&hand) {
        return vec![settle_tsumo(stg, seat)];
    }

    let mut i = actor.select_discard(&hand);
    if i >= hand.len() {
        warn!(
            "{} returned discard index {} for {} tiles, discarding the drawn tile",
            actor.get_name(),
            i,
            hand.len()
        );
        i = hand.len() - 1;
    }
    let t = hand.remove(i);
    stg.hands[seat] = hand;
    stg.drawn[seat] = None;
    stg.discards[seat].push(t);
    debug!("seat {} discards {}", seat, t);

    let mut events = vec![Event::discard(seat, t, t == drawn)];
    events.extend(check_ron_chance(stg, seat, t));
    events
}

// Only the human seat may claim a discard.
fn check_ron_chance(stg: &mut RoundState, from: Seat, t: Tile) -> Option<Event> {
    let mut hand = stg.hands[HUMAN].clone();
    hand.push(t);
    if is_winning_hand(&hand) {
        stg.pending_ron = Some(PendingRon { tile: t, from });
        stg.phase = Phase::WaitForRonDecision;
        info!("seat {} can ron {} from seat {}", HUMAN, t, from);
        Some(Event::ron_chance(t, from))
    } else {
        stg.turn = next_seat(from);
        stg.phase = Phase::Draw;
        None
    }
}

// [Human]

fn is_human_discard_phase(stg: &RoundState) -> bool {
    stg.phase == Phase::Discard && stg.turn == HUMAN && !stg.is_over
}

// Selecting the already selected tile commits it.
fn do_select(stg: &mut RoundState, sel: Selection) -> Vec<Event> {
    if !is_human_discard_phase(stg) || stg.selected_tile(sel).is_none() {
        return vec![];
    }
    if stg.selected == Some(sel) {
        return do_confirm_discard(stg);
    }
    stg.selected = Some(sel);
    vec![Event::select(sel)]
}

fn do_confirm_discard(stg: &mut RoundState) -> Vec<Event> {
    if !is_human_discard_phase(stg) {
        return vec![];
    }
    let Some(sel) = stg.selected else {
        return vec![];
    };
    if stg.selected_tile(sel).is_none() {
        return vec![];
    }

    let (t, is_drawn) = match sel {
        Selection::Drawn => match stg.drawn[HUMAN].take() {
            Some(t) => (t, true),
            None => return vec![],
        },
        Selection::Held(i) => {
            let t = stg.hands[HUMAN].remove(i);
            if let Some(d) = stg.drawn[HUMAN].take() {
                stg.hands[HUMAN].push(d);
            }
            (t, false)
        }
    };
    stg.discards[HUMAN].push(t);
    stg.selected = None;
    stg.turn = next_seat(HUMAN);
    stg.phase = Phase::Draw;
    debug_assert_eq!(stg.hands[HUMAN].len(), HAND_SIZE);

    let waits = calc_winning_tiles(&stg.hands[HUMAN]);
    if !waits.is_empty() {
        let waits: Vec<String> = waits
            .iter()
            .map(|(s, n)| format!("{}{}", s.to_char(), n))
            .collect();
        info!("seat {} is tenpai, waiting on {}", HUMAN, vec_to_string(&waits));
    }

    vec![Event::discard(HUMAN, t, is_drawn)]
}

// Never triggered automatically for the human seat.
fn do_declare_tsumo(stg: &mut RoundState) -> Vec<Event> {
    if stg.is_over || !can_declare_tsumo(stg) {
        return vec![];
    }
    vec![settle_tsumo(stg, HUMAN)]
}

fn do_declare_ron(stg: &mut RoundState) -> Vec<Event> {
    if stg.is_over || !can_declare_ron(stg) {
        return vec![];
    }
    let Some(PendingRon { tile, from }) = stg.pending_ron.take() else {
        return vec![];
    };

    let points = calc_points(FIXED_HAN, true);
    let d_scores = ron_deltas(HUMAN, from, points);
    apply_deltas(stg, &d_scores);

    let mut hand = stg.hands[HUMAN].clone();
    hand.push(tile);
    let result = RoundResult::Ron {
        winner: HUMAN,
        from,
        points,
    };
    info!("{}", result);
    finish(stg, result.clone());
    vec![Event::win(result, hand, stg.scores, d_scores)]
}

// Turn progression resumes from the seat after the discarder.
fn do_decline_ron(stg: &mut RoundState) -> Vec<Event> {
    if stg.is_over || !can_declare_ron(stg) {
        return vec![];
    }
    let Some(PendingRon { from, .. }) = stg.pending_ron.take() else {
        return vec![];
    };
    stg.turn = next_seat(from);
    stg.phase = Phase::Draw;
    vec![Event::ron_skip(from)]
}

// [Settlement]

fn settle_tsumo(stg: &mut RoundState, seat: Seat) -> Event {
    let points = calc_points(FIXED_HAN, false);
    let d_scores = tsumo_deltas(seat, points);
    apply_deltas(stg, &d_scores);

    let result = RoundResult::Tsumo {
        winner: seat,
        points,
    };
    info!("{}", result);
    let hand = stg.full_hand(seat);
    finish(stg, result.clone());
    Event::win(result, hand, stg.scores, d_scores)
}

fn apply_deltas(stg: &mut RoundState, d_scores: &[Point; SEAT]) {
    for s in 0..SEAT {
        stg.scores[s] += d_scores[s];
    }
}

fn finish(stg: &mut RoundState, result: RoundResult) {
    stg.result = Some(result);
    stg.phase = Phase::Ended;
    stg.is_over = true;
    stg.selected = None;
    stg.pending_ron = None;
}

#[cfg(test)]
mod test_util {
    use super::*;
    use crate::control::wall::create_wall_debug;

    pub fn stage(hands: [&str; SEAT], deals: &str) -> RoundState {
        let wall = create_wall_debug(0, hands, deals).unwrap();
        RoundState::new(wall, [INITIAL_SCORE; SEAT])
    }

    pub fn actor() -> Box<dyn Actor> {
        crate::actor::create_actor("Isolated").unwrap()
    }
}

#[test]
fn test_confirm_discard_during_draw_is_noop() {
    let mut stg = test_util::stage(["", "", "", ""], "");
    let mut a = test_util::actor();
    let before = stg.clone();
    assert_eq!(stg.phase, Phase::Draw);
    assert!(update(&mut stg, &Action::ConfirmDiscard, a.as_mut()).is_empty());
    assert!(update(&mut stg, &Action::select(Selection::Held(0)), a.as_mut()).is_empty());
    assert!(update(&mut stg, &Action::DeclareTsumo, a.as_mut()).is_empty());
    assert!(update(&mut stg, &Action::DeclareRon, a.as_mut()).is_empty());
    assert!(update(&mut stg, &Action::OpponentTurn, a.as_mut()).is_empty());
    assert_eq!(stg, before);
}

#[test]
fn test_select_then_confirm() {
    let mut stg = test_util::stage(["m123456789p1234", "", "", ""], "s5");
    let mut a = test_util::actor();
    stg = apply(&stg, &Action::Draw, a.as_mut());
    assert_eq!(stg.phase, Phase::Discard);
    assert_eq!(stg.drawn[HUMAN].unwrap().to_string(), "s5");

    // invalid selections are ignored
    assert!(update(&mut stg, &Action::select(Selection::Held(13)), a.as_mut()).is_empty());
    assert!(update(&mut stg, &Action::ConfirmDiscard, a.as_mut()).is_empty());

    update(&mut stg, &Action::select(Selection::Held(0)), a.as_mut());
    assert_eq!(stg.selected, Some(Selection::Held(0)));
    update(&mut stg, &Action::select(Selection::Drawn), a.as_mut());
    assert_eq!(stg.selected, Some(Selection::Drawn));
    let events = update(&mut stg, &Action::ConfirmDiscard, a.as_mut());
    assert!(matches!(&events[..], [Event::Discard(e)] if e.is_drawn));

    assert_eq!(stg.discards[HUMAN].len(), 1);
    assert_eq!(stg.discards[HUMAN][0].to_string(), "s5");
    assert_eq!(stg.hands[HUMAN].len(), HAND_SIZE);
    assert_eq!(stg.drawn[HUMAN], None);
    assert_eq!(stg.selected, None);
    assert_eq!(stg.turn, 1);
    assert_eq!(stg.phase, Phase::Draw);
}

#[test]
fn test_reselect_commits_held_tile() {
    let mut stg = test_util::stage(["m123456789p1234", "", "", ""], "s5");
    let mut a = test_util::actor();
    update(&mut stg, &Action::Draw, a.as_mut());
    update(&mut stg, &Action::select(Selection::Held(12)), a.as_mut());
    let events = update(&mut stg, &Action::select(Selection::Held(12)), a.as_mut());
    assert!(matches!(&events[..], [Event::Discard(e)] if !e.is_drawn));
    assert_eq!(stg.discards[HUMAN][0].to_string(), "p4");
    // drawn tile absorbed into the hand
    assert_eq!(stg.hands[HUMAN].last().unwrap().to_string(), "s5");
    assert_eq!(stg.hands[HUMAN].len(), HAND_SIZE);
    assert_eq!(stg.turn, 1);
}

#[test]
fn test_opponent_discard_and_advance() {
    let mut stg = test_util::stage(["m9p2468s2468z1357", "m123456789p11z13", "", ""], "s1z2");
    let mut a = test_util::actor();
    update(&mut stg, &Action::Draw, a.as_mut());
    update(&mut stg, &Action::select(Selection::Drawn), a.as_mut());
    update(&mut stg, &Action::ConfirmDiscard, a.as_mut());
    assert_eq!(stg.turn, 1);

    // opponent actions are only accepted in the discard phase
    assert!(update(&mut stg, &Action::OpponentTurn, a.as_mut()).is_empty());
    update(&mut stg, &Action::Draw, a.as_mut());
    assert_eq!(stg.drawn[1].unwrap().to_string(), "z2");
    let before = stg.step;
    let events = update(&mut stg, &Action::OpponentTurn, a.as_mut());
    assert_eq!(stg.step, before + 1);
    assert_eq!(events.len(), 1);
    assert_eq!(stg.discards[1].len(), 1);
    assert_eq!(stg.hands[1].len(), HAND_SIZE);
    assert_eq!(stg.drawn[1], None);
    assert_eq!(stg.turn, 2);
    assert_eq!(stg.phase, Phase::Draw);
}
