use anyhow::{bail, Context};
use log::info;

use super::TableArgs;
use crate::control::string::{tiles_from_string, tiles_to_string};
use crate::control::wall::create_wall_debug;
use crate::control::RoundEngine;
use crate::hand::calc_winning_tiles;
use crate::model::*;
use crate::util::misc::prompt;

#[derive(Debug, Clone, clap::Args)]
pub struct PlayArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Actor used by the `a` command to play a turn for you
    #[arg(long, default_value = "Isolated")]
    pub assist: String,

    /// Fixed starting hand for seat 0 in the first round, e.g. "m123456789p1122"
    #[arg(long)]
    pub debug_hand: Option<String>,

    /// Fixed first draws of the first round in turn order, e.g. "p2z1"
    #[arg(long)]
    pub debug_deals: Option<String>,
}

// One line of terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewRound,
    Tsumo,
    Ron,
    Skip,
    Assist,
    Confirm,              // empty line
    Select(Selection),    // index into the hand or `d` for the drawn tile
    Discard(Suit, Tnum),  // tile symbol, discarded at once
}

const HELP: &str = "\
commands:
  0-12   select a held tile (again or <enter> to discard)
  d      select the drawn tile
  m5     discard a tile by symbol
  t      tsumo    r  ron    s  skip ron
  a      let the assist actor play this decision
  n      new round
  q      quit";

pub fn parse_command(line: &str) -> anyhow::Result<Command> {
    use Command::*;
    let cmd = line.trim();
    Ok(match cmd {
        "" => Confirm,
        "q" => Quit,
        "n" => NewRound,
        "t" => Tsumo,
        "r" => Ron,
        "s" => Skip,
        "a" => Assist,
        "d" => Select(Selection::Drawn),
        _ if cmd.chars().all(|c| c.is_ascii_digit()) => {
            let i: usize = cmd.parse().context("invalid index")?;
            if i >= HAND_SIZE {
                bail!("index out of range: {}", i);
            }
            Select(Selection::Held(i))
        }
        _ => {
            let keys = tiles_from_string(cmd)?;
            if keys.len() != 1 {
                bail!("specify exactly one tile: {}", cmd);
            }
            let (suit, rank) = keys[0];
            Discard(suit, rank)
        }
    })
}

// The drawn tile is preferred over a held copy of the same value.
fn find_tile(snap: &Snapshot, key: TileKey) -> Option<Selection> {
    if snap.drawn.is_some_and(|t| t.key() == key) {
        return Some(Selection::Drawn);
    }
    snap.hand
        .iter()
        .position(|t| t.key() == key)
        .map(Selection::Held)
}

// [App]
#[derive(Debug)]
pub struct PlayApp {
    args: PlayArgs,
}

impl PlayApp {
    pub fn new(args: PlayArgs) -> Self {
        Self { args }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let table = &self.args.table;
        let seed = table.seed();
        let actors = table.create_actors(&self.args.assist)?;
        for s in 1..SEAT {
            println!("seat {}: {:?}", s, actors[s]);
        }
        println!("seed: {}", seed);
        println!("{}", HELP);

        let mut engine = RoundEngine::new(
            seed,
            table.rule(),
            table.pause,
            actors,
            table.create_listeners(),
        );

        if self.args.debug_hand.is_some() || self.args.debug_deals.is_some() {
            let hand = self.args.debug_hand.as_deref().unwrap_or("");
            let deals = self.args.debug_deals.as_deref().unwrap_or("");
            let wall = create_wall_debug(seed, [hand, "", "", ""], deals)?;
            engine.start_round_with_wall(wall);
        } else {
            engine.start_new_round();
        }

        loop {
            engine.run_until_input();
            let snap = engine.snapshot();
            render(&snap);

            let line = prompt()?;
            let cmd = match parse_command(&line) {
                Ok(c) => c,
                Err(e) => {
                    println!("{:#}", e);
                    continue;
                }
            };

            let changed = match cmd {
                Command::Quit => break,
                Command::NewRound => {
                    engine.start_new_round();
                    true
                }
                Command::Tsumo => engine.declare_tsumo(),
                Command::Ron => engine.declare_ron(),
                Command::Skip => engine.decline_ron(),
                Command::Assist => engine.auto_play_human(),
                Command::Confirm => engine.confirm_discard(),
                Command::Select(sel) => engine.select_tile(sel),
                Command::Discard(suit, rank) => match find_tile(&snap, (suit, rank)) {
                    Some(sel) => engine.discard_tile(sel),
                    None => false,
                },
            };
            if !changed {
                println!("not available now");
            }
        }

        let stg = engine.get_stage();
        info!("quit after {} round(s), scores: {:?}", engine.get_round_count(), stg.scores);
        Ok(())
    }
}

fn render(snap: &Snapshot) {
    println!();
    println!(
        "wall: {}  turn: seat {}  phase: {:?}  step: {}",
        snap.wall_count, snap.turn, snap.phase, snap.step
    );
    for s in (1..SEAT).rev() {
        println!(
            "seat {} [{:>6}] {:>2} tiles{}  discards: {}",
            s,
            snap.scores[s],
            snap.hand_counts[s],
            if snap.has_drawn[s] { "+1" } else { "  " },
            tiles_to_string(&snap.discards[s]),
        );
    }
    println!(
        "seat 0 [{:>6}] discards: {}",
        snap.scores[HUMAN],
        tiles_to_string(&snap.discards[HUMAN])
    );

    let mut line = String::new();
    for (i, t) in snap.hand.iter().enumerate() {
        let mark = if snap.selected == Some(Selection::Held(i)) { "*" } else { "" };
        line += &format!("{}:{}{}{} ", i, mark, t, t.unicode());
    }
    if let Some(t) = snap.drawn {
        let mark = if snap.selected == Some(Selection::Drawn) { "*" } else { "" };
        line += &format!("| d:{}{}{}", mark, t, t.unicode());
    }
    println!("{}", line);

    if snap.drawn.is_none() {
        let waits: Vec<String> = calc_winning_tiles(&snap.hand)
            .iter()
            .map(|(s, n)| format!("{}{}", s.to_char(), n))
            .collect();
        if !waits.is_empty() {
            println!("waiting: {}", waits.join(" "));
        }
    }

    if snap.can_tsumo {
        println!("tsumo available [t]");
    }
    if let (true, Some(ron)) = (snap.can_ron, snap.pending_ron) {
        println!("ron on {} from seat {} [r] / skip [s]", ron.tile, ron.from);
    }
    if let Some(r) = &snap.result {
        println!("{}  (new round [n], quit [q])", r);
    }
}

#[test]
fn test_parse_command() {
    use Command::*;
    assert_eq!(parse_command("q\n").unwrap(), Quit);
    assert_eq!(parse_command("\n").unwrap(), Confirm);
    assert_eq!(parse_command("d").unwrap(), Select(Selection::Drawn));
    assert_eq!(parse_command(" 12 ").unwrap(), Select(Selection::Held(12)));
    assert_eq!(parse_command("z7").unwrap(), Discard(Suit::Honor, 7));
    assert!(parse_command("13").is_err());
    assert!(parse_command("m12").is_err());
    assert!(parse_command("x").is_err());
}

#[test]
fn test_find_tile_prefers_drawn() {
    let wall = crate::control::wall::create_wall_debug(0, ["m1123", "", "", ""], "m1").unwrap();
    let mut stg = RoundState::new(wall, [INITIAL_SCORE; SEAT]);
    stg.drawn[HUMAN] = Some(stg.wall.remove(0));
    let snap = Snapshot::from_state(&stg);
    assert_eq!(find_tile(&snap, (Suit::Man, 1)), Some(Selection::Drawn));
    assert_eq!(find_tile(&snap, (Suit::Man, 3)), Some(Selection::Held(3)));
}
