// Front ends driven from main: an interactive terminal game and a batch simulator.

mod play;
mod sim;

use anyhow::{bail, Context};
use log::info;

use crate::actor::{create_actor, Actor};
use crate::control::Rule;
use crate::listener::*;
use crate::model::*;
use crate::util::misc::unixtime_now;

pub use play::{parse_command, Command, PlayApp, PlayArgs};
pub use sim::{simulate, SimApp, SimArgs, SimStats};

// Options shared by every front end.
#[derive(Debug, Clone, clap::Args)]
pub struct TableArgs {
    /// Seed of the wall generator. The current unix time is used if omitted.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Actors for seats 1-3, e.g. "Isolated" or "Random(7)". A single name fills every seat.
    #[arg(short, long, num_args = 1..=3, default_value = "Isolated")]
    pub opponents: Vec<String>,

    /// Seconds to pause before each opponent step
    #[arg(short, long, default_value_t = 0.0)]
    pub pause: f64,

    /// Score of every seat at the start of a table
    #[arg(long, default_value_t = INITIAL_SCORE)]
    pub initial_score: Point,

    /// Keep scores from one round to the next
    #[arg(long)]
    pub carry_scores: bool,

    /// Directory for per-round debug logs (JSON lines, all hands open)
    #[arg(short, long)]
    pub write: Option<String>,

    /// Print every event with all hands open (debugging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl TableArgs {
    pub fn seed(&self) -> u64 {
        match self.seed {
            Some(s) => s,
            None => {
                let s = unixtime_now();
                info!(
                    "Random seed is not specified. Unix timestamp '{}' is used as seed.",
                    s
                );
                s
            }
        }
    }

    pub fn rule(&self) -> Rule {
        Rule {
            initial_score: self.initial_score,
            carry_scores: self.carry_scores,
        }
    }

    // `human` is the actor for seat 0. It only plays when asked to.
    pub fn create_actors(&self, human: &str) -> anyhow::Result<[Box<dyn Actor>; SEAT]> {
        let names: Vec<&str> = match self.opponents.len() {
            1 => vec![self.opponents[0].as_str(); SEAT - 1],
            3 => self.opponents.iter().map(|s| s.as_str()).collect(),
            n => bail!("expected 1 or 3 opponent actors, got {}", n),
        };
        let create = |s: Seat, name: &str| {
            create_actor(name).with_context(|| format!("actor for seat {}", s))
        };
        Ok([
            create(0, human)?,
            create(1, names[0])?,
            create(2, names[1])?,
            create(3, names[2])?,
        ])
    }

    pub fn create_listeners(&self) -> Vec<Box<dyn Listener>> {
        let mut listeners: Vec<Box<dyn Listener>> = vec![];
        if self.verbose {
            listeners.push(Box::new(EventPrinter::new()));
        }
        if let Some(dir) = &self.write {
            listeners.push(Box::new(SnapshotWriter::new(dir)));
        }
        listeners
    }
}

#[cfg(test)]
fn table_args(opponents: &[&str]) -> TableArgs {
    TableArgs {
        seed: Some(1),
        opponents: opponents.iter().map(|s| s.to_string()).collect(),
        pause: 0.0,
        initial_score: INITIAL_SCORE,
        carry_scores: false,
        write: None,
        verbose: false,
    }
}

#[test]
fn test_create_actors() {
    let actors = table_args(&["Random(3)"]).create_actors("Tsumogiri").unwrap();
    assert_eq!(actors[0].get_name(), "Tsumogiri");
    for s in 1..SEAT {
        assert_eq!(format!("{:?}", actors[s]), "Random(seed=3)");
    }

    let actors = table_args(&["Isolated", "Random", "Tsumogiri"])
        .create_actors("Isolated")
        .unwrap();
    assert_eq!(actors[2].get_name(), "Random");
    assert_eq!(actors[3].get_name(), "Tsumogiri");

    assert!(table_args(&["Isolated", "Random"]).create_actors("Isolated").is_err());
    assert!(table_args(&["Unknown"]).create_actors("Isolated").is_err());
}
