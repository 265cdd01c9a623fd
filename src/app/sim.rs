use std::fmt;

use log::info;

use super::TableArgs;
use crate::control::RoundEngine;
use crate::model::*;

#[derive(Debug, Clone, clap::Args)]
pub struct SimArgs {
    #[command(flatten)]
    pub table: TableArgs,

    /// Actor playing seat 0
    #[arg(long, default_value = "Isolated")]
    pub human: String,

    /// Number of rounds to play
    #[arg(short = 'n', long, default_value_t = 100)]
    pub rounds: usize,

    /// Do not print the result of each round
    #[arg(short, long)]
    pub quiet: bool,
}

// Aggregated outcome of a batch of rounds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimStats {
    pub rounds: usize,
    pub tsumo: [usize; SEAT],
    pub ron: [usize; SEAT],
    pub deal_in: [usize; SEAT], // discards that were ronned
    pub ryukyoku: usize,
    pub tenpai_at_ryukyoku: [usize; SEAT],
    pub delta_scores: [Point; SEAT], // summed over all rounds
    pub steps: usize,
}

impl SimStats {
    pub fn push(&mut self, stg: &RoundState, start_scores: &[Point; SEAT]) {
        self.rounds += 1;
        self.steps += stg.step;
        for s in 0..SEAT {
            self.delta_scores[s] += stg.scores[s] - start_scores[s];
        }
        match &stg.result {
            Some(RoundResult::Tsumo { winner, .. }) => self.tsumo[*winner] += 1,
            Some(RoundResult::Ron { winner, from, .. }) => {
                self.ron[*winner] += 1;
                self.deal_in[*from] += 1;
            }
            Some(RoundResult::Ryukyoku { tenpai }) => {
                self.ryukyoku += 1;
                for s in 0..SEAT {
                    if tenpai[s] {
                        self.tenpai_at_ryukyoku[s] += 1;
                    }
                }
            }
            None => {}
        }
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rounds.max(1) as f64;
        writeln!(f, "rounds: {}, ryukyoku: {:.3}", self.rounds, self.ryukyoku as f64 / n)?;
        writeln!(f, "        tsumo   ron     deal_in tenpai  avg_delta")?;
        for s in 0..SEAT {
            writeln!(
                f,
                "seat {}: {:.3}   {:.3}   {:.3}   {:.3}   {:+.1}",
                s,
                self.tsumo[s] as f64 / n,
                self.ron[s] as f64 / n,
                self.deal_in[s] as f64 / n,
                self.tenpai_at_ryukyoku[s] as f64 / n,
                self.delta_scores[s] as f64 / n,
            )?;
        }
        write!(f, "avg steps: {:.1}", self.steps as f64 / n)
    }
}

// [App]
#[derive(Debug)]
pub struct SimApp {
    args: SimArgs,
}

impl SimApp {
    pub fn new(args: SimArgs) -> Self {
        Self { args }
    }

    pub fn run(self) -> anyhow::Result<SimStats> {
        let table = &self.args.table;
        let seed = table.seed();
        let actors = table.create_actors(&self.args.human)?;
        println!("seed: {}", seed);
        for s in 0..SEAT {
            println!("seat {}: {:?}", s, actors[s]);
        }
        println!();

        let mut engine = RoundEngine::new(
            seed,
            table.rule(),
            table.pause,
            actors,
            table.create_listeners(),
        );

        let start = std::time::Instant::now();
        let stats = simulate(&mut engine, self.args.rounds, !self.args.quiet);
        println!("{}", stats);
        println!(
            "total elapsed time: {:8.3}sec",
            start.elapsed().as_nanos() as f32 / 1000000000.0
        );
        Ok(stats)
    }
}

// Play `rounds` rounds with seat 0 driven by its actor.
pub fn simulate(engine: &mut RoundEngine, rounds: usize, print: bool) -> SimStats {
    let mut stats = SimStats::default();
    for i in 0..rounds {
        engine.start_new_round();
        let start_scores = engine.get_stage().scores;
        while !engine.is_over() {
            engine.run_until_input();
            if !engine.is_over() && !engine.auto_play_human() {
                break;
            }
        }

        let stg = engine.get_stage();
        if let Some(r) = &stg.result {
            if print {
                println!("round {:>4}: {} {:?}", i, r, stg.scores);
            }
        }
        stats.push(stg, &start_scores);
    }
    info!("simulated {} rounds", stats.rounds);
    stats
}

#[test]
fn test_simulate() {
    let table = super::table_args(&["Isolated", "Random(5)", "Tsumogiri"]);
    let actors = table.create_actors("Isolated").unwrap();
    let mut engine = RoundEngine::new(9, table.rule(), 0.0, actors, vec![]);
    let stats = simulate(&mut engine, 20, false);

    assert_eq!(stats.rounds, 20);
    let n_win: usize = stats.tsumo.iter().chain(stats.ron.iter()).sum();
    assert_eq!(n_win + stats.ryukyoku, 20);
    assert_eq!(stats.ron.iter().sum::<usize>(), stats.deal_in.iter().sum::<usize>());
    // only seat 0 can ron
    assert_eq!(stats.ron[1..].iter().sum::<usize>(), 0);
    assert_eq!(stats.deal_in[HUMAN], 0);
    assert_eq!(stats.delta_scores.iter().sum::<Point>(), 0);
}

#[test]
fn test_stats_push() {
    let mut stg = RoundState::new(crate::control::wall::create_wall(0), [INITIAL_SCORE; SEAT]);
    let start = stg.scores;
    stg.result = Some(RoundResult::Ron {
        winner: 0,
        from: 2,
        points: 4800,
    });
    stg.scores[0] += 4800;
    stg.scores[2] -= 4800;

    let mut stats = SimStats::default();
    stats.push(&stg, &start);
    assert_eq!(stats.ron, [1, 0, 0, 0]);
    assert_eq!(stats.deal_in, [0, 0, 1, 0]);
    assert_eq!(stats.delta_scores, [4800, 0, -4800, 0]);
}
