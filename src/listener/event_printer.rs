use crate::control::string::tiles_to_string;
use crate::listener::Listener;
use crate::model::*;

// [EventPrinter]
// Debug trace: prints the full state, opponents' hands included.
#[derive(Debug, Default)]
pub struct EventPrinter {}

impl EventPrinter {
    pub fn new() -> Self {
        Self {}
    }

    fn print_score_change(&self, stg: &RoundState, d_scores: &[Point; SEAT]) {
        for s in 0..SEAT {
            let delta = d_scores[s];
            let new = stg.scores[s];
            let old = new - delta;
            println!("seat {}: {} -> {} ({:+})", s, old, new, delta);
        }
        println!();
    }
}

impl Listener for EventPrinter {
    fn notify_event(&mut self, stg: &RoundState, event: &Event) {
        use Event::*;
        print!("(step:{}) ", stg.step);
        match event {
            New(_) => {
                println!("New");
                println!("{}", stg);
            }
            Deal(e) => {
                println!("Deal seat {} {}", e.seat, e.tile);
            }
            Select(e) => {
                println!("Select {}", e.selection);
            }
            Discard(e) => {
                println!(
                    "Discard seat {} {} {}",
                    e.seat,
                    e.tile,
                    if e.is_drawn { "(tsumogiri)" } else { "" }
                );
            }
            RonChance(e) => {
                println!("RonChance {} from seat {}", e.tile, e.from);
            }
            RonSkip(e) => {
                println!("RonSkip seat {}", e.from);
            }
            Win(e) => {
                println!("Win {}", e.result);
                let mut hand = e.hand.clone();
                hand.sort();
                println!("hand: {}", tiles_to_string(&hand));
                self.print_score_change(stg, &e.delta_scores);
                println!("{}", stg);
            }
            Draw(e) => {
                println!("Draw {}", e.result);
                for (s, h) in e.hands.iter().enumerate() {
                    if !h.is_empty() {
                        let mut hand = h.clone();
                        hand.sort();
                        println!("seat {} tenpai: {}", s, tiles_to_string(&hand));
                    }
                }
                println!("{}", stg);
            }
        }
        println!();
    }
}
