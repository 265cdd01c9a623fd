use std::fs::File;
use std::io::{BufWriter, Write};

use log::error;

use crate::listener::Listener;
use crate::model::*;
use crate::util::misc::{create_file, unixtime_now};

// [SnapshotWriter]
// One JSON line per event: {"event": ..., "snapshot": ...}.
// A new file is opened for every round under `dir`.
// Debug record only: events carry every seat's tiles, so the file is not fit for
// a renderer that must see opponents as counts. Renderers take SnapshotChannel.
#[derive(Debug)]
pub struct SnapshotWriter {
    dir: String,
    start_time: u64,
    round_index: usize,
    writer: Option<BufWriter<File>>,
}

impl SnapshotWriter {
    pub fn new(dir: &str) -> Self {
        Self {
            dir: dir.to_string(),
            start_time: unixtime_now(),
            round_index: 0,
            writer: None,
        }
    }

    pub fn round_path(&self, round_index: usize) -> String {
        format!("{}/{}/{:02}.jsonl", self.dir, self.start_time, round_index)
    }

    fn open(&mut self) -> anyhow::Result<()> {
        let path = self.round_path(self.round_index);
        self.writer = Some(BufWriter::new(create_file(&path)?));
        self.round_index += 1;
        Ok(())
    }

    fn write_line(&mut self, stg: &RoundState, event: &Event) -> anyhow::Result<()> {
        if let Event::New(_) = event {
            self.open()?;
        }
        let Some(w) = self.writer.as_mut() else {
            return Ok(());
        };
        let line = serde_json::json!({
            "event": event,
            "snapshot": Snapshot::from_state(stg),
        });
        writeln!(w, "{}", serde_json::to_string(&line)?)?;
        if event.is_terminal() {
            w.flush()?;
            self.writer = None;
        }
        Ok(())
    }
}

impl Listener for SnapshotWriter {
    fn notify_event(&mut self, stg: &RoundState, event: &Event) {
        if let Err(e) = self.write_line(stg, event) {
            error!("snapshot write failed: {:#}", e);
            self.writer = None;
        }
    }
}

#[test]
fn test_snapshot_writer() {
    use crate::actor::create_actor;
    use crate::control::{create_wall_debug, RoundEngine, Rule};

    let dir = std::env::temp_dir().join(format!("mahjong_round_writer_{}", std::process::id()));
    let dir_str = dir.to_string_lossy().to_string();
    let writer = SnapshotWriter::new(&dir_str);
    let path0 = writer.round_path(0);
    let path1 = writer.round_path(1);

    let a = create_actor("Tsumogiri").unwrap();
    let actors = [a.clone_box(), a.clone_box(), a.clone_box(), a.clone_box()];
    let mut e = RoundEngine::new(0, Rule::default(), 0.0, actors, vec![Box::new(writer)]);
    let wall = create_wall_debug(0, ["m123456789p11z55", "", "", ""], "z5").unwrap();
    e.start_round_with_wall(wall);
    e.run_until_input();
    assert!(e.declare_tsumo());

    let text = std::fs::read_to_string(&path0).unwrap();
    let lines: Vec<serde_json::Value> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    let types: Vec<&str> = lines
        .iter()
        .map(|v| v["event"]["type"].as_str().unwrap())
        .collect();
    assert_eq!(types, ["New", "Deal", "Win"]);
    for (i, v) in lines.iter().enumerate() {
        assert_eq!(v["snapshot"]["step"], i);
    }
    assert_eq!(lines[2]["snapshot"]["is_over"], true);

    assert!(!std::path::Path::new(&path1).exists());
    e.start_new_round();
    assert!(std::path::Path::new(&path1).exists());

    std::fs::remove_dir_all(&dir).ok();
}
