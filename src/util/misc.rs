use std::fmt;
use std::io::Write;

use anyhow::Context;

pub fn sleep(sec: f64) {
    if sec > 0.0 {
        std::thread::sleep(std::time::Duration::from_millis((sec * 1000.0) as u64));
    }
}

// Seconds since the unix epoch. 0 if the clock is set before the epoch.
pub fn unixtime_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn prompt() -> anyhow::Result<String> {
    print!("> ");
    flush()?;
    let mut buf = String::new();
    std::io::stdin()
        .read_line(&mut buf)
        .context("failed to read stdin")?;
    Ok(buf)
}

pub fn flush() -> anyhow::Result<()> {
    std::io::stdout().flush()?;
    Ok(())
}

pub fn create_file(file_path: &str) -> anyhow::Result<std::fs::File> {
    let path = std::path::Path::new(file_path);
    if let Some(prefix) = path.parent() {
        std::fs::create_dir_all(prefix)
            .with_context(|| format!("failed to create {}", prefix.display()))?;
    }
    std::fs::File::create(path).with_context(|| format!("failed to create {}", file_path))
}

pub fn vec_to_string<T: fmt::Display>(v: &[T]) -> String {
    let vs: Vec<String> = v.iter().map(|x| format!("{}", x)).collect();
    "[".to_string() + &vs.join(", ") + "]"
}

#[test]
fn test_vec_to_string() {
    assert_eq!(vec_to_string(&[1, 2, 3]), "[1, 2, 3]");
    assert_eq!(vec_to_string::<i32>(&[]), "[]");
}
