use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use timetable::core::context::AppContext;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_timetable"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

pub const SAMPLE_ROWS: &str = r#"[
  { "날짜": 20240603, "시작시간": "09:00", "종료시간": "10:00", "활동명": "수학" },
  { "날짜": 20240603, "시작시간": "09:00", "종료시간": "10:30", "활동명": "영어" },
  { "날짜": 20240603, "시작시간": "14:00", "종료시간": "15:00", "활동명": "피아노" },
  { "날짜": 20240605, "시작시간": "10:00", "종료시간": "11:00", "활동명": "미술" },
  { "날짜": 20240605, "종료시간": "12:00", "활동명": "시작 없음" },
  { "날짜": 20240611, "시작시간": "16:00", "종료시간": "17:00", "활동명": "수영", "장소": "체육관" }
]"#;

pub fn write_data(dir: &Path, rows: &str) {
    fs::write(dir.join("data.json"), rows).unwrap();
}

pub fn write_config(dir: &Path, start: Option<&str>, batch: bool) {
    let start = start
        .map(|s| format!("\"{s}\""))
        .unwrap_or_else(|| "null".to_string());
    let batch = if batch { "True" } else { "False" };
    let cfg = format!(
        r#"{{
  "data_file": {{ "value": "data.json", "description": "Activity rows" }},
  "batch_fetch_enabled": {{ "value": "{batch}", "description": "batch" }},
  "title_prefix": {{ "value": "우리집", "description": "prefix" }},
  "start_date": {{ "value": {start}, "description": "start" }},
  "file_logging_enabled": {{ "value": "True", "description": "file logging" }}
}}"#
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

/// Data file plus a config pinned to the week of 2024-06-03.
pub fn sample_dir(prefix: &str, batch: bool) -> PathBuf {
    let dir = make_temp_dir(prefix);
    write_data(&dir, SAMPLE_ROWS);
    write_config(&dir, Some("2024-06-05"), batch);
    dir
}

pub fn build_context(dir: &Path) -> AppContext {
    AppContext::new_with_paths(
        dir.join("config.json"),
        dir.join("logs"),
        dir.join("exports"),
    )
    .expect("context should build")
}

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .current_dir(dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    child
        .stdin
        .as_mut()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();

    child.wait_with_output().unwrap()
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1B' && chars.peek() == Some(&'[') {
            let _ = chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if c.is_control() {
            continue;
        }
        out.push(c);
    }

    out
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let logs_dir = dir.join("logs");
    let mut entries = fs::read_dir(&logs_dir).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}
