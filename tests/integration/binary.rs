use std::process::{Command, Stdio};

use crate::common::{
    binary_path, make_temp_dir, normalized_lines, read_log_contents, run_with_input, sample_dir,
    write_config,
};

#[test]
fn session_navigates_and_prints() {
    let dir = sample_dir("bin-session", true);

    let output = run_with_input(&dir, "next\nprint\nprev\nexit\n");

    assert!(output.status.success(), "session should exit cleanly");
    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "우리집 2024년 6월 2주차 시간표"));
    assert!(lines.iter().any(|l| l == "우리집 2024년 6월 3주차 시간표"));
    assert!(dir.join("exports").join("timetable-20240610.html").is_file());
}

#[test]
fn shortcut_sequences_navigate() {
    let dir = sample_dir("bin-shortcut", false);

    let output = run_with_input(&dir, "\x1B[1;5C\nctrl+left\nexit\n");

    assert!(output.status.success());
    let lines = normalized_lines(&output.stdout);
    let titles = lines
        .iter()
        .filter(|l| l.ends_with("주차 시간표"))
        .map(String::as_str)
        .collect::<Vec<_>>();
    assert_eq!(
        titles,
        vec![
            "우리집 2024년 6월 2주차 시간표",
            "우리집 2024년 6월 3주차 시간표",
            "우리집 2024년 6월 2주차 시간표",
        ]
    );
}

#[test]
fn session_writes_log_file() {
    let dir = sample_dir("bin-log", true);

    let output = run_with_input(&dir, "next\nexit\n");

    assert!(output.status.success());
    let log = read_log_contents(&dir).expect("a session log should exist");
    assert!(log.contains("Command run: next"));
    assert!(log.contains("Showing 우리집 2024년 6월 3주차 시간표"));
}

#[test]
fn missing_config_exits_with_error_state() {
    let dir = make_temp_dir("bin-no-config");

    let output = Command::new(binary_path())
        .current_dir(&dir)
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("시간표를 불러올 수 없습니다"));
    assert!(stderr.contains("not found"));
}

#[test]
fn missing_data_file_exits_with_error_state() {
    let dir = make_temp_dir("bin-no-data");
    write_config(&dir, None, true);

    let output = run_with_input(&dir, "exit\n");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Startup error: missing data file"));
}

#[test]
fn unknown_flag_is_rejected() {
    let dir = make_temp_dir("bin-bad-flag");

    let output = Command::new(binary_path())
        .current_dir(&dir)
        .arg("--colour")
        .stdin(Stdio::null())
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown argument: --colour"));
}
