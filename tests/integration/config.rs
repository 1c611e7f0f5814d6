use std::io::BufReader;

use timetable::config::Config;
use timetable::core::context::AppContext;
use timetable::errors::Error;
use timetable::prompter::flows::config_edit::ConfigEditFlow;
use timetable::prompter::prompter::Prompter;

use crate::common::{build_context, make_temp_dir, run_with_input, sample_dir, write_config};

#[test]
fn context_resolves_data_file_next_to_config() {
    let dir = sample_dir("config-ctx", true);
    let ctx = build_context(&dir);

    assert_eq!(ctx.config.data_file(), dir.join("data.json"));
    let source = ctx.activity_source().expect("data file exists");
    assert_eq!(source.path(), dir.join("data.json").as_path());
}

#[test]
fn missing_config_file_is_a_config_error() {
    let dir = make_temp_dir("config-missing");
    let err = AppContext::new_with_paths(
        dir.join("config.json"),
        dir.join("logs"),
        dir.join("exports"),
    )
    .unwrap_err();

    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("not found"));
}

#[test]
fn missing_data_file_is_a_startup_error() {
    let dir = make_temp_dir("config-no-data");
    write_config(&dir, None, true);
    let ctx = build_context(&dir);

    let err = ctx.activity_source().unwrap_err();

    assert!(matches!(err, Error::Startup { .. }));
    assert!(err.to_string().contains("data.json"));
}

#[test]
fn config_edit_persists_start_date_change() {
    let dir = sample_dir("config-edit", true);
    let mut ctx = build_context(&dir);
    let flow = ConfigEditFlow::new(&mut ctx);
    let input = b"Y\n3\n2024-09-02\nN\n";

    Prompter::new()
        .run_with_reader(flow, BufReader::new(&input[..]))
        .expect("config flow should run");

    let cfg = Config::load_from(dir.join("config.json")).expect("config should reload");
    assert_eq!(cfg.start_date().map(|d| d.to_string()).as_deref(), Some("2024-09-02"));
}

#[test]
fn config_edit_clears_start_date_with_empty_value() {
    let dir = sample_dir("config-clear", true);
    let mut ctx = build_context(&dir);
    let flow = ConfigEditFlow::new(&mut ctx);
    let input = b"Y\n3\n\nN\n";

    Prompter::new()
        .run_with_reader(flow, BufReader::new(&input[..]))
        .expect("config flow should run");

    let cfg = Config::load_from(dir.join("config.json")).unwrap();
    assert_eq!(cfg.start_date(), None);
}

#[test]
fn binary_config_command_shows_table() {
    let dir = sample_dir("config-bin", true);

    let output = run_with_input(&dir, "config\nN\nexit\n");

    assert!(output.status.success(), "config run should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("TITLE_PREFIX"), "stdout did not include config rows");
}
