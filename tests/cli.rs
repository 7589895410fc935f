use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomodrill(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomodrill").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_schema_describes_session_settings() {
    let dir = TempDir::new().unwrap();
    pomodrill(&dir)
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("work_duration_minutes"))
        .stdout(predicate::str::contains("reminder_interval_minutes"));
}

#[test]
fn test_init_writes_defaults_and_refuses_overwrite() {
    let dir = TempDir::new().unwrap();

    pomodrill(&dir).arg("init").assert().success();

    let written = std::fs::read_to_string(dir.path().join("pomodrill.yaml")).unwrap();
    assert!(written.contains("work_duration_minutes: 25"));
    assert!(written.contains("break_duration_minutes: 5"));

    pomodrill(&dir)
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    pomodrill(&dir).args(["init", "--force"]).assert().success();
}

#[test]
fn test_init_does_not_write_local_claude_path() {
    let dir = TempDir::new().unwrap();
    let home = TempDir::new().unwrap();
    let local = home.path().join(".claude/local");
    std::fs::create_dir_all(&local).unwrap();
    std::fs::write(local.join("claude"), "").unwrap();

    pomodrill(&dir)
        .arg("init")
        .env("HOME", home.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("pomodrill.yaml")).unwrap();
    assert!(written.contains("binary: claude\n"));
    assert!(!written.contains(".claude/local"));
}

#[test]
fn test_start_rejects_reminder_longer_than_a_day() {
    let dir = TempDir::new().unwrap();
    pomodrill(&dir)
        .args([
            "start",
            "--reminder-minutes",
            "200000000000000000",
            "Write report",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "reminder_interval_minutes is 200000000000000000, the maximum is 1440 minutes",
        ));
}

#[test]
fn test_start_without_task_input_fails_cleanly() {
    let dir = TempDir::new().unwrap();
    pomodrill(&dir)
        .arg("start")
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Enter your main task: "))
        .stderr(predicate::str::contains("No main task provided"));
}

#[test]
fn test_start_rejects_zero_work_minutes() {
    let dir = TempDir::new().unwrap();
    pomodrill(&dir)
        .args(["start", "--work-minutes", "0", "Write report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "work_duration_minutes must be greater than zero",
        ));
}

#[test]
fn test_invalid_config_file_is_reported() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("pomodrill.yaml"),
        "planner:\n  subtask_count_hint: \"several\"\n",
    )
    .unwrap();

    pomodrill(&dir)
        .args(["plan", "Write report"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid subtask count hint 'several'"));
}

#[test]
fn test_plan_requires_api_key_for_openai() {
    let dir = TempDir::new().unwrap();
    pomodrill(&dir)
        .args(["plan", "--provider", "openai", "Write report"])
        .env_remove("OPENAI_API_KEY")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Environment variable OPENAI_API_KEY is not set",
        ));
}
