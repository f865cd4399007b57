use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};
use tempfile::TempDir;

const BIN_NAME: &str = "dining";

fn dining(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("DINING_BUDGET_DATA_DIR", dir.path())
        .env("DINING_TODAY", "2025-01-06")
        .env_remove("DINING_LOG");
    cmd
}

fn set_up_spring(dir: &TempDir) {
    dining(dir)
        .args(["setup", "--total", "700", "--semester", "spring2025"])
        .assert()
        .success();
}

#[test]
fn status_without_plan_prints_hint() {
    let dir = TempDir::new().unwrap();
    dining(&dir)
        .assert()
        .success()
        .stdout(contains("No budget plan yet"));
}

#[test]
fn setup_with_semester_prints_plan_summary() {
    let dir = TempDir::new().unwrap();
    dining(&dir)
        .args(["setup", "--total", "700", "--semester", "spring2025"])
        .assert()
        .success()
        .stdout(
            contains("Applied semester spring2025")
                .and(contains("$700.00"))
                .and(contains("2025-01-06 to 2025-05-07"))
                .and(contains("Meals per week")),
        );
}

#[test]
fn spend_then_history_lists_it() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .args(["spend", "8.50", "Coffee"])
        .assert()
        .success()
        .stdout(contains("Spent $8.50 on Coffee").and(contains("Remaining balance: $691.50")));

    dining(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("-$8.50")));
}

#[test]
fn history_is_empty_on_fresh_data() {
    let dir = TempDir::new().unwrap();
    dining(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No transactions yet."));
}

#[test]
fn overspend_is_blocked_by_default() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .args(["spend", "1000", "Laptop"])
        .assert()
        .failure()
        .stderr(contains("Insufficient funds"));

    dining(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(contains("No transactions yet."));
}

#[test]
fn overspend_allowed_after_config_change() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .args(["config", "--overspend", "allow"])
        .assert()
        .success()
        .stdout(contains("Preferences saved.").and(contains("Overspend policy: allow")));

    dining(&dir)
        .args(["spend", "1000", "Laptop"])
        .assert()
        .success()
        .stdout(contains("Remaining balance: -$300.00"));
}

#[test]
fn preset_use_logs_a_spend() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .args(["preset", "add", "Bagel", "3.25"])
        .assert()
        .success()
        .stdout(contains("Saved preset: Bagel ($3.25)"));

    dining(&dir)
        .args(["preset", "use", "bagel"])
        .assert()
        .success()
        .stdout(contains("Spent $3.25 on Bagel"));

    dining(&dir)
        .args(["preset", "use", "Pizza"])
        .assert()
        .failure()
        .stderr(contains("not found"));
}

#[test]
fn status_shows_daily_and_weekly_views() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("Daily Budget: Mon Jan 6, 2025 (today)").and(contains("Daily budget")));

    dining(&dir)
        .args(["status", "--weekly"])
        .assert()
        .success()
        .stdout(contains("Week 1 of").and(contains("(this week)")));
}

#[test]
fn status_forward_moves_to_next_day() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .args(["status", "--daily", "--forward", "1"])
        .assert()
        .success()
        .stdout(contains("Tue Jan 7, 2025 (upcoming)"));
}

#[test]
fn stats_lists_top_purchases() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Log some purchases to see your stats!"));

    dining(&dir)
        .args(["spend", "12", "Burrito"])
        .assert()
        .success();

    dining(&dir)
        .arg("stats")
        .assert()
        .success()
        .stdout(contains("Top Purchases").and(contains("Burrito")));
}

#[test]
fn break_add_and_remove() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .args(["break", "add", "2025-02-14", "--name", "Long Weekend"])
        .assert()
        .success()
        .stdout(contains("Breaks: 3"));

    dining(&dir)
        .args(["break", "remove", "9"])
        .assert()
        .failure()
        .stderr(contains("Break not found: 9"));

    dining(&dir)
        .args(["break", "remove", "3"])
        .assert()
        .success()
        .stdout(contains("Removed break: Long Weekend"));
}

#[test]
fn reset_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    set_up_spring(&dir);

    dining(&dir)
        .arg("reset")
        .assert()
        .failure()
        .stderr(contains("--yes"));

    dining(&dir)
        .args(["reset", "--yes"])
        .assert()
        .success()
        .stdout(contains("All budget data deleted."));

    dining(&dir)
        .arg("status")
        .assert()
        .success()
        .stdout(contains("No budget plan yet"));
}
