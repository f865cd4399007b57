//! Date navigation for the pacing views
//!
//! The daily view steps one day at a time, the weekly view one week. Neither
//! may leave the plan range.

use chrono::{Duration, NaiveDate};

use crate::config::settings::ViewMode;
use crate::models::{BudgetSettings, Week};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Back,
    Forward,
}

fn increment(view: ViewMode) -> Duration {
    match view {
        ViewMode::Daily => Duration::days(1),
        ViewMode::Weekly => Duration::days(7),
    }
}

/// Whether `date` may move one step in `direction`
pub fn can_step(
    date: NaiveDate,
    direction: Direction,
    view: ViewMode,
    plan: &BudgetSettings,
) -> bool {
    let start = plan.start_date;
    match (view, direction) {
        (ViewMode::Daily, Direction::Back) => date > start,
        (ViewMode::Daily, Direction::Forward) => plan.end_date.is_some_and(|end| date < end),
        (ViewMode::Weekly, Direction::Back) => {
            Week::containing(date).prev().start_date() >= start
        }
        (ViewMode::Weekly, Direction::Forward) => plan
            .end_date
            .is_some_and(|end| Week::containing(date).next().end_date() <= end),
    }
}

/// Move one step, or `None` when the move would leave the plan
pub fn step(
    date: NaiveDate,
    direction: Direction,
    view: ViewMode,
    plan: &BudgetSettings,
) -> Option<NaiveDate> {
    if !can_step(date, direction, view, plan) {
        return None;
    }
    match direction {
        Direction::Back => date.checked_sub_signed(increment(view)),
        Direction::Forward => date.checked_add_signed(increment(view)),
    }
}

/// Today when it falls inside the plan, else the plan start
pub fn default_selected_date(today: NaiveDate, plan: &BudgetSettings) -> NaiveDate {
    if plan.contains(today) {
        today
    } else {
        plan.start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Wed 2025-01-08 through Fri 2025-01-31
    fn plan() -> BudgetSettings {
        let mut plan = BudgetSettings::starting(date(2025, 1, 8));
        plan.end_date = Some(date(2025, 1, 31));
        plan
    }

    #[test]
    fn test_daily_steps_stay_in_plan() {
        let plan = plan();
        assert_eq!(
            step(date(2025, 1, 10), Direction::Back, ViewMode::Daily, &plan),
            Some(date(2025, 1, 9))
        );
        assert_eq!(step(date(2025, 1, 8), Direction::Back, ViewMode::Daily, &plan), None);
        assert_eq!(
            step(date(2025, 1, 30), Direction::Forward, ViewMode::Daily, &plan),
            Some(date(2025, 1, 31))
        );
        assert_eq!(step(date(2025, 1, 31), Direction::Forward, ViewMode::Daily, &plan), None);
    }

    #[test]
    fn test_weekly_steps_need_whole_neighbour_week() {
        let plan = plan();
        // Previous week (Jan 5..11) starts before the plan
        assert_eq!(step(date(2025, 1, 15), Direction::Back, ViewMode::Weekly, &plan), None);
        assert_eq!(
            step(date(2025, 1, 22), Direction::Back, ViewMode::Weekly, &plan),
            Some(date(2025, 1, 15))
        );
        // Next week (Jan 19..25) ends inside the plan
        assert_eq!(
            step(date(2025, 1, 15), Direction::Forward, ViewMode::Weekly, &plan),
            Some(date(2025, 1, 22))
        );
        // Jan 26..Feb 1 runs past the end
        assert_eq!(step(date(2025, 1, 22), Direction::Forward, ViewMode::Weekly, &plan), None);
    }

    #[test]
    fn test_no_forward_without_end_date() {
        let mut plan = plan();
        plan.end_date = None;
        assert!(!can_step(date(2025, 1, 9), Direction::Forward, ViewMode::Daily, &plan));
        assert!(can_step(date(2025, 1, 9), Direction::Back, ViewMode::Daily, &plan));
    }

    #[test]
    fn test_default_selected_date() {
        let plan = plan();
        assert_eq!(default_selected_date(date(2025, 1, 20), &plan), date(2025, 1, 20));
        assert_eq!(default_selected_date(date(2025, 3, 1), &plan), date(2025, 1, 8));
        assert_eq!(default_selected_date(date(2024, 12, 1), &plan), date(2025, 1, 8));
    }
}
