//! Semester templates
//!
//! A semester bundles the plan dates and the academic breaks for one term.
//! Applying a semester overwrites the plan's dates and breaks wholesale.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::budget::Break;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Semester {
    pub id: String,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub breaks: Vec<Break>,
}

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn semester(
    id: &str,
    name: &str,
    start: (i32, u32, u32),
    end: (i32, u32, u32),
    breaks: Vec<Break>,
) -> Semester {
    Semester {
        id: id.to_string(),
        name: name.to_string(),
        start_date: ymd(start.0, start.1, start.2),
        end_date: ymd(end.0, end.1, end.2),
        breaks,
    }
}

fn one_day(name: &str, y: i32, m: u32, d: u32) -> Break {
    Break::named(ymd(y, m, d), ymd(y, m, d), name)
}

fn span(name: &str, start: (i32, u32, u32), end: (i32, u32, u32)) -> Break {
    Break::named(
        ymd(start.0, start.1, start.2),
        ymd(end.0, end.1, end.2),
        name,
    )
}

/// The built-in academic calendar
///
/// Dining dollars typically expire on the last listed day of each term.
pub fn builtin_catalog() -> Vec<Semester> {
    vec![
        semester(
            "spring2025",
            "Spring 2025",
            (2025, 1, 6),
            (2025, 5, 7),
            vec![
                one_day("MLK Jr. Day", 2025, 1, 20),
                span("Spring Break", (2025, 3, 17), (2025, 3, 21)),
            ],
        ),
        semester(
            "fall2025",
            "Fall 2025",
            (2025, 8, 18),
            (2025, 12, 15),
            vec![span("Thanksgiving Break", (2025, 11, 26), (2025, 11, 28))],
        ),
        semester(
            "spring2026",
            "Spring 2026",
            (2026, 1, 12),
            (2026, 5, 7),
            vec![
                one_day("MLK Jr. Day", 2026, 1, 19),
                span("Spring Break", (2026, 3, 23), (2026, 3, 27)),
            ],
        ),
        semester(
            "fall2026",
            "Fall 2026",
            (2026, 8, 17),
            (2026, 12, 15),
            vec![span("Thanksgiving Break", (2026, 11, 25), (2026, 11, 27))],
        ),
        semester(
            "spring2027",
            "Spring 2027",
            (2027, 1, 11),
            (2027, 5, 7),
            vec![
                one_day("MLK Jr. Day", 2027, 1, 18),
                span("Spring Break", (2027, 3, 22), (2027, 3, 26)),
            ],
        ),
    ]
}

/// Look up a semester by id (case-insensitive)
pub fn find_semester(id: &str) -> Option<Semester> {
    let id = id.trim().to_lowercase();
    builtin_catalog().into_iter().find(|s| s.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_well_formed() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 5);
        for sem in &catalog {
            assert!(sem.start_date <= sem.end_date, "{}", sem.id);
            for brk in &sem.breaks {
                assert!(brk.validate().is_ok());
                assert!(brk.start >= sem.start_date && brk.end <= sem.end_date);
            }
        }
    }

    #[test]
    fn test_find_semester() {
        let spring = find_semester("Spring2025").unwrap();
        assert_eq!(spring.name, "Spring 2025");
        assert_eq!(spring.breaks.len(), 2);
        assert!(find_semester("summer1999").is_none());
    }
}
