//! Budget plan model
//!
//! `BudgetSettings` is the plan the pacing engine works against: an allowance,
//! an inclusive date range, a weekly meal cadence and the breaks during which
//! no meals are eaten. It is replaced wholesale through a validated
//! [`SettingsPatch`].

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Meal cadences offered by dining plans
pub const ALLOWED_MEALS_PER_WEEK: [u32; 5] = [5, 7, 10, 14, 21];

/// How many meals per week the plan is paced for
///
/// Only ever used as the ratio `meals / 7` against calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct MealsPerWeek(u32);

impl MealsPerWeek {
    pub fn new(meals: u32) -> Result<Self, BudgetValidationError> {
        if ALLOWED_MEALS_PER_WEEK.contains(&meals) {
            Ok(Self(meals))
        } else {
            Err(BudgetValidationError::InvalidMealsPerWeek(meals))
        }
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Factor converting eating days into meal-equivalents
    pub fn ratio(&self) -> f64 {
        f64::from(self.0) / 7.0
    }
}

impl Default for MealsPerWeek {
    fn default() -> Self {
        Self(7)
    }
}

impl TryFrom<u32> for MealsPerWeek {
    type Error = BudgetValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MealsPerWeek> for u32 {
    fn from(meals: MealsPerWeek) -> Self {
        meals.0
    }
}

impl fmt::Display for MealsPerWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An inclusive run of days with no meals (holidays, recess)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Break {
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Break {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            name: None,
        }
    }

    pub fn named(start: NaiveDate, end: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            start,
            end,
            name: Some(name.into()),
        }
    }

    /// Whether `date` falls inside this break, both ends included
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if self.start > self.end {
            return Err(BudgetValidationError::BreakEndsBeforeStart {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Break {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            write!(f, "{} ", name)?;
        }
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

/// The current budget plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetSettings {
    /// Dollars available for the whole plan
    #[serde(default)]
    pub total: Money,

    /// First day of the plan (inclusive)
    pub start_date: NaiveDate,

    /// Last day of the plan (inclusive); unset until the user picks one
    #[serde(default)]
    pub end_date: Option<NaiveDate>,

    #[serde(default)]
    pub meals_per_week: MealsPerWeek,

    /// Semester template the dates came from, informational only
    #[serde(default)]
    pub semester: String,

    #[serde(default)]
    pub breaks: Vec<Break>,
}

impl BudgetSettings {
    /// Defaults for a store with no saved plan, starting on `today`
    pub fn starting(today: NaiveDate) -> Self {
        Self {
            total: Money::zero(),
            start_date: today,
            end_date: None,
            meals_per_week: MealsPerWeek::default(),
            semester: String::new(),
            breaks: Vec::new(),
        }
    }

    /// A plan is well-formed once it has an end date on or after its start
    pub fn is_well_formed(&self) -> bool {
        matches!(self.end_date, Some(end) if self.start_date <= end)
    }

    /// Whether the user has finished setting the plan up
    pub fn is_configured(&self) -> bool {
        self.total.is_positive() && self.end_date.is_some()
    }

    /// Whether `date` lies inside the plan range
    pub fn contains(&self, date: NaiveDate) -> bool {
        matches!(self.end_date, Some(end) if date >= self.start_date && date <= end)
    }

    pub fn validate(&self) -> Result<(), BudgetValidationError> {
        if !self.total.is_finite() || self.total.is_negative() {
            return Err(BudgetValidationError::InvalidTotal(self.total.dollars()));
        }
        if let Some(end) = self.end_date {
            if self.start_date > end {
                return Err(BudgetValidationError::EndBeforeStart {
                    start: self.start_date,
                    end,
                });
            }
        }
        for brk in &self.breaks {
            brk.validate()?;
        }
        Ok(())
    }
}

impl Default for BudgetSettings {
    fn default() -> Self {
        Self::starting(Local::now().date_naive())
    }
}

/// A field-by-field update to [`BudgetSettings`]
///
/// Unset fields keep their current value. `end_date: Some(None)` clears the
/// end date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub total: Option<Money>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<Option<NaiveDate>>,
    pub meals_per_week: Option<MealsPerWeek>,
    pub semester: Option<String>,
    pub breaks: Option<Vec<Break>>,
}

impl SettingsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total(mut self, total: Money) -> Self {
        self.total = Some(total);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(Some(date));
        self
    }

    pub fn meals_per_week(mut self, meals: MealsPerWeek) -> Self {
        self.meals_per_week = Some(meals);
        self
    }

    pub fn semester(mut self, id: impl Into<String>) -> Self {
        self.semester = Some(id.into());
        self
    }

    pub fn breaks(mut self, breaks: Vec<Break>) -> Self {
        self.breaks = Some(breaks);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the patch to `current`, returning the validated replacement
    pub fn apply(self, current: &BudgetSettings) -> Result<BudgetSettings, BudgetValidationError> {
        let mut updated = current.clone();
        if let Some(total) = self.total {
            updated.total = total;
        }
        if let Some(start) = self.start_date {
            updated.start_date = start;
        }
        if let Some(end) = self.end_date {
            updated.end_date = end;
        }
        if let Some(meals) = self.meals_per_week {
            updated.meals_per_week = meals;
        }
        if let Some(semester) = self.semester {
            updated.semester = semester;
        }
        if let Some(breaks) = self.breaks {
            updated.breaks = breaks;
        }
        updated.validate()?;
        Ok(updated)
    }
}

/// Validation failures for plan settings
#[derive(Debug, Clone, PartialEq)]
pub enum BudgetValidationError {
    InvalidTotal(f64),
    InvalidMealsPerWeek(u32),
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    BreakEndsBeforeStart { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for BudgetValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTotal(total) => {
                write!(f, "Total must be a non-negative amount, got {}", total)
            }
            Self::InvalidMealsPerWeek(meals) => write!(
                f,
                "Meals per week must be one of {:?}, got {}",
                ALLOWED_MEALS_PER_WEEK, meals
            ),
            Self::EndBeforeStart { start, end } => {
                write!(f, "End date {} is before start date {}", end, start)
            }
            Self::BreakEndsBeforeStart { start, end } => {
                write!(f, "Break end {} is before its start {}", end, start)
            }
        }
    }
}

impl std::error::Error for BudgetValidationError {}
