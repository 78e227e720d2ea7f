//! Year Range Value Object
//!
//! The inclusive span of years a run generates holidays for. Computed once
//! at the start of a run and passed by value; nothing below the application
//! layer reads the clock.

use chrono::{Datelike, NaiveDate};

use crate::error::{HoligenError, HoligenResult};

/// Default lowest year included in the dataset
pub const DEFAULT_FLOOR_YEAR: i32 = 0;

/// Default number of years generated past the current year
pub const DEFAULT_YEARS_AHEAD: i32 = 10;

/// Inclusive range of years `[floor, end]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    floor: i32,
    end: i32,
}

impl YearRange {
    /// Create a range, rejecting `floor > end`
    pub fn new(floor: i32, end: i32) -> HoligenResult<Self> {
        if floor > end {
            return Err(HoligenError::InvalidYearRange { floor, end });
        }
        Ok(Self { floor, end })
    }

    /// `[floor, current_year + years_ahead]`
    pub fn relative_to(current_year: i32, floor: i32, years_ahead: i32) -> HoligenResult<Self> {
        Self::new(floor, current_year.saturating_add(years_ahead))
    }

    pub fn floor(&self) -> i32 {
        self.floor
    }

    pub fn end(&self) -> i32 {
        self.end
    }

    pub fn contains_year(&self, year: i32) -> bool {
        (self.floor..=self.end).contains(&year)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.contains_year(date.year())
    }
}
