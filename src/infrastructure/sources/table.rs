//! Table-backed holiday source
//!
//! Reads pre-computed holidays for one country from a CSV file with a
//! `date,name` header. Dates are ISO 8601 (`YYYY-MM-DD`). Extra columns are
//! ignored, rows outside the requested years are dropped, and repeated
//! (date, name) pairs collapse into one.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::domain::ports::{HolidaySource, Observance, SourceError, SourceResult};
use crate::domain::value_objects::YearRange;

const DATE_COLUMN: &str = "date";
const NAME_COLUMN: &str = "name";

/// Holidays of one country stored as a CSV table
#[derive(Debug, Clone)]
pub struct TableSource {
    path: PathBuf,
}

impl TableSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn internal(&self, message: impl std::fmt::Display) -> SourceError {
        SourceError::Internal(format!("{}: {}", self.path.display(), message))
    }
}

impl HolidaySource for TableSource {
    fn observances(&self, years: &YearRange) -> SourceResult<Vec<Observance>> {
        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| self.internal(e))?;

        let headers = reader.headers().map_err(|e| self.internal(e))?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or_else(|| self.internal(format!("missing '{}' column", name)))
        };
        let date_idx = column(DATE_COLUMN)?;
        let name_idx = column(NAME_COLUMN)?;

        let mut observances = BTreeSet::new();
        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| self.internal(e))?;
            let raw_date = record.get(date_idx).unwrap_or_default().trim();
            let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|e| {
                self.internal(format!("row {}: invalid date '{}': {}", row + 1, raw_date, e))
            })?;
            if !years.contains(date) {
                continue;
            }
            let name = record.get(name_idx).unwrap_or_default();
            observances.insert(Observance::new(date, name));
        }

        Ok(observances.into_iter().collect())
    }
}
