//! CSV Country Registry
//!
//! Loads the country registry from a CSV table with a header row. The code
//! and name columns are picked by header name; other columns are ignored.

use std::path::Path;

use crate::domain::entities::Country;
use crate::domain::ports::FileSystem;
use crate::error::{HoligenError, HoligenResult};

/// Default header of the ISO code column
pub const DEFAULT_CODE_COLUMN: &str = "ISO 3166-1 A2";

/// Default header of the display name column
pub const DEFAULT_NAME_COLUMN: &str = "Name";

/// Country registry backed by a CSV file
pub struct CsvCountryRegistry<'a, F: FileSystem> {
    fs: &'a F,
    code_column: String,
    name_column: String,
}

impl<'a, F: FileSystem> CsvCountryRegistry<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self::with_columns(fs, DEFAULT_CODE_COLUMN, DEFAULT_NAME_COLUMN)
    }

    pub fn with_columns(
        fs: &'a F,
        code_column: impl Into<String>,
        name_column: impl Into<String>,
    ) -> Self {
        Self {
            fs,
            code_column: code_column.into(),
            name_column: name_column.into(),
        }
    }

    /// Load every country in source row order
    ///
    /// Rows whose code is blank after trimming are dropped silently.
    pub fn load(&self, path: &Path) -> HoligenResult<Vec<Country>> {
        if !self.fs.exists(path) {
            return Err(HoligenError::RegistryNotFound {
                path: path.to_path_buf(),
            });
        }

        let bytes = self.fs.read_bytes(path)?;
        let malformed = |e: csv::Error| HoligenError::RegistryMalformed {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes.as_slice());

        let headers = reader.headers().map_err(malformed)?.clone();
        let code_idx = self.column_index(&headers, &self.code_column, path)?;
        let name_idx = self.column_index(&headers, &self.name_column, path)?;

        let mut countries = Vec::new();
        for record in reader.records() {
            let record = record.map_err(malformed)?;
            let code = record.get(code_idx).unwrap_or_default();
            let name = record.get(name_idx).unwrap_or_default();
            if let Some(country) = Country::from_raw(code, name) {
                countries.push(country);
            }
        }

        Ok(countries)
    }

    fn column_index(
        &self,
        headers: &csv::StringRecord,
        column: &str,
        path: &Path,
    ) -> HoligenResult<usize> {
        headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| HoligenError::MissingColumn {
                path: path.to_path_buf(),
                column: column.to_string(),
            })
    }
}
