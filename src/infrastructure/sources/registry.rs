//! Holiday source registry
//!
//! Maps country codes to holiday sources. Populated explicitly at startup,
//! either by hand or by scanning a knowledge-base directory for
//! `<CODE>.csv` tables.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::TableSource;
use crate::domain::entities::normalize_code;
use crate::domain::ports::{HolidaySource, HolidaySourceLookup, Observance, SourceError, SourceResult};
use crate::domain::value_objects::YearRange;
use crate::error::{HoligenError, HoligenResult};

/// Country code → holiday source
#[derive(Default)]
pub struct SourceRegistry {
    sources: BTreeMap<String, Box<dyn HolidaySource>>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a source, replacing any previous one for the same code
    pub fn register(&mut self, code: &str, source: impl HolidaySource + 'static) -> &mut Self {
        self.sources.insert(normalize_code(code), Box::new(source));
        self
    }

    /// Builder form of `register`
    pub fn with(mut self, code: &str, source: impl HolidaySource + 'static) -> Self {
        self.register(code, source);
        self
    }

    /// Register one `TableSource` per `*.csv` file in `dir`
    ///
    /// The file stem is the country code (`us.csv` and `US.csv` both map to
    /// `US`). Two tables for the same code are an error. Other files are
    /// ignored.
    pub fn from_directory(dir: &Path) -> HoligenResult<Self> {
        let read_err = |source: std::io::Error| HoligenError::Read {
            path: dir.to_path_buf(),
            source,
        };

        let mut tables = Vec::new();
        for entry in std::fs::read_dir(dir).map_err(read_err)? {
            let path = entry.map_err(read_err)?.path();
            let is_csv = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
            if is_csv && path.is_file() {
                tables.push(path);
            }
        }
        // read_dir order is platform dependent
        tables.sort();

        let mut seen: BTreeMap<String, PathBuf> = BTreeMap::new();
        let mut registry = Self::new();
        for path in tables {
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let code = normalize_code(stem);
            if let Some(first) = seen.get(&code) {
                return Err(HoligenError::DuplicateSource {
                    code,
                    first: first.clone(),
                    second: path,
                });
            }
            debug!(code = %code, path = %path.display(), "registered holiday table");
            registry.register(&code, TableSource::new(path.clone()));
            seen.insert(code, path);
        }
        Ok(registry)
    }
}

impl HolidaySourceLookup for SourceRegistry {
    fn observances_for(&self, code: &str, years: &YearRange) -> SourceResult<Vec<Observance>> {
        match self.sources.get(code) {
            Some(source) => source.observances(years),
            None => Err(SourceError::Unsupported(code.to_string())),
        }
    }
}
