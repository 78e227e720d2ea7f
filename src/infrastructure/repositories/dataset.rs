//! CSV Dataset Repository
//!
//! Serializes the dataset to its canonical CSV form, writes it together with
//! the fingerprint sidecar, and re-verifies existing artifacts.
//!
//! ## Format
//!
//! - Header `country_code,date,holiday_name`
//! - Dates as ISO 8601 `YYYY-MM-DD`
//! - `\n` record terminator on every platform
//! - Minimal quoting: fields containing `,`, `"`, `\r` or `\n` are wrapped in
//!   double quotes and embedded quotes are doubled
//!
//! The fingerprint is sensitive to every byte, so this format is part of the
//! compatibility contract.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::entities::Dataset;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Fingerprint;
use crate::error::HoligenResult;

/// CSV header row
pub const DATASET_HEADER: [&str; 3] = ["country_code", "date", "holiday_name"];

/// Suffix appended to the dataset path to name the fingerprint sidecar
pub const SIDECAR_SUFFIX: &str = ".hash";

/// Sidecar path for a dataset path (`holidays.csv` → `holidays.csv.hash`)
pub fn sidecar_path(dataset: &Path) -> PathBuf {
    let mut os: OsString = dataset.as_os_str().to_owned();
    os.push(SIDECAR_SUFFIX);
    PathBuf::from(os)
}

/// Serialize a dataset to CSV bytes
pub fn serialize(dataset: &Dataset) -> HoligenResult<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(Vec::new());

    writer
        .write_record(DATASET_HEADER)
        .map_err(std::io::Error::from)?;
    for fact in dataset.iter() {
        let date = fact.date().format("%Y-%m-%d").to_string();
        writer
            .write_record([fact.country_code(), date.as_str(), fact.name()])
            .map_err(std::io::Error::from)?;
    }

    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Artifacts produced by a dataset write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenDataset {
    pub path: PathBuf,
    pub sidecar: PathBuf,
    pub fingerprint: Fingerprint,
    pub rows: usize,
    pub bytes: usize,
}

/// What the fingerprint sidecar holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recorded {
    /// No sidecar file
    Missing,
    /// Sidecar content that is not a lowercase SHA-256 hex digest
    Malformed(String),
    Valid(Fingerprint),
}

impl Recorded {
    fn from_sidecar(content: &str) -> Self {
        match Fingerprint::parse(content) {
            Some(fingerprint) => Recorded::Valid(fingerprint),
            None => Recorded::Malformed(content.trim().to_string()),
        }
    }
}

/// Result of checking a dataset against its sidecar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verification {
    pub path: PathBuf,
    pub recorded: Recorded,
    pub computed: Fingerprint,
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(&self.recorded, Recorded::Valid(f) if *f == self.computed)
    }
}

/// Reads and writes dataset artifacts through a FileSystem
pub struct CsvDatasetRepository<'a, F: FileSystem> {
    fs: &'a F,
}

impl<'a, F: FileSystem> CsvDatasetRepository<'a, F> {
    pub fn new(fs: &'a F) -> Self {
        Self { fs }
    }

    /// Compute what `write` would produce without touching storage
    pub fn prepare(&self, dataset: &Dataset, path: &Path) -> HoligenResult<(Vec<u8>, WrittenDataset)> {
        let bytes = serialize(dataset)?;
        let written = WrittenDataset {
            path: path.to_path_buf(),
            sidecar: sidecar_path(path),
            fingerprint: Fingerprint::of_bytes(&bytes),
            rows: dataset.len(),
            bytes: bytes.len(),
        };
        Ok((bytes, written))
    }

    /// Replace the dataset file and its fingerprint sidecar
    ///
    /// The fingerprint covers exactly the bytes handed to storage.
    pub fn write(&self, dataset: &Dataset, path: &Path) -> HoligenResult<WrittenDataset> {
        let (bytes, written) = self.prepare(dataset, path)?;
        self.commit(&bytes, &written)?;
        Ok(written)
    }

    /// Persist bytes computed by `prepare`
    ///
    /// Both files are staged before either is replaced, so a failed write
    /// leaves the previous dataset and sidecar in place.
    pub fn commit(&self, bytes: &[u8], written: &WrittenDataset) -> HoligenResult<()> {
        let sidecar = written.fingerprint.sidecar_content();
        self.fs.write_atomic_all(&[
            (written.path.as_path(), bytes),
            (written.sidecar.as_path(), sidecar.as_bytes()),
        ])?;
        info!(path = %written.path.display(), rows = written.rows, "wrote dataset");
        info!(path = %written.sidecar.display(), fingerprint = %written.fingerprint, "wrote fingerprint");
        Ok(())
    }

    /// Recompute the fingerprint of an existing dataset and read its sidecar
    pub fn verify(&self, path: &Path) -> HoligenResult<Verification> {
        let bytes = self.fs.read_bytes(path)?;
        let computed = Fingerprint::of_bytes(&bytes);

        let sidecar = sidecar_path(path);
        let recorded = if self.fs.exists(&sidecar) {
            Recorded::from_sidecar(&self.fs.read_to_string(&sidecar)?)
        } else {
            Recorded::Missing
        };

        Ok(Verification {
            path: path.to_path_buf(),
            recorded,
            computed,
        })
    }
}
