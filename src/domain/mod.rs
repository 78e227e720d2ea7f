//! Domain Layer
//!
//! Pure business logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Country, HolidayFact, Dataset, FeatureList
//! - `value_objects/` - YearRange, Fingerprint
//! - `services/` - Aggregator, FeatureSynthesizer
//! - `ports/` - Interfaces for holiday sources and the file system
//!
//! All I/O goes through the trait-defined ports.

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
