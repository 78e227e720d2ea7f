//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod file_system;
pub mod holiday_source;

pub use file_system::FileSystem;
pub use holiday_source::{
    HolidaySource, HolidaySourceLookup, Observance, SourceError, SourceResult,
};
