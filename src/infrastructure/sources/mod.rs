//! Holiday Source Implementations
//!
//! Concrete implementations of the HolidaySource port and the registry that
//! looks them up by country code.

mod registry;
mod static_source;
mod table;

pub use registry::SourceRegistry;
pub use static_source::StaticSource;
pub use table::TableSource;
