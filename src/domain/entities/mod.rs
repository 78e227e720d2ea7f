//! Domain Entities

mod country;
mod feature_list;
mod holiday;

pub use country::{normalize_code, Country};
pub use feature_list::FeatureList;
pub use holiday::{Dataset, HolidayFact};
