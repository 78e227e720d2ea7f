//! Domain Services
//!
//! Stateless operations over domain entities. No I/O.

mod aggregator;
mod feature_synthesizer;

pub use aggregator::{Aggregation, Aggregator};
pub use feature_synthesizer::{FeatureSynthesizer, DEFAULT_ANCHOR};
