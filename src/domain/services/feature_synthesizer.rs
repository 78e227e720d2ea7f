//! Feature Synthesizer Domain Service
//!
//! Regenerates the tail of a TOML configuration fragment (typically the
//! `[features]` table of a `Cargo.toml`) from a feature list.
//!
//! Everything before the anchor line is kept byte for byte. The anchor line
//! and everything after it are discarded and rewritten as:
//!
//! ```toml
//! all-countries = [
//!   "AA",
//!   "BB"
//! ]
//!
//! AA = []
//! BB = []
//! ```

use crate::domain::entities::FeatureList;

/// Default key of the aggregate feature entry
pub const DEFAULT_ANCHOR: &str = "all-countries";

/// Rewrites configuration fragments at an anchor line
#[derive(Debug, Clone)]
pub struct FeatureSynthesizer {
    anchor: String,
}

impl Default for FeatureSynthesizer {
    fn default() -> Self {
        Self::new(DEFAULT_ANCHOR)
    }
}

impl FeatureSynthesizer {
    pub fn new(anchor: impl Into<String>) -> Self {
        Self {
            anchor: anchor.into(),
        }
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Byte offset of the first line declaring the anchor key
    pub fn find_anchor(&self, existing: &str) -> Option<usize> {
        let mut offset = 0;
        for line in existing.split_inclusive('\n') {
            if self.is_anchor_line(line) {
                return Some(offset);
            }
            offset += line.len();
        }
        None
    }

    /// New fragment content, or `None` when the anchor line is missing
    ///
    /// A blank anchor never matches.
    pub fn synthesize(&self, existing: &str, features: &FeatureList) -> Option<String> {
        let cut = self.find_anchor(existing)?;
        let mut out = String::with_capacity(cut + features.len() * 16);
        out.push_str(&existing[..cut]);
        out.push_str(&self.render(features));
        Some(out)
    }

    /// Generated tail, starting with the anchor line
    pub fn render(&self, features: &FeatureList) -> String {
        let anchor = toml_key(&self.anchor);
        if features.is_empty() {
            return format!("{anchor} = []\n");
        }

        let members: Vec<String> = features
            .codes()
            .iter()
            .map(|code| format!("  {}", toml_string(code)))
            .collect();

        let mut out = format!("{anchor} = [\n{}\n]\n\n", members.join(",\n"));
        for code in features.codes() {
            out.push_str(&toml_key(code));
            out.push_str(" = []\n");
        }
        out
    }

    fn is_anchor_line(&self, line: &str) -> bool {
        if self.anchor.trim().is_empty() {
            return false;
        }
        let Some(rest) = line.trim_start().strip_prefix(self.anchor.as_str()) else {
            return false;
        };
        rest.is_empty() || rest.starts_with('=') || rest.starts_with(char::is_whitespace)
    }
}

fn toml_string(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

fn toml_key(s: &str) -> String {
    let bare = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if bare {
        s.to_string()
    } else {
        toml_string(s)
    }
}
