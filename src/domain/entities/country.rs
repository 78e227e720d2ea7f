//! Country entity - one row of the country registry

/// A country known to the registry
///
/// `code` is an ISO 3166-1 alpha-2 code, trimmed and upper-cased, never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    code: String,
    name: String,
}

impl Country {
    /// Build a country from raw registry fields.
    ///
    /// Returns `None` when the code is blank after trimming; such rows are
    /// dropped silently by the loader.
    pub fn from_raw(code: &str, name: &str) -> Option<Self> {
        let code = normalize_code(code);
        if code.is_empty() {
            return None;
        }
        Some(Self {
            code,
            name: name.trim().to_string(),
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Trim and upper-case a country code
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}
