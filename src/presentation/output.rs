//! Output Rendering
//!
//! Text summaries for terminals and JSON payloads for `--json`. Renderers
//! return strings; the binary decides where they go.

use serde::Serialize;

use crate::application::{FeaturesResult, GenerateResult};
use crate::infrastructure::repositories::{Recorded, Verification};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// Newline-delimited JSON events
    Json,
}

/// Icons for output rendering
#[derive(Debug, Clone, Copy)]
pub struct Icons {
    pub check: &'static str,
    pub cross: &'static str,
    pub write: &'static str,
    pub skip: &'static str,
}

impl Icons {
    pub fn unicode() -> Self {
        Self {
            check: "✓",
            cross: "✗",
            write: "→",
            skip: "○",
        }
    }

    pub fn ascii() -> Self {
        Self {
            check: "[OK]",
            cross: "[FAIL]",
            write: "->",
            skip: "[ ]",
        }
    }

    /// Unicode on an interactive stdout, ASCII otherwise
    pub fn detect() -> Self {
        use is_terminal::IsTerminal;
        if std::io::stdout().is_terminal() {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Text renderer for command results
#[derive(Debug, Clone, Copy)]
pub struct TextRenderer {
    pub icons: Icons,
    pub verbose: u8,
}

impl TextRenderer {
    pub fn new(icons: Icons, verbose: u8) -> Self {
        Self { icons, verbose }
    }

    pub fn generate(&self, result: &GenerateResult) -> String {
        let icons = self.icons;
        let mut out = String::new();

        if result.written {
            out.push_str(&format!("{} Generate Complete\n", icons.check));
        } else {
            out.push_str(&format!("{} Generate (dry run)\n", icons.skip));
        }
        out.push('\n');
        out.push_str(&format!(
            "  {} countries, {} with holidays, {} skipped\n",
            result.countries,
            result.resolved.len(),
            result.skipped.len()
        ));
        out.push_str(&format!(
            "  {} {} ({} rows)\n",
            icons.write,
            result.dataset.path.display(),
            result.dataset.rows
        ));
        out.push_str(&format!(
            "  {} {} ({})\n",
            icons.write,
            result.dataset.sidecar.display(),
            result.dataset.fingerprint
        ));
        out.push_str(&self.fragment_line(&result.features.path, result.features.is_changed()));

        if !result.skipped.is_empty() && self.verbose > 0 {
            out.push('\n');
            out.push_str(&format!("  Skipped ({}):\n", result.skipped.len()));
            for code in &result.skipped {
                out.push_str(&format!("    {} {}\n", icons.skip, code));
            }
        }

        if !result.duplicates.is_empty() {
            out.push('\n');
            out.push_str(&format!("  Warnings ({}):\n", result.duplicates.len()));
            for code in &result.duplicates {
                out.push_str(&format!("    [!] {} listed more than once\n", code));
            }
        }

        if !result.written && result.features.is_changed() {
            out.push('\n');
            out.push_str(&result.features.diff());
        }

        out
    }

    pub fn features(&self, result: &FeaturesResult) -> String {
        let mut out = String::new();
        if result.written {
            out.push_str(&format!("{} Features Complete\n", self.icons.check));
        } else {
            out.push_str(&format!("{} Features (dry run)\n", self.icons.skip));
        }
        out.push('\n');
        out.push_str(&format!("  {} countries\n", result.plan.codes.len()));
        out.push_str(&self.fragment_line(&result.plan.path, result.plan.is_changed()));

        if !result.written && result.plan.is_changed() {
            out.push('\n');
            out.push_str(&result.plan.diff());
        }
        out
    }

    pub fn verify(&self, verification: &Verification) -> String {
        let icons = self.icons;
        let path = verification.path.display();
        match &verification.recorded {
            Recorded::Valid(_) if verification.is_match() => format!(
                "{} {} matches its fingerprint\n  {}\n",
                icons.check, path, verification.computed
            ),
            Recorded::Valid(recorded) => format!(
                "{} {} does not match its fingerprint\n  recorded: {}\n  computed: {}\n",
                icons.cross, path, recorded, verification.computed
            ),
            Recorded::Malformed(content) => format!(
                "{} {} has a malformed fingerprint sidecar\n  recorded: {}\n  computed: {}\n",
                icons.cross, path, content, verification.computed
            ),
            Recorded::Missing => format!(
                "{} {} has no recorded fingerprint\n  computed: {}\n",
                icons.cross, path, verification.computed
            ),
        }
    }

    fn fragment_line(&self, path: &std::path::Path, changed: bool) -> String {
        if changed {
            format!("  {} {}\n", self.icons.write, path.display())
        } else {
            format!("  {} {} (unchanged)\n", self.icons.skip, path.display())
        }
    }
}

/// JSON payload of `generate`
#[derive(Debug, Clone, Serialize)]
pub struct GenerateSummary {
    pub written: bool,
    pub countries: usize,
    pub resolved: Vec<String>,
    pub skipped: Vec<String>,
    pub duplicates: Vec<String>,
    pub dataset: String,
    pub sidecar: String,
    pub fingerprint: String,
    pub rows: usize,
    pub bytes: usize,
    pub fragment: String,
    pub fragment_changed: bool,
}

impl From<&GenerateResult> for GenerateSummary {
    fn from(result: &GenerateResult) -> Self {
        Self {
            written: result.written,
            countries: result.countries,
            resolved: result.resolved.clone(),
            skipped: result.skipped.clone(),
            duplicates: result.duplicates.clone(),
            dataset: result.dataset.path.display().to_string(),
            sidecar: result.dataset.sidecar.display().to_string(),
            fingerprint: result.dataset.fingerprint.to_string(),
            rows: result.dataset.rows,
            bytes: result.dataset.bytes,
            fragment: result.features.path.display().to_string(),
            fragment_changed: result.features.is_changed(),
        }
    }
}

/// JSON payload of `features`
#[derive(Debug, Clone, Serialize)]
pub struct FeaturesSummary {
    pub written: bool,
    pub fragment: String,
    pub changed: bool,
    pub codes: Vec<String>,
}

impl From<&FeaturesResult> for FeaturesSummary {
    fn from(result: &FeaturesResult) -> Self {
        Self {
            written: result.written,
            fragment: result.plan.path.display().to_string(),
            changed: result.plan.is_changed(),
            codes: result.plan.codes.clone(),
        }
    }
}

/// JSON payload of `verify`
#[derive(Debug, Clone, Serialize)]
pub struct VerifySummary {
    pub dataset: String,
    #[serde(rename = "match")]
    pub is_match: bool,
    /// `missing`, `malformed` or `valid`
    pub sidecar: &'static str,
    pub recorded: Option<String>,
    pub computed: String,
}

impl From<&Verification> for VerifySummary {
    fn from(verification: &Verification) -> Self {
        Self {
            dataset: verification.path.display().to_string(),
            is_match: verification.is_match(),
            sidecar: match verification.recorded {
                Recorded::Missing => "missing",
                Recorded::Malformed(_) => "malformed",
                Recorded::Valid(_) => "valid",
            },
            recorded: match &verification.recorded {
                Recorded::Missing => None,
                Recorded::Malformed(content) => Some(content.clone()),
                Recorded::Valid(f) => Some(f.to_string()),
            },
            computed: verification.computed.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::FeaturePlan;
    use crate::domain::value_objects::Fingerprint;
    use crate::infrastructure::repositories::WrittenDataset;
    use std::path::PathBuf;

    fn generate_result(written: bool) -> GenerateResult {
        GenerateResult {
            countries: 3,
            resolved: vec!["AA".into(), "BB".into()],
            skipped: vec!["XX".into()],
            duplicates: vec![],
            dataset: WrittenDataset {
                path: PathBuf::from("holidays.csv"),
                sidecar: PathBuf::from("holidays.csv.hash"),
                fingerprint: Fingerprint::of_bytes(b""),
                rows: 3,
                bytes: 99,
            },
            features: FeaturePlan {
                path: PathBuf::from("Cargo.toml"),
                before: "a = []\n".into(),
                after: "a = []\n".into(),
                codes: vec!["AA".into(), "BB".into(), "XX".into()],
            },
            written,
        }
    }

    #[test]
    fn output_format_default_is_text() {
        assert_eq!(OutputFormat::default(), OutputFormat::Text);
    }

    #[test]
    fn generate_text_summary() {
        let text = TextRenderer::new(Icons::ascii(), 0).generate(&generate_result(true));
        insta::assert_snapshot!(text, @r###"
        [OK] Generate Complete

          3 countries, 2 with holidays, 1 skipped
          -> holidays.csv (3 rows)
          -> holidays.csv.hash (e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855)
          [ ] Cargo.toml (unchanged)
        "###);
    }

    #[test]
    fn verbose_lists_skipped_codes() {
        let text = TextRenderer::new(Icons::unicode(), 1).generate(&generate_result(false));
        assert!(text.starts_with("○ Generate (dry run)"));
        assert!(text.contains("Skipped (1):\n    ○ XX\n"));
    }

    #[test]
    fn verify_mismatch_text() {
        let verification = Verification {
            path: PathBuf::from("holidays.csv"),
            recorded: Recorded::Valid(Fingerprint::parse(&"0".repeat(64)).unwrap()),
            computed: Fingerprint::of_bytes(b""),
        };
        let text = TextRenderer::new(Icons::ascii(), 0).verify(&verification);
        assert!(text.starts_with("[FAIL] holidays.csv does not match"));
    }

    #[test]
    fn verify_summary_json() {
        let verification = Verification {
            path: PathBuf::from("holidays.csv"),
            recorded: Recorded::Missing,
            computed: Fingerprint::of_bytes(b""),
        };
        let json = serde_json::to_value(VerifySummary::from(&verification)).unwrap();
        assert_eq!(json["match"], false);
        assert_eq!(json["sidecar"], "missing");
        assert!(json["recorded"].is_null());
    }

    #[test]
    fn verify_malformed_sidecar_text() {
        let verification = Verification {
            path: PathBuf::from("holidays.csv"),
            recorded: Recorded::Malformed("oops".to_string()),
            computed: Fingerprint::of_bytes(b""),
        };
        let text = TextRenderer::new(Icons::ascii(), 0).verify(&verification);
        assert!(text.starts_with("[FAIL] holidays.csv has a malformed fingerprint sidecar"));
        assert!(text.contains("recorded: oops"));
    }

    #[test]
    fn generate_summary_json() {
        let json = serde_json::to_value(GenerateSummary::from(&generate_result(true))).unwrap();
        assert_eq!(json["rows"], 3);
        assert_eq!(json["skipped"][0], "XX");
        assert_eq!(json["fragment_changed"], false);
    }

    #[test]
    fn icons_ascii() {
        assert_eq!(Icons::ascii().check, "[OK]");
    }
}
