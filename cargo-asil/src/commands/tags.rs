//! `validate` and `canonicalize` commands

use anyhow::{
    Context,
    Result,
};
use asil_integrity::{
    canonicalize,
    AsilLevel,
    Integrity,
};
use colored::Color;
use serde::Serialize;

use crate::helpers::{
    GlobalArgs,
    OutputManager,
    Report,
};

/// Outcome of checking a single tag
#[derive(Debug, Clone, Serialize)]
pub struct TagReport {
    /// Tag as given on the command line
    pub input:      String,
    /// Whether the tag is valid
    pub valid:      bool,
    /// Canonical spelling of a valid tag
    pub canonical:  Option<String>,
    /// Base level of a valid tag
    pub base:       Option<AsilLevel>,
    /// Decomposition level, if present
    pub decomposed: Option<AsilLevel>,
    /// Verbatim original, when retention was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original:   Option<String>,
    /// Error for an invalid tag
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error:      Option<String>,
}

impl TagReport {
    /// Check `input` and record the outcome
    #[must_use]
    pub fn check(input: &str, keep_original: bool) -> Self {
        match Integrity::new(input, keep_original) {
            Ok(integrity) => Self {
                input:      input.to_string(),
                valid:      true,
                canonical:  Some(integrity.to_string()),
                base:       Some(integrity.base()),
                decomposed: integrity.decomposed(),
                original:   integrity.original().ok().map(str::to_string),
                error:      None,
            },
            Err(error) => {
                tracing::info!(input, %error, "invalid tag");
                Self {
                    input:      input.to_string(),
                    valid:      false,
                    canonical:  None,
                    base:       None,
                    decomposed: None,
                    original:   None,
                    error:      Some(error.to_string()),
                }
            },
        }
    }
}

/// Result of `validate`
#[derive(Debug, Clone, Serialize)]
pub struct ValidateReport {
    /// One entry per tag, in input order
    pub tags: Vec<TagReport>,
}

impl ValidateReport {
    /// Number of invalid tags
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.tags.iter().filter(|tag| !tag.valid).count()
    }
}

impl Report for ValidateReport {
    fn success(&self) -> bool {
        self.invalid_count() == 0
    }

    fn human(&self, output: &OutputManager) -> Vec<String> {
        self.tags
            .iter()
            .map(|tag| match (&tag.canonical, &tag.error) {
                (Some(canonical), _) => {
                    let mut line =
                        format!("{} '{}' -> {}", output.paint("valid", Color::Green), tag.input, canonical);
                    if let Some(original) = &tag.original {
                        line.push_str(&format!(" (original: '{original}')"));
                    }
                    line
                },
                (None, error) => format!(
                    "{} '{}': {}",
                    output.paint("invalid", Color::Red),
                    tag.input,
                    error.as_deref().unwrap_or("not an ASIL tag")
                ),
            })
            .collect()
    }
}

/// Check every tag; invalid tags are reported, not raised.
#[must_use]
pub fn cmd_validate(tags: &[String], global: &GlobalArgs) -> ValidateReport {
    ValidateReport {
        tags: tags
            .iter()
            .map(|tag| TagReport::check(tag, global.keep_original))
            .collect(),
    }
}

/// Input and canonical spelling of one tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CanonicalForm {
    /// Tag as given
    pub input:     String,
    /// Canonical spelling
    pub canonical: String,
}

/// Result of `canonicalize`
#[derive(Debug, Clone, Serialize)]
pub struct CanonicalizeReport {
    /// One entry per tag, in input order
    pub tags: Vec<CanonicalForm>,
}

impl Report for CanonicalizeReport {
    fn success(&self) -> bool {
        true
    }

    fn human(&self, _output: &OutputManager) -> Vec<String> {
        self.tags.iter().map(|tag| tag.canonical.clone()).collect()
    }
}

/// Canonicalize every tag, stopping at the first invalid one.
pub fn cmd_canonicalize(tags: &[String]) -> Result<CanonicalizeReport> {
    let tags = tags
        .iter()
        .map(|tag| {
            let canonical =
                canonicalize(tag).with_context(|| format!("Cannot canonicalize '{tag}'"))?;
            Ok(CanonicalForm {
                input: tag.clone(),
                canonical,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CanonicalizeReport { tags })
}
