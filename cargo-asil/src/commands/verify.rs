//! `verify` command

use anyhow::{
    Context,
    Result,
};
use asil_integrity::Integrity;
use colored::Color;
use serde::Serialize;

use crate::helpers::{
    OutputManager,
    Report,
};

/// Result of checking one parent/child pair
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Canonical parent integrity
    pub parent: String,
    /// Canonical child integrity
    pub child:  String,
    /// Whether the child is a valid decomposition of the parent
    pub valid:  bool,
    /// Why the check passed or failed
    pub reason: String,
}

impl Report for VerifyReport {
    fn success(&self) -> bool {
        self.valid
    }

    fn human(&self, output: &OutputManager) -> Vec<String> {
        let verdict = if self.valid {
            output.paint("valid", Color::Green)
        } else {
            output.paint("invalid", Color::Red)
        };
        vec![
            format!("{verdict} inheritance: {} -> {}", self.parent, self.child),
            format!("  {}", self.reason),
        ]
    }
}

fn explain(parent: &Integrity, child: &Integrity) -> String {
    match child.decomposed() {
        None => "child carries no decomposition".to_string(),
        Some(decomposed) if decomposed != parent.base() => format!(
            "child is decomposed from {}, parent is {}",
            decomposed.letter(),
            parent.base().letter()
        ),
        Some(decomposed) if child.base() > decomposed => format!(
            "child level {} exceeds its decomposition {}",
            child.base().letter(),
            decomposed.letter()
        ),
        Some(_) => "child decomposition matches parent".to_string(),
    }
}

/// Check `child` against `parent`.
pub fn cmd_verify(parent: &str, child: &str) -> Result<VerifyReport> {
    let child_value: Integrity = child
        .parse()
        .with_context(|| format!("Invalid child integrity '{child}'"))?;
    let parent_value: Integrity = parent
        .parse()
        .with_context(|| format!("Invalid parent integrity '{parent}'"))?;

    let valid = child_value.verify_with_parent(&parent_value);
    tracing::debug!(%parent_value, %child_value, valid, "verified inheritance");

    Ok(VerifyReport {
        parent: parent_value.to_string(),
        child: child_value.to_string(),
        valid,
        reason: explain(&parent_value, &child_value),
    })
}
