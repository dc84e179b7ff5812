//! Load, strip, insert, write.

use std::path::{Path, PathBuf};

use crate::document;
use crate::error::SwapResult;
use crate::insert::insert_fragment;
use crate::strip::{strip_legacy, RuleOutcome};

/// What a completed run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapReport {
    pub input: PathBuf,
    pub output: PathBuf,
    /// One entry per legacy rule, in application order.
    pub rules: Vec<RuleOutcome>,
    /// Number of closing body markers that received the assistant.
    pub insertions: usize,
    /// Size of the written document.
    pub bytes_written: usize,
}

impl SwapReport {
    /// Total legacy spans removed across all rules.
    pub fn removed(&self) -> usize {
        self.rules.iter().map(|o| o.matches).sum()
    }
}

/// Transform `input` into `output`.
///
/// The input file is never modified. An existing output file is replaced.
pub fn run(input: &Path, output: &Path) -> SwapResult<SwapReport> {
    let _span = tracing::info_span!("swap", input = %input.display(), output = %output.display())
        .entered();

    let buffer = document::load(input)?;
    let (buffer, rules) = strip_legacy(buffer);
    let (buffer, insertions) = insert_fragment(buffer);
    document::write(output, &buffer)?;

    let report = SwapReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rules,
        insertions,
        bytes_written: buffer.len(),
    };
    tracing::info!(
        removed = report.removed(),
        insertions = report.insertions,
        "Assistant swap complete"
    );
    Ok(report)
}
