//! # assistant-swap
//!
//! Replaces the legacy GeckoBot chat widget embedded in an HTML page with
//! the floating Omniverse assistant.
//!
//! The page is treated as opaque text: a fixed table of multi-line regex
//! deletions removes the old markup, styles and scripts, then the new
//! widget fragment is placed before `</body>` and the result is written to
//! a separate file.
//!
//! ```no_run
//! use std::path::Path;
//!
//! let report = assistant_swap::run(Path::new("index.html"), Path::new("index_clean.html"))?;
//! println!("removed {} legacy spans", report.removed());
//! # Ok::<(), assistant_swap::SwapError>(())
//! ```

pub mod document;
pub mod error;
pub mod insert;
pub mod pipeline;
pub mod strip;

pub use error::{SwapError, SwapResult};
pub use insert::{insert_fragment, CLOSING_BODY_MARKER, OMNI_ASSISTANT_FRAGMENT};
pub use pipeline::{run, SwapReport};
pub use strip::{strip_legacy, ReplacementRule, RuleOutcome, LEGACY_RULES};

/// Default input page, relative to the working directory.
pub const DEFAULT_INPUT: &str = "index.html";

/// Default output page, written next to the input.
pub const DEFAULT_OUTPUT: &str = "index_clean.html";
