//! Pattern-based removal of the legacy widget.
//!
//! Every rule replaces all non-overlapping matches. A rule that matches
//! nothing leaves the buffer as it was, so an already-clean page passes
//! through untouched.
//!
//! Spans are lazy and stop at the nearest closing delimiter. Markup nested
//! deeper than the rule expects leaves residue; shallower markup lets the
//! span run into the following block. No post-condition is checked.

mod rules;

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

pub use rules::{ReplacementRule, LEGACY_RULES};

/// How many spans a rule removed in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: &'static str,
    pub matches: usize,
}

#[derive(Debug)]
struct CompiledRule {
    rule: &'static ReplacementRule,
    regex: Regex,
}

static COMPILED_RULES: LazyLock<Vec<CompiledRule>> = LazyLock::new(|| {
    LEGACY_RULES
        .iter()
        .map(|rule| CompiledRule {
            rule,
            regex: Regex::new(&format!("(?s){}", rule.pattern))
                .unwrap_or_else(|e| panic!("legacy rule '{}' does not compile: {e}", rule.name)),
        })
        .collect()
});

/// Apply the whole legacy table in order.
pub fn strip_legacy(buffer: String) -> (String, Vec<RuleOutcome>) {
    let mut buffer = buffer;
    let mut outcomes = Vec::with_capacity(COMPILED_RULES.len());

    for compiled in COMPILED_RULES.iter() {
        let (next, matches) = apply(compiled, buffer);
        tracing::debug!(rule = compiled.rule.name, matches, "Applied legacy rule");
        outcomes.push(RuleOutcome {
            rule: compiled.rule.name,
            matches,
        });
        buffer = next;
    }

    (buffer, outcomes)
}

fn apply(compiled: &CompiledRule, buffer: String) -> (String, usize) {
    let matches = compiled.regex.find_iter(&buffer).count();
    if matches == 0 {
        return (buffer, 0);
    }
    let replaced = compiled
        .regex
        .replace_all(&buffer, NoExpand(compiled.rule.replacement))
        .into_owned();
    (replaced, matches)
}
