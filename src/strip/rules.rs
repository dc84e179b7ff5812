//! The legacy GeckoBot removal table.
//!
//! Order matters: the comment block goes before the `gecko-assistant` div,
//! and the simplified toggle before the plain `toggleGeckoChat` function,
//! so each span is consumed by the rule written for it.

/// A single pattern deletion applied over the whole buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplacementRule {
    /// Stable identifier used in logs and the run report.
    pub name: &'static str,
    /// Regex source. `(?s)` is prepended at compile time so `.` crosses lines.
    pub pattern: &'static str,
    /// Literal replacement text; `$` is not expanded.
    pub replacement: &'static str,
}

pub static LEGACY_RULES: [ReplacementRule; 8] = [
    ReplacementRule {
        name: "gecko-bot-comment-block",
        pattern: r"<!-- GECKO BOT.*?</div>\s*",
        replacement: "",
    },
    // Outer div plus its two nested closes; the page carries two copies.
    ReplacementRule {
        name: "gecko-assistant-div",
        pattern: r#"<div id="gecko-assistant".*?</div>\s*</div>\s*</div>"#,
        replacement: "",
    },
    ReplacementRule {
        name: "gecko-toggle-simplified",
        pattern: r"// NUEVA función simplificada para el gecko.*?\}\s*\}\s*",
        replacement: "",
    },
    ReplacementRule {
        name: "gecko-toggle-function",
        pattern: r"function toggleGeckoChat\(\).*?\}\s*",
        replacement: "",
    },
    // The injector shares its <script> with other code; keep the close tag.
    ReplacementRule {
        name: "gecko-bot-injector",
        pattern: r"// Create and inject GeckoBot.*?\}\)\(\);\s*</script>",
        replacement: "</script>",
    },
    ReplacementRule {
        name: "gecko-btn-id-css",
        pattern: r"#gecko-assistant-btn.*?\}\s*",
        replacement: "",
    },
    ReplacementRule {
        name: "gecko-btn-class-css",
        pattern: r"\.gecko-assistant-btn.*?\}\s*",
        replacement: "",
    },
    ReplacementRule {
        name: "gecko-mega-keyframes",
        pattern: r"@keyframes gecko-mega.*?\}\s*",
        replacement: "",
    },
];
