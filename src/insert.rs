//! Insertion of the floating Omniverse assistant before `</body>`.

/// Style, button, chat panel and toggle script for the new assistant.
pub const OMNI_ASSISTANT_FRAGMENT: &str = include_str!("../templates/omni_assistant.html");

/// Insertion anchor.
pub const CLOSING_BODY_MARKER: &str = "</body>";

/// Put the fragment in front of every closing body marker.
///
/// Returns the new buffer and the number of insertions. A page without the
/// marker comes back unchanged. A page that already carries the fragment
/// is also returned as is, so a run over its own output reproduces it.
pub fn insert_fragment(buffer: String) -> (String, usize) {
    if buffer.contains(OMNI_ASSISTANT_FRAGMENT) {
        tracing::debug!("Assistant fragment already present, skipping insertion");
        return (buffer, 0);
    }

    let markers = buffer.matches(CLOSING_BODY_MARKER).count();
    if markers == 0 {
        tracing::warn!(
            marker = CLOSING_BODY_MARKER,
            "No closing body marker found, assistant not inserted"
        );
        return (buffer, 0);
    }

    let replacement = format!("{OMNI_ASSISTANT_FRAGMENT}\n{CLOSING_BODY_MARKER}");
    tracing::debug!(markers, "Inserting assistant fragment");
    (buffer.replace(CLOSING_BODY_MARKER, &replacement), markers)
}
