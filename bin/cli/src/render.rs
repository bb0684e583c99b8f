//! Plain-text rendering of the widget surface.

use data_form_widget::{Rendering, ScopeSelector};
use std::fmt::Write;

/// Formats a rendering as terminal text.
///
/// A hidden rendering produces no text at all.
#[must_use]
pub fn render_text(rendering: &Rendering) -> String {
    let mut text = String::new();
    match rendering {
        Rendering::Hidden => {}
        Rendering::Notice(notice) => {
            let _ = writeln!(text, "{notice}");
        }
        Rendering::Records(cards) => {
            for card in cards {
                let _ = writeln!(text, "--- {} ---", card.key);
                for field in &card.fields {
                    let _ = writeln!(text, "  {}: {}", field.label, field.value);
                }
            }
        }
    }
    text
}

/// Formats the scope picker, marking the current selection.
#[must_use]
pub fn render_scopes(selector: &ScopeSelector) -> String {
    if !selector.is_gated() {
        return "This integration has no scopes.\n".to_string();
    }

    let selected = selector.selected();
    let mut text = String::new();
    for scope in selector.available() {
        let mark = if selected == Some(*scope) { 'x' } else { ' ' };
        let _ = writeln!(
            text,
            "  [{mark}] {} ({})",
            scope.label(),
            scope.query_value()
        );
    }
    text
}
