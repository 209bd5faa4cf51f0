//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt geänderte Optionen (sofortige Anwendung).
pub fn apply(state: &mut AppState, options: EditorOptions) {
    state.options = options;
}

/// Setzt alle Optionen auf Standardwerte zurück.
pub fn reset(state: &mut AppState) {
    state.options = EditorOptions::default();
    log::info!("Optionen auf Standardwerte zurückgesetzt");
}
