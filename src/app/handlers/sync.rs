//! Handler für den Persistenz-Rand: Remote-Changes und Fehlschläge.

use crate::app::use_cases;
use crate::app::AppState;
use crate::sync::RemoteChange;

/// Faltet eine Change-Notification in den Store ein.
pub fn apply_remote_change(state: &mut AppState, change: RemoteChange) {
    use_cases::sync::apply_remote_change(state, change);
}

/// Protokolliert einen fehlgeschlagenen Persistenz-Aufruf.
///
/// Der lokale Stand wird bewusst nicht zurückgerollt: der optimistische
/// Zustand bleibt sichtbar, der Fehlschlag ist reine Diagnostik.
pub fn log_persist_failure(description: &str) {
    log::warn!("Persistenz fehlgeschlagen (lokaler Stand bleibt erhalten): {description}");
}
