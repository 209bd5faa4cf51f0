//! Handler für gespeicherte Ansichten.

use crate::app::use_cases;
use crate::app::AppState;

/// Speichert die aktuelle Kamera als Ansicht.
pub fn create(state: &mut AppState, name: String) {
    use_cases::saved_view::create(state, name);
}

/// Benennt eine Ansicht um.
pub fn rename(state: &mut AppState, id: u64, name: String) {
    use_cases::saved_view::rename(state, id, name);
}

/// Löscht eine Ansicht.
pub fn delete(state: &mut AppState, id: u64) {
    use_cases::saved_view::delete(state, id);
}

/// Verschiebt eine Ansicht an eine neue Listenposition.
pub fn reorder(state: &mut AppState, id: u64, new_index: usize) {
    use_cases::saved_view::reorder(state, id, new_index);
}

/// Wendet eine Ansicht an (Kameraflug).
pub fn apply(state: &mut AppState, id: u64) {
    use_cases::saved_view::apply(state, id);
}
