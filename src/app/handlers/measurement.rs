//! Handler für Messungs-Operationen.

use glam::Vec3;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MeasurementKind;

/// Beginnt eine neue Punkt-Sammlung.
pub fn start(state: &mut AppState, kind: MeasurementKind) {
    use_cases::measurement::start(state, kind);
}

/// Hängt einen platzierten Punkt an.
pub fn add_point(state: &mut AppState, world_pos: Vec3) {
    use_cases::measurement::add_point(state, world_pos);
}

/// Nimmt den letzten Punkt zurück.
pub fn undo_last_point(state: &mut AppState) {
    use_cases::measurement::undo_last_point(state);
}

/// Finalisiert die laufende Messung (Validierung im Use-Case).
pub fn finalize(state: &mut AppState) {
    let _ = use_cases::measurement::finalize(state);
}

/// Verwirft die laufende Messung.
pub fn cancel(state: &mut AppState) {
    use_cases::measurement::cancel(state);
}

/// Setzt die Beschriftung einer Messung.
pub fn set_label(state: &mut AppState, id: u64, label: Option<String>) {
    use_cases::measurement::set_label(state, id, label);
}

/// Verschiebt einen einzelnen Messpunkt.
pub fn move_point(state: &mut AppState, id: u64, index: usize, world_pos: Vec3) {
    use_cases::measurement::move_point(state, id, index, world_pos);
}

/// Entfernt ein Segment (Delete/Truncate/Split).
pub fn remove_segment(state: &mut AppState, id: u64, segment_index: usize) {
    use_cases::segment_removal::remove_segment(state, id, segment_index);
}

/// Löscht eine Messung.
pub fn delete(state: &mut AppState, id: u64) {
    let _ = use_cases::measurement::delete(state, id);
}
