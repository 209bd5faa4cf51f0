//! Handler für Annotations-Operationen.

use glam::Vec3;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{AnnotationKind, AnnotationStatus};

/// Legt eine Annotation am Weltpunkt an.
pub fn create(state: &mut AppState, kind: AnnotationKind, world_pos: Vec3, content: String) {
    use_cases::annotation::create(state, kind, world_pos, content);
}

/// Setzt den Inhalt.
pub fn set_content(state: &mut AppState, id: u64, content: String) {
    use_cases::annotation::set_content(state, id, content);
}

/// Setzt den Status (beliebige Übergänge).
pub fn set_status(state: &mut AppState, id: u64, status: AnnotationStatus) {
    use_cases::annotation::set_status(state, id, status);
}

/// Verschiebt den Ankerpunkt.
pub fn move_to(state: &mut AppState, id: u64, world_pos: Vec3) {
    use_cases::annotation::move_to(state, id, world_pos);
}

/// Hängt eine Antwort an den Thread an.
pub fn add_reply(state: &mut AppState, annotation_id: u64, content: String) {
    let _ = use_cases::annotation::add_reply(state, annotation_id, content);
}

/// Entfernt eine Antwort.
pub fn remove_reply(state: &mut AppState, annotation_id: u64, reply_id: u64) {
    use_cases::annotation::remove_reply(state, annotation_id, reply_id);
}

/// Löscht eine Annotation.
pub fn delete(state: &mut AppState, id: u64) {
    let _ = use_cases::annotation::delete(state, id);
}
