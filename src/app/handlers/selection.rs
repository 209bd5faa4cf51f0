//! Handler für Selektions- und Drag-Operationen.

use glam::Vec3;

use crate::app::state::EditorTool;
use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MarkerRef;

/// Setzt das aktive Werkzeug.
pub fn set_tool(state: &mut AppState, tool: EditorTool) {
    use_cases::selection::set_tool(state, tool);
}

/// Selektiert einen Marker.
pub fn select_marker(state: &mut AppState, marker: MarkerRef) {
    use_cases::selection::select_marker(state, marker);
}

/// Hebt Selektion und Drag auf.
pub fn clear(state: &mut AppState) {
    use_cases::selection::clear_interaction(state);
}

/// Beginnt einen Marker-Drag.
pub fn begin_drag(state: &mut AppState, marker: MarkerRef) {
    use_cases::selection::begin_marker_drag(state, marker);
}

/// Übernimmt die Live-Position während des Drags.
pub fn update_drag(state: &mut AppState, world_pos: Vec3) {
    use_cases::selection::update_marker_drag(state, world_pos);
}

/// Beendet den Drag mit dem autoritativen Re-Pick.
pub fn end_drag(state: &mut AppState, world_pos: Option<Vec3>) {
    use_cases::selection::end_marker_drag(state, world_pos);
}
