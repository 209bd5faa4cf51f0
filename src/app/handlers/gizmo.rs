//! Handler für Gizmo-Operationen.

use glam::{Quat, Vec3};

use crate::app::state::GizmoMode;
use crate::app::use_cases;
use crate::app::AppState;

/// Blendet das Gizmo ein oder aus.
pub fn set_enabled(state: &mut AppState, enabled: bool) {
    use_cases::gizmo::set_enabled(state, enabled);
}

/// Wechselt die Transformationsart.
pub fn set_mode(state: &mut AppState, mode: GizmoMode) {
    use_cases::gizmo::set_mode(state, mode);
}

/// Schaltet das Snap-Raster um.
pub fn set_snap(state: &mut AppState, active: bool) {
    use_cases::gizmo::set_snap(state, active);
}

/// Beginnt einen Handle-Drag.
pub fn begin_drag(state: &mut AppState) {
    use_cases::gizmo::begin_drag(state);
}

/// Wendet den gemeldeten Transform auf das aktuelle Ziel an.
pub fn apply_transform(state: &mut AppState, position: Vec3, rotation: Quat, scale: Vec3) {
    use_cases::gizmo::apply_transform(state, position, rotation, scale);
}

/// Beendet den Handle-Drag.
pub fn end_drag(state: &mut AppState) {
    use_cases::gizmo::end_drag(state);
}
