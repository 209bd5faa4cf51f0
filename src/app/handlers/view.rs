//! Handler für Kamera-, Viewport- und Szenen-Operationen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{SceneBounds, SceneTransform, ViewAxis, ViewCamera};

/// Übernimmt Szenen-Metadaten nach dem Laden eines Scans.
pub fn load_scan(state: &mut AppState, bounds: SceneBounds) {
    state.scene.scan_loaded = true;
    state.scene.bounds = Some(bounds);
    log::info!(
        "Scan geladen: Bounds ({:.1}, {:.1}, {:.1}) bis ({:.1}, {:.1}, {:.1})",
        bounds.min.x,
        bounds.min.y,
        bounds.min.z,
        bounds.max.x,
        bounds.max.y,
        bounds.max.z
    );
}

/// Setzt die Szenen-Metadaten nach dem Entladen zurück.
pub fn clear_scan(state: &mut AppState) {
    state.scene.scan_loaded = false;
    state.scene.bounds = None;
    state.scene.transform = SceneTransform::IDENTITY;
}

/// Richtet die Kamera achsenparallel aus.
pub fn snap_to_axis(state: &mut AppState, axis: ViewAxis) {
    use_cases::camera::snap_to_axis(state, axis);
}

/// Passt die Kamera auf die Szene ein.
pub fn frame_scene(state: &mut AppState) {
    use_cases::camera::frame_scene(state);
}

/// Setzt die Viewport-Größe.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    state.view.viewport_size = size;
}

/// Übernimmt die von der Einbettung gemeldete Orbit-Pose.
pub fn set_camera_pose(state: &mut AppState, camera: ViewCamera) {
    state.view.camera = camera;
}
