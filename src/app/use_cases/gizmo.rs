//! Use-Cases für das Gizmo: Handle-Lifecycle und Transform-Anwendung.
//!
//! Das Gizmo hängt je nach Selektion am ganzen Scan, an einer
//! Annotation oder an einem einzelnen Messpunkt; explizite Selektion
//! hat Vorrang vor dem Scan. Bei gehaltener Modifier-Taste rasten
//! Translation, Rotation und Skalierung auf konfigurierte Schritte.

use glam::{EulerRot, Quat, Vec3};

use crate::app::state::{resolve_gizmo_target, GizmoMode, GizmoTarget};
use crate::app::AppState;
use crate::core::SceneTransform;
use crate::shared::EditorOptions;
use crate::sync::PersistOp;

/// Blendet das Gizmo ein oder aus.
/// Beim Ausblenden wird ein laufender Handle-Drag mit beendet.
pub fn set_enabled(state: &mut AppState, enabled: bool) {
    state.interaction.gizmo.enabled = enabled;
    if !enabled && state.interaction.gizmo.handle_dragging {
        state.interaction.gizmo.handle_dragging = false;
        state.view.orbit_enabled = true;
    }
}

/// Wechselt die Transformationsart (Translate/Rotate/Scale).
pub fn set_mode(state: &mut AppState, mode: GizmoMode) {
    state.interaction.gizmo.mode = mode;
}

/// Schaltet das Snap-Raster um (Modifier-Taste).
pub fn set_snap(state: &mut AppState, active: bool) {
    state.interaction.gizmo.snap_active = active;
}

/// Beginnt einen Handle-Drag und sperrt die Orbit-Kamera.
pub fn begin_drag(state: &mut AppState) {
    if !state.interaction.gizmo.enabled {
        log::debug!("BeginGizmoDrag ignoriert: Gizmo nicht aktiv");
        return;
    }
    state.interaction.gizmo.handle_dragging = true;
    state.view.orbit_enabled = false;
}

/// Beendet einen Handle-Drag, gibt die Orbit-Kamera frei und
/// persistiert das bewegte Ziel (Marker-Ziele; der Scan-Transform
/// selbst ist kein Entity).
pub fn end_drag(state: &mut AppState) {
    if !state.interaction.gizmo.handle_dragging {
        return;
    }
    state.interaction.gizmo.handle_dragging = false;
    state.view.orbit_enabled = true;
    state.store.ensure_marker_index();

    match resolve_gizmo_target(&state.interaction.mode) {
        GizmoTarget::Annotation { annotation_id } => {
            state
                .outbox
                .push(PersistOp::UpdateAnnotation { id: annotation_id });
        }
        GizmoTarget::MeasurementPoint { measurement_id, .. } => {
            state
                .outbox
                .push(PersistOp::UpdateMeasurement { id: measurement_id });
        }
        GizmoTarget::Scan => {}
    }
}

/// Wendet einen vom Gizmo gemeldeten Transform auf das aktuelle Ziel an.
///
/// Scan-Ziel: vollständiger Transform. Marker-Ziele: nur die
/// Translation (Rotation/Skalierung einzelner Punkte ist bedeutungslos).
/// Während des Drags entstehen keine Persistenz-Operationen.
pub fn apply_transform(state: &mut AppState, position: Vec3, rotation: Quat, scale: Vec3) {
    if !state.interaction.gizmo.enabled {
        log::debug!("ApplyGizmoTransform ignoriert: Gizmo nicht aktiv");
        return;
    }
    let snap = state.interaction.gizmo.snap_active;
    let options = state.options.clone();

    match resolve_gizmo_target(&state.interaction.mode) {
        GizmoTarget::Scan => {
            let mut transform = SceneTransform {
                position,
                rotation,
                scale,
            };
            if snap {
                snap_transform(&mut transform, &options);
            }
            state.scene.transform = transform;
        }
        GizmoTarget::Annotation { annotation_id } => {
            let pos = if snap {
                snap_vec3(position, options.gizmo_translate_snap)
            } else {
                position
            };
            if let Some(annotation) = state.store.annotations.get_mut(&annotation_id) {
                annotation.position = pos;
                state.store.mark_markers_dirty();
            }
        }
        GizmoTarget::MeasurementPoint {
            measurement_id,
            point_index,
        } => {
            let pos = if snap {
                snap_vec3(position, options.gizmo_translate_snap)
            } else {
                position
            };
            if let Some(measurement) = state.store.measurements.get_mut(&measurement_id) {
                measurement.set_point(point_index, pos);
                state.store.mark_markers_dirty();
            }
        }
    }
}

/// Rastet einen Scan-Transform auf die konfigurierten Schritte.
fn snap_transform(transform: &mut SceneTransform, options: &EditorOptions) {
    transform.position = snap_vec3(transform.position, options.gizmo_translate_snap);
    transform.scale = snap_vec3(transform.scale, options.gizmo_scale_snap);
    transform.rotation = snap_quat(transform.rotation, options.gizmo_rotate_snap_deg);
}

fn snap_value(value: f32, step: f32) -> f32 {
    if step <= f32::EPSILON {
        return value;
    }
    (value / step).round() * step
}

fn snap_vec3(v: Vec3, step: f32) -> Vec3 {
    Vec3::new(
        snap_value(v.x, step),
        snap_value(v.y, step),
        snap_value(v.z, step),
    )
}

/// Rastet eine Rotation über ihre Euler-Winkel (YXZ) auf ein Grad-Raster.
fn snap_quat(q: Quat, step_deg: f32) -> Quat {
    if step_deg <= f32::EPSILON {
        return q;
    }
    let step = step_deg.to_radians();
    let (y, x, z) = q.to_euler(EulerRot::YXZ);
    Quat::from_euler(
        EulerRot::YXZ,
        snap_value(y, step),
        snap_value(x, step),
        snap_value(z, step),
    )
}
