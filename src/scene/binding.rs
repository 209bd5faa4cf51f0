//! Brücke zwischen Entity Store und Render-Szene.
//!
//! Die Render-Schicht hängt Marker lokal unter den Scan-Transform;
//! beim Manipulieren des Scans driften deren Welt-Positionen. Dieses
//! Modul liest die render-seitigen Lokal-Positionen über
//! [`SceneBinding`] zurück und resynchronisiert den Store, damit
//! Entities starr mit dem Scan mitbewegt bleiben und nie stillschweigend
//! vom Scan abkoppeln.

use glam::Vec3;

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::SceneTransform;
use crate::sync::PersistOp;

/// Read-Zugriff auf die render-seitigen Lokal-Positionen der Marker.
pub trait SceneBinding {
    /// Lokal-Positionen aller Punkte einer Messung, in Punktreihenfolge.
    fn measurement_point_locals(&self, measurement_id: u64) -> Option<Vec<Vec3>>;

    /// Lokal-Position des Ankers einer Annotation.
    fn annotation_local(&self, annotation_id: u64) -> Option<Vec3>;
}

/// Liest die Welt-Position einer Annotation aus der Render-Szene
/// (Lokal-Position über den aktuellen Transform abgebildet) — für die
/// Persistenz nach Live-Manipulation.
pub fn annotation_world_position(
    binding: &dyn SceneBinding,
    transform: &SceneTransform,
    annotation_id: u64,
) -> Option<Vec3> {
    binding
        .annotation_local(annotation_id)
        .map(|local| transform.local_to_world(local))
}

/// Liest die Welt-Positionen aller Punkte einer Messung aus der
/// Render-Szene.
pub fn measurement_world_points(
    binding: &dyn SceneBinding,
    transform: &SceneTransform,
    measurement_id: u64,
) -> Option<Vec<Vec3>> {
    binding.measurement_point_locals(measurement_id).map(|locals| {
        locals
            .into_iter()
            .map(|local| transform.local_to_world(local))
            .collect()
    })
}

/// Resynchronisiert alle Entity-Positionen nach einer Transform-Änderung
/// des Scans.
///
/// Messungen laufen über das Bulk-Update (eine Wert-Neuberechnung pro
/// Messung statt N Einzel-Updates mit veralteten Zwischenständen);
/// Annotationen werden gesammelt verschoben und einmal persistiert.
pub fn resync_after_transform(state: &mut AppState, binding: &dyn SceneBinding) {
    let transform = state.scene.transform;

    let measurement_ids: Vec<u64> = state.store.measurements.keys().copied().collect();
    for id in measurement_ids {
        if let Some(points) = measurement_world_points(binding, &transform, id) {
            use_cases::measurement::update_points(state, id, points);
        }
    }

    let annotation_ids: Vec<u64> = state.store.annotations.keys().copied().collect();
    for id in annotation_ids {
        let Some(world) = annotation_world_position(binding, &transform, id) else {
            continue;
        };
        if let Some(annotation) = state.store.annotations.get_mut(&id) {
            annotation.position = world;
            state.outbox.push(PersistOp::UpdateAnnotation { id });
        }
    }

    state.store.mark_markers_dirty();
    state.store.ensure_marker_index();
}
