//! Use-Cases für den Messungs-Lifecycle: Pending-Sammlung,
//! Punkt-Updates und Löschen.

use glam::Vec3;

use crate::app::AppState;
use crate::core::{Measurement, MeasurementKind, PendingMeasurement};
use crate::sync::PersistOp;

use super::selection;

/// Beginnt eine neue Punkt-Sammlung.
/// Stilles No-op, wenn bereits eine Messung läuft.
pub fn start(state: &mut AppState, kind: MeasurementKind) {
    if state.pending_measurement.is_some() {
        log::debug!("StartMeasurement ignoriert: bereits eine Messung in Arbeit");
        return;
    }
    state.pending_measurement = Some(PendingMeasurement::new(kind));
}

/// Hängt einen Punkt an die laufende Messung an.
/// Ohne laufende Messung ein stilles No-op.
pub fn add_point(state: &mut AppState, world_pos: Vec3) {
    let Some(pending) = state.pending_measurement.as_mut() else {
        log::debug!("AddMeasurementPoint ignoriert: keine Messung in Arbeit");
        return;
    };
    pending.points.push(world_pos);
}

/// Nimmt den letzten Punkt zurück. Wird die Sammlung dadurch leer,
/// wird sie komplett verworfen (kein leerer Pending-Zustand).
pub fn undo_last_point(state: &mut AppState) {
    let Some(pending) = state.pending_measurement.as_mut() else {
        return;
    };
    pending.points.pop();
    if pending.points.is_empty() {
        state.pending_measurement = None;
    }
}

/// Verwirft die laufende Messung bedingungslos.
pub fn cancel(state: &mut AppState) {
    if state.pending_measurement.take().is_some() {
        log::info!("Laufende Messung verworfen");
    }
}

/// Finalisiert die laufende Messung.
///
/// Validiert die Mindest-Punktzahl (2 Distanz, 3 Fläche). Bei Erfolg
/// entsteht das Entity im Store, die Pending-Sammlung wird geleert und
/// der Snapshot zurückgegeben; bei zu wenig Punkten bleibt der Zustand
/// unverändert und es wird nichts zurückgegeben.
pub fn finalize(state: &mut AppState) -> Option<Measurement> {
    let pending = state.pending_measurement.as_ref()?;
    if !pending.is_complete() {
        log::debug!(
            "FinalizeMeasurement ignoriert: {} von {} Punkten",
            pending.points.len(),
            pending.kind.min_points()
        );
        return None;
    }

    let pending = state.pending_measurement.take()?;
    let id = state.store.alloc_id();
    let measurement = Measurement::new(
        id,
        pending.kind,
        pending.points,
        state.options.default_unit,
        state.session.user_id.clone(),
        state.session.now_ms,
    );
    state.store.insert_measurement(measurement.clone());
    state.outbox.push(PersistOp::CreateMeasurement { id });
    log::info!(
        "Messung {} finalisiert ({} Punkte, Wert {:.3})",
        id,
        measurement.points.len(),
        measurement.value
    );
    Some(measurement)
}

/// Verschiebt einen einzelnen Messpunkt und berechnet den Wert neu.
pub fn move_point(state: &mut AppState, id: u64, index: usize, world_pos: Vec3) {
    let Some(measurement) = state.store.measurements.get_mut(&id) else {
        log::debug!("MoveMeasurementPoint ignoriert: Messung {id} unbekannt");
        return;
    };
    if !measurement.set_point(index, world_pos) {
        log::debug!("MoveMeasurementPoint ignoriert: Punkt-Index {index} ungültig");
        return;
    }
    state.store.mark_markers_dirty();
    state.store.ensure_marker_index();
    state.outbox.push(PersistOp::UpdateMeasurement { id });
}

/// Ersetzt alle Punkte einer Messung auf einmal und berechnet den Wert
/// genau einmal neu.
///
/// Existiert speziell für die Resynchronisation nach einer
/// Transform-Änderung des Scans: N Einzel-Updates würden N
/// Neuberechnungen mit veralteten Zwischenständen erzeugen.
pub fn update_points(state: &mut AppState, id: u64, points: Vec<Vec3>) {
    let Some(measurement) = state.store.measurements.get_mut(&id) else {
        log::debug!("UpdateMeasurementPoints ignoriert: Messung {id} unbekannt");
        return;
    };
    measurement.set_points(points);
    state.store.mark_markers_dirty();
    state.store.ensure_marker_index();
    state.outbox.push(PersistOp::UpdateMeasurement { id });
}

/// Setzt die Beschriftung einer Messung.
pub fn set_label(state: &mut AppState, id: u64, label: Option<String>) {
    let Some(measurement) = state.store.measurements.get_mut(&id) else {
        return;
    };
    measurement.label = label;
    state.outbox.push(PersistOp::UpdateMeasurement { id });
}

/// Löscht eine Messung inklusive referenzierender Selektion/Drags.
pub fn delete(state: &mut AppState, id: u64) -> Option<Measurement> {
    selection::clear_interaction_for_measurement(state, id);
    let removed = state.store.remove_measurement(id)?;
    state.outbox.push(PersistOp::DeleteMeasurement { id });
    log::info!("Messung {id} gelöscht");
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MeasurementKind;

    #[test]
    fn start_is_noop_while_pending_exists() {
        let mut state = AppState::new();
        start(&mut state, MeasurementKind::Distance);
        add_point(&mut state, Vec3::ZERO);

        start(&mut state, MeasurementKind::Area);

        let pending = state.pending_measurement.as_ref().expect("Pending erwartet");
        assert_eq!(pending.kind, MeasurementKind::Distance);
        assert_eq!(pending.points.len(), 1);
    }

    #[test]
    fn undo_last_point_discards_emptied_pending() {
        let mut state = AppState::new();
        start(&mut state, MeasurementKind::Distance);
        add_point(&mut state, Vec3::ZERO);

        undo_last_point(&mut state);

        assert!(state.pending_measurement.is_none());
    }

    #[test]
    fn finalize_rejects_incomplete_area() {
        let mut state = AppState::new();
        start(&mut state, MeasurementKind::Area);
        add_point(&mut state, Vec3::ZERO);
        add_point(&mut state, Vec3::X);

        assert!(finalize(&mut state).is_none());
        // Zustand unverändert: Pending bleibt bestehen
        assert!(state.pending_measurement.is_some());
        assert_eq!(state.store.measurement_count(), 0);
    }

    #[test]
    fn finalize_creates_entity_and_clears_pending() {
        let mut state = AppState::new();
        start(&mut state, MeasurementKind::Distance);
        add_point(&mut state, Vec3::ZERO);
        add_point(&mut state, Vec3::new(3.0, 0.0, 4.0));

        let created = finalize(&mut state).expect("Messung erwartet");

        assert!(state.pending_measurement.is_none());
        assert_eq!(state.store.measurement_count(), 1);
        assert!((created.value - 5.0).abs() < 1e-5);
        assert_eq!(
            state.outbox.ops(),
            &[PersistOp::CreateMeasurement { id: created.id }]
        );
    }

    #[test]
    fn bulk_update_recomputes_value_once_and_idempotently() {
        let mut state = AppState::new();
        start(&mut state, MeasurementKind::Distance);
        add_point(&mut state, Vec3::ZERO);
        add_point(&mut state, Vec3::X);
        let id = finalize(&mut state).expect("Messung erwartet").id;

        let points = vec![Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 2.0, 2.0)];
        update_points(&mut state, id, points.clone());
        let first = state.store.measurements[&id].value;
        update_points(&mut state, id, points);
        assert_eq!(state.store.measurements[&id].value, first);
    }
}
