//! Use-Cases für Selektion und Marker-Drags.
//!
//! Zentrale Invariante der State-Machine: höchstens einer von
//! {selektierte Annotation, selektierter Messpunkt, Annotation-Drag,
//! Punkt-Drag} ist aktiv. Jede Transition hier räumt die jeweils
//! anderen Zustände im selben Schritt mit ab.

use glam::Vec3;

use crate::app::state::{EditorTool, InteractionMode};
use crate::app::AppState;
use crate::core::MarkerRef;
use crate::sync::PersistOp;

/// Setzt das aktive Werkzeug.
/// Löscht Selektion, Drag und geparktes Werkzeug atomar mit.
pub fn set_tool(state: &mut AppState, tool: EditorTool) {
    state.interaction.mode = InteractionMode::Idle;
    state.interaction.stashed_tool = None;
    state.view.orbit_enabled = true;
    state.interaction.active_tool = tool;
}

/// Selektiert einen Marker.
/// Löscht das aktive Werkzeug (zurück zu Select) und jeden anderen Modus.
pub fn select_marker(state: &mut AppState, marker: MarkerRef) {
    state.interaction.active_tool = EditorTool::Select;
    state.interaction.stashed_tool = None;
    // Falls die Selektion einen laufenden Drag verdrängt: Orbit wieder frei
    state.view.orbit_enabled = true;
    state.interaction.mode = match marker {
        MarkerRef::Annotation { annotation_id } => {
            InteractionMode::AnnotationSelected { annotation_id }
        }
        MarkerRef::MeasurementPoint {
            measurement_id,
            point_index,
        } => InteractionMode::PointSelected {
            measurement_id,
            point_index,
        },
    };
}

/// Hebt Selektion und Drag auf und gibt die Orbit-Kamera frei.
pub fn clear_interaction(state: &mut AppState) {
    state.interaction.mode = InteractionMode::Idle;
    state.interaction.stashed_tool = None;
    state.view.orbit_enabled = true;
}

/// Beginnt einen Marker-Drag.
///
/// Parkt das aktive Werkzeug (Wiederherstellung am Drag-Ende), löscht
/// jede andere Selektion und sperrt die Orbit-Kamera für die Dauer des
/// Drags.
pub fn begin_marker_drag(state: &mut AppState, marker: MarkerRef) {
    state.interaction.stashed_tool = Some(state.interaction.active_tool);
    state.interaction.active_tool = EditorTool::Select;
    state.interaction.mode = match marker {
        MarkerRef::Annotation { annotation_id } => {
            InteractionMode::DraggingAnnotation { annotation_id }
        }
        MarkerRef::MeasurementPoint {
            measurement_id,
            point_index,
        } => InteractionMode::DraggingPoint {
            measurement_id,
            point_index,
        },
    };
    state.view.orbit_enabled = false;
}

/// Übernimmt die Live-Position während eines Drags.
///
/// Schreibt nur in den Store (für das Render-Feedback); die
/// Persistenz-Operation entsteht erst am Drag-Ende.
pub fn update_marker_drag(state: &mut AppState, world_pos: Vec3) {
    match state.interaction.mode {
        InteractionMode::DraggingPoint {
            measurement_id,
            point_index,
        } => {
            if let Some(measurement) = state.store.measurements.get_mut(&measurement_id) {
                measurement.set_point(point_index, world_pos);
                state.store.mark_markers_dirty();
            }
        }
        InteractionMode::DraggingAnnotation { annotation_id } => {
            if let Some(annotation) = state.store.annotations.get_mut(&annotation_id) {
                annotation.position = world_pos;
                state.store.mark_markers_dirty();
            }
        }
        _ => {
            log::debug!("UpdateMarkerDrag ignoriert: kein Drag aktiv");
        }
    }
}

/// Beendet einen Marker-Drag.
///
/// `final_pos` ist der autoritative Re-Pick von der finalen
/// Cursor-Position (Snap-on-Release); `None` bei Fehlschuss, dann
/// bleibt die letzte Live-Position bestehen. Erst hier entsteht genau
/// eine Persistenz-Operation. Das geparkte Werkzeug wird
/// wiederhergestellt und die Orbit-Kamera freigegeben.
pub fn end_marker_drag(state: &mut AppState, final_pos: Option<Vec3>) {
    let mode = state.interaction.mode;
    let dragged = match mode {
        InteractionMode::DraggingPoint {
            measurement_id,
            point_index,
        } => Some(MarkerRef::MeasurementPoint {
            measurement_id,
            point_index,
        }),
        InteractionMode::DraggingAnnotation { annotation_id } => {
            Some(MarkerRef::Annotation { annotation_id })
        }
        _ => None,
    };

    let Some(dragged) = dragged else {
        log::debug!("EndMarkerDrag ignoriert: kein Drag aktiv");
        return;
    };

    if let Some(pos) = final_pos {
        update_marker_drag(state, pos);
    }
    state.store.ensure_marker_index();

    match dragged {
        MarkerRef::MeasurementPoint { measurement_id, .. } => {
            state
                .outbox
                .push(PersistOp::UpdateMeasurement { id: measurement_id });
        }
        MarkerRef::Annotation { annotation_id } => {
            state
                .outbox
                .push(PersistOp::UpdateAnnotation { id: annotation_id });
        }
    }

    let restored = state.interaction.stashed_tool.take().unwrap_or_default();
    state.interaction.active_tool = restored;
    // Nach dem Drag bleibt der Marker selektiert, sofern kein
    // Platzierungs-Werkzeug wiederaufgenommen wird
    state.interaction.mode = if restored == EditorTool::Select {
        match dragged {
            MarkerRef::Annotation { annotation_id } => {
                InteractionMode::AnnotationSelected { annotation_id }
            }
            MarkerRef::MeasurementPoint {
                measurement_id,
                point_index,
            } => InteractionMode::PointSelected {
                measurement_id,
                point_index,
            },
        }
    } else {
        InteractionMode::Idle
    };
    state.view.orbit_enabled = true;
}

/// Räumt Selektion/Drag ab, die diese Messung referenzieren.
pub fn clear_interaction_for_measurement(state: &mut AppState, id: u64) {
    if state.interaction.mode.references_measurement(id) {
        clear_interaction(state);
    }
}

/// Räumt Selektion/Drag ab, die diese Annotation referenzieren.
pub fn clear_interaction_for_annotation(state: &mut AppState, id: u64) {
    if state.interaction.mode.references_annotation(id) {
        clear_interaction(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Measurement, MeasurementKind, MeasurementUnit};

    fn state_with_measurement() -> (AppState, u64) {
        let mut state = AppState::new();
        let id = state.store.alloc_id();
        state.store.insert_measurement(Measurement::new(
            id,
            MeasurementKind::Distance,
            vec![Vec3::ZERO, Vec3::X],
            MeasurementUnit::Meters,
            "user-a".into(),
            0.0,
        ));
        (state, id)
    }

    #[test]
    fn selecting_marker_clears_active_tool() {
        let (mut state, id) = state_with_measurement();
        state.interaction.active_tool = EditorTool::MeasureDistance;

        select_marker(
            &mut state,
            MarkerRef::MeasurementPoint {
                measurement_id: id,
                point_index: 0,
            },
        );

        assert_eq!(state.interaction.active_tool, EditorTool::Select);
        assert_eq!(
            state.interaction.mode,
            InteractionMode::PointSelected {
                measurement_id: id,
                point_index: 0
            }
        );
    }

    #[test]
    fn setting_tool_clears_selection_and_drag() {
        let (mut state, id) = state_with_measurement();
        begin_marker_drag(
            &mut state,
            MarkerRef::MeasurementPoint {
                measurement_id: id,
                point_index: 1,
            },
        );

        set_tool(&mut state, EditorTool::PlacePin);

        assert_eq!(state.interaction.mode, InteractionMode::Idle);
        assert!(state.interaction.stashed_tool.is_none());
        assert!(state.view.orbit_enabled);
    }

    #[test]
    fn drag_disables_orbit_and_restores_tool_on_end() {
        let (mut state, id) = state_with_measurement();
        state.interaction.active_tool = EditorTool::MeasureDistance;

        begin_marker_drag(
            &mut state,
            MarkerRef::MeasurementPoint {
                measurement_id: id,
                point_index: 1,
            },
        );
        assert!(!state.view.orbit_enabled);
        assert_eq!(
            state.interaction.stashed_tool,
            Some(EditorTool::MeasureDistance)
        );

        end_marker_drag(&mut state, Some(Vec3::new(2.0, 0.0, 0.0)));

        assert!(state.view.orbit_enabled);
        assert_eq!(state.interaction.active_tool, EditorTool::MeasureDistance);
        assert_eq!(state.interaction.mode, InteractionMode::Idle);
    }

    #[test]
    fn drag_updates_are_not_persisted_until_release() {
        let (mut state, id) = state_with_measurement();
        begin_marker_drag(
            &mut state,
            MarkerRef::MeasurementPoint {
                measurement_id: id,
                point_index: 1,
            },
        );

        update_marker_drag(&mut state, Vec3::new(1.5, 0.0, 0.0));
        update_marker_drag(&mut state, Vec3::new(2.5, 0.0, 0.0));
        assert!(state.outbox.is_empty());

        end_marker_drag(&mut state, Some(Vec3::new(3.0, 0.0, 0.0)));

        assert_eq!(state.outbox.ops(), &[PersistOp::UpdateMeasurement { id }]);
        let m = &state.store.measurements[&id];
        assert_eq!(m.points[1], Vec3::new(3.0, 0.0, 0.0));
        assert!((m.value - 3.0).abs() < 1e-5);
    }

    #[test]
    fn drag_end_without_final_pick_keeps_live_position() {
        let (mut state, id) = state_with_measurement();
        begin_marker_drag(
            &mut state,
            MarkerRef::MeasurementPoint {
                measurement_id: id,
                point_index: 1,
            },
        );
        update_marker_drag(&mut state, Vec3::new(4.0, 0.0, 0.0));

        end_marker_drag(&mut state, None);

        assert_eq!(
            state.store.measurements[&id].points[1],
            Vec3::new(4.0, 0.0, 0.0)
        );
        assert_eq!(state.outbox.ops(), &[PersistOp::UpdateMeasurement { id }]);
    }

    #[test]
    fn at_most_one_interaction_flag_after_any_sequence() {
        let (mut state, id) = state_with_measurement();
        let point = MarkerRef::MeasurementPoint {
            measurement_id: id,
            point_index: 0,
        };
        let annotation = MarkerRef::Annotation { annotation_id: 99 };

        select_marker(&mut state, annotation);
        select_marker(&mut state, point);
        begin_marker_drag(&mut state, annotation);
        begin_marker_drag(&mut state, point);
        select_marker(&mut state, annotation);

        // Tagged Union: genau ein Modus, nie mehrere
        assert_eq!(
            state.interaction.mode,
            InteractionMode::AnnotationSelected { annotation_id: 99 }
        );
    }
}
