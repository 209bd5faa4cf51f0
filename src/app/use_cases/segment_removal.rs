//! Use-Case: Segment aus einer Mess-Polylinie entfernen.
//!
//! Ein Segment-Entfernen macht aus einer Messung null, eine oder zwei
//! Messungen (Delete/Truncate/Split). Die Operation ist atomar: Store-
//! Mutation, Bereinigung referenzierender Selektion/Drags und die
//! Persistenz-Operationen entstehen im selben Aufruf.

use crate::app::AppState;
use crate::core::geometry::{split_points_at_segment, SegmentSplit};
use crate::core::Measurement;
use crate::sync::PersistOp;

use super::selection;

/// Ergebnis der Segment-Entfernung mit Entity-Snapshots für die
/// externe Persistenz.
#[derive(Debug, Clone)]
pub enum SegmentRemovalOutcome {
    /// Ungültiger Segment-Index oder unbekannte Messung — No-op
    Rejected,
    /// Die Messung hatte nur ein Segment und wurde gelöscht
    Deleted { measurement: Measurement },
    /// Randsegment entfernt, Messung in-place gekürzt
    Truncated { measurement: Measurement },
    /// Mittleres Segment entfernt, Messung in zwei geteilt
    Split {
        updated: Measurement,
        created: Measurement,
    },
}

/// Entfernt Segment `segment_index` aus Messung `id`.
pub fn remove_segment(
    state: &mut AppState,
    id: u64,
    segment_index: usize,
) -> SegmentRemovalOutcome {
    let Some(measurement) = state.store.measurements.get(&id) else {
        log::debug!("RemoveSegment ignoriert: Messung {id} unbekannt");
        return SegmentRemovalOutcome::Rejected;
    };

    match split_points_at_segment(&measurement.points, segment_index) {
        SegmentSplit::Rejected => {
            log::debug!("RemoveSegment ignoriert: Segment-Index {segment_index} ungültig");
            SegmentRemovalOutcome::Rejected
        }
        SegmentSplit::Delete => {
            selection::clear_interaction_for_measurement(state, id);
            let Some(removed) = state.store.remove_measurement(id) else {
                return SegmentRemovalOutcome::Rejected;
            };
            state.outbox.push(PersistOp::DeleteMeasurement { id });
            log::info!("Messung {id} durch Segment-Entfernung gelöscht");
            SegmentRemovalOutcome::Deleted { measurement: removed }
        }
        SegmentSplit::Truncate(points) => {
            selection::clear_interaction_for_measurement(state, id);
            let snapshot = {
                let Some(measurement) = state.store.measurements.get_mut(&id) else {
                    return SegmentRemovalOutcome::Rejected;
                };
                measurement.set_points(points);
                measurement.clone()
            };
            state.store.mark_markers_dirty();
            state.store.ensure_marker_index();
            state.outbox.push(PersistOp::UpdateMeasurement { id });
            SegmentRemovalOutcome::Truncated {
                measurement: snapshot,
            }
        }
        SegmentSplit::Split { left, right } => {
            selection::clear_interaction_for_measurement(state, id);
            let updated = {
                let Some(measurement) = state.store.measurements.get_mut(&id) else {
                    return SegmentRemovalOutcome::Rejected;
                };
                measurement.set_points(left);
                measurement.clone()
            };

            // Zweite Hälfte erbt Art, Einheit und Ersteller der Quelle
            let new_id = state.store.alloc_id();
            let created = Measurement::new(
                new_id,
                updated.kind,
                right,
                updated.unit,
                updated.created_by.clone(),
                updated.created_at,
            );
            state.store.insert_measurement(created.clone());

            state.outbox.push(PersistOp::UpdateMeasurement { id });
            state
                .outbox
                .push(PersistOp::CreateMeasurement { id: new_id });
            log::info!("Messung {id} in {id} und {new_id} geteilt");
            SegmentRemovalOutcome::Split { updated, created }
        }
    }
}
