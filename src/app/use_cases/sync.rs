//! Use-Case: Remote-Changes des Persistenz-Dienstes einfalten.
//!
//! Inserts werden nur übernommen, wenn das Entity lokal noch nicht
//! existiert — der eigene optimistische Schreibvorgang kommt als Echo
//! zurück und darf nicht doppeln. Updates werden übernommen (für
//! Selbst-Echos idempotent), Deletes räumen referenzierende
//! Interaktion mit ab.

use crate::app::AppState;
use crate::sync::RemoteChange;

use super::selection;

/// Faltet eine eingehende Änderung in den Entity Store ein.
pub fn apply_remote_change(state: &mut AppState, change: RemoteChange) {
    match change {
        RemoteChange::MeasurementInserted { measurement } => {
            if state.store.measurements.contains_key(&measurement.id) {
                log::debug!("Insert-Echo für Messung {} übersprungen", measurement.id);
                return;
            }
            state.store.insert_measurement(measurement);
        }
        RemoteChange::MeasurementUpdated { measurement } => {
            state.store.insert_measurement(measurement);
        }
        RemoteChange::MeasurementDeleted { id } => {
            selection::clear_interaction_for_measurement(state, id);
            state.store.remove_measurement(id);
        }
        RemoteChange::AnnotationInserted { annotation } => {
            if state.store.annotations.contains_key(&annotation.id) {
                log::debug!("Insert-Echo für Annotation {} übersprungen", annotation.id);
                return;
            }
            state.store.insert_annotation(annotation);
        }
        RemoteChange::AnnotationUpdated { annotation } => {
            state.store.insert_annotation(annotation);
        }
        RemoteChange::AnnotationDeleted { id } => {
            selection::clear_interaction_for_annotation(state, id);
            state.store.remove_annotation(id);
        }
        RemoteChange::ReplyAdded {
            annotation_id,
            reply,
        } => {
            state.store.observe_id(reply.id);
            let Some(annotation) = state.store.annotations.get_mut(&annotation_id) else {
                log::debug!("Reply für unbekannte Annotation {annotation_id} verworfen");
                return;
            };
            if annotation.replies.iter().any(|r| r.id == reply.id) {
                log::debug!("Reply-Echo {} übersprungen", reply.id);
                return;
            }
            annotation.replies.push(reply);
        }
        RemoteChange::ReplyRemoved {
            annotation_id,
            reply_id,
        } => {
            if let Some(annotation) = state.store.annotations.get_mut(&annotation_id) {
                annotation.remove_reply(reply_id);
            }
        }
        RemoteChange::SavedViewInserted { view } => {
            if state.store.saved_view(view.id).is_some() {
                log::debug!("Insert-Echo für Ansicht {} übersprungen", view.id);
                return;
            }
            let index = view.sort_order as usize;
            state.store.insert_saved_view_at(view, index);
        }
        RemoteChange::SavedViewUpdated { view } => {
            let index = view.sort_order as usize;
            state.store.remove_saved_view(view.id);
            state.store.insert_saved_view_at(view, index);
        }
        RemoteChange::SavedViewDeleted { id } => {
            state.store.remove_saved_view(id);
        }
    }
}
