//! Use-Cases für gespeicherte Ansichten: Anlegen, Umsortieren, Anwenden.

use crate::app::AppState;
use crate::core::{CameraFlight, SavedView};
use crate::sync::PersistOp;

/// Speichert die aktuelle Kamera als neue Ansicht am Listenende.
pub fn create(state: &mut AppState, name: String) -> SavedView {
    let id = state.store.alloc_id();
    let view = SavedView {
        id,
        name,
        camera: state.view.camera,
        sort_order: 0, // wird beim Einfügen dicht neu vergeben
        created_by: state.session.user_id.clone(),
        created_at: state.session.now_ms,
    };
    let end = state.store.saved_views.len();
    state.store.insert_saved_view_at(view.clone(), end);
    state.outbox.push(PersistOp::CreateSavedView { id });
    log::info!("Ansicht {id} gespeichert");

    // Snapshot nach Einfügen (mit endgültiger sort_order)
    state.store.saved_view(id).cloned().unwrap_or(view)
}

/// Benennt eine Ansicht um.
pub fn rename(state: &mut AppState, id: u64, name: String) {
    let Some(view) = state.store.saved_view_mut(id) else {
        log::debug!("RenameSavedView ignoriert: Ansicht {id} unbekannt");
        return;
    };
    view.name = name;
    state.outbox.push(PersistOp::UpdateSavedView { id });
}

/// Löscht eine Ansicht; die restlichen Ansichten werden dicht
/// nachnummeriert und persistiert.
pub fn delete(state: &mut AppState, id: u64) {
    let before: Vec<(u64, u32)> = order_snapshot(state);
    if state.store.remove_saved_view(id).is_none() {
        return;
    }
    state.outbox.push(PersistOp::DeleteSavedView { id });
    push_order_updates(state, &before);
}

/// Verschiebt eine Ansicht an eine neue Listenposition.
pub fn reorder(state: &mut AppState, id: u64, new_index: usize) {
    let Some(current) = state.store.saved_views.iter().position(|v| v.id == id) else {
        log::debug!("ReorderSavedView ignoriert: Ansicht {id} unbekannt");
        return;
    };

    let before: Vec<(u64, u32)> = order_snapshot(state);
    let view = state.store.saved_views.remove(current);
    let new_index = new_index.min(state.store.saved_views.len());
    state.store.insert_saved_view_at(view, new_index);
    push_order_updates(state, &before);
}

/// Wendet eine Ansicht an: fordert einen Kameraflug zur gespeicherten
/// Pose an (kein harter Schnitt).
pub fn apply(state: &mut AppState, id: u64) {
    let Some(view) = state.store.saved_view(id) else {
        log::debug!("ApplySavedView ignoriert: Ansicht {id} unbekannt");
        return;
    };
    state.view.requested_flight = Some(CameraFlight {
        camera: view.camera,
        duration_s: state.options.camera_flight_duration_s,
    });
}

fn order_snapshot(state: &AppState) -> Vec<(u64, u32)> {
    state
        .store
        .saved_views
        .iter()
        .map(|v| (v.id, v.sort_order))
        .collect()
}

/// Persistiert jede Ansicht, deren `sort_order` sich geändert hat.
fn push_order_updates(state: &mut AppState, before: &[(u64, u32)]) {
    let changed: Vec<u64> = state
        .store
        .saved_views
        .iter()
        .filter(|v| {
            before
                .iter()
                .find(|(id, _)| *id == v.id)
                .is_none_or(|(_, order)| *order != v.sort_order)
        })
        .map(|v| v.id)
        .collect();
    for id in changed {
        state.outbox.push(PersistOp::UpdateSavedView { id });
    }
}
