//! Persistenz-Gateway: Boundary zum externen Sync-Dienst.
//!
//! Der Core kennt kein Wire-Protokoll; die Einbettung implementiert
//! [`PersistenceGateway`] und treibt [`flush_outbox`] nach jeder
//! Event-Verarbeitung. Lokal gilt optimistisches Schreiben: ein
//! fehlgeschlagener Aufruf wird gewarnt, der lokale Stand bleibt.

use crate::app::EntityStore;

use super::{PersistOp, SyncOutbox};

/// Server-vergebene ID eines persistierten Entities.
pub type RemoteId = String;

/// Create/Update/Delete pro Entity-Art, jeweils mit Server-Antwort.
pub trait PersistenceGateway {
    fn create_measurement(
        &mut self,
        measurement: &crate::core::Measurement,
    ) -> anyhow::Result<RemoteId>;
    fn update_measurement(&mut self, measurement: &crate::core::Measurement) -> anyhow::Result<()>;
    fn delete_measurement(&mut self, id: u64) -> anyhow::Result<()>;

    fn create_annotation(
        &mut self,
        annotation: &crate::core::Annotation,
    ) -> anyhow::Result<RemoteId>;
    fn update_annotation(&mut self, annotation: &crate::core::Annotation) -> anyhow::Result<()>;
    fn delete_annotation(&mut self, id: u64) -> anyhow::Result<()>;

    fn create_reply(
        &mut self,
        annotation_id: u64,
        reply: &crate::core::AnnotationReply,
    ) -> anyhow::Result<RemoteId>;
    fn delete_reply(&mut self, annotation_id: u64, reply_id: u64) -> anyhow::Result<()>;

    fn create_saved_view(&mut self, view: &crate::core::SavedView) -> anyhow::Result<RemoteId>;
    fn update_saved_view(&mut self, view: &crate::core::SavedView) -> anyhow::Result<()>;
    fn delete_saved_view(&mut self, id: u64) -> anyhow::Result<()>;
}

/// Leert die Outbox gegen das Gateway.
///
/// Create/Update lesen den aktuellen Store-Stand (spätere Änderungen
/// desselben Entities fallen dadurch zusammen); inzwischen gelöschte
/// Entities werden still übersprungen. Fehlschläge werden gewarnt und
/// nicht erneut eingereiht — kein Rollback, keine Retry-Semantik.
/// Gibt die Anzahl erfolgreich übertragener Operationen zurück.
pub fn flush_outbox(
    store: &EntityStore,
    outbox: &mut SyncOutbox,
    gateway: &mut dyn PersistenceGateway,
) -> usize {
    let mut flushed = 0;

    for op in outbox.drain() {
        let result = dispatch_op(store, gateway, &op);
        match result {
            Ok(applied) => {
                if applied {
                    flushed += 1;
                } else {
                    log::debug!("Persistenz-Operation übersprungen (Entity weg): {op:?}");
                }
            }
            Err(e) => {
                log::warn!("Persistenz fehlgeschlagen (lokaler Stand bleibt erhalten): {op:?}: {e}");
            }
        }
    }

    flushed
}

/// Führt eine einzelne Operation aus. `Ok(false)` = Entity nicht mehr
/// vorhanden, Operation gegenstandslos.
fn dispatch_op(
    store: &EntityStore,
    gateway: &mut dyn PersistenceGateway,
    op: &PersistOp,
) -> anyhow::Result<bool> {
    match *op {
        PersistOp::CreateMeasurement { id } => match store.measurements.get(&id) {
            Some(m) => gateway.create_measurement(m).map(|_| true),
            None => Ok(false),
        },
        PersistOp::UpdateMeasurement { id } => match store.measurements.get(&id) {
            Some(m) => gateway.update_measurement(m).map(|_| true),
            None => Ok(false),
        },
        PersistOp::DeleteMeasurement { id } => gateway.delete_measurement(id).map(|_| true),
        PersistOp::CreateAnnotation { id } => match store.annotations.get(&id) {
            Some(a) => gateway.create_annotation(a).map(|_| true),
            None => Ok(false),
        },
        PersistOp::UpdateAnnotation { id } => match store.annotations.get(&id) {
            Some(a) => gateway.update_annotation(a).map(|_| true),
            None => Ok(false),
        },
        PersistOp::DeleteAnnotation { id } => gateway.delete_annotation(id).map(|_| true),
        PersistOp::CreateReply {
            annotation_id,
            reply_id,
        } => {
            let reply = store
                .annotations
                .get(&annotation_id)
                .and_then(|a| a.replies.iter().find(|r| r.id == reply_id));
            match reply {
                Some(r) => gateway.create_reply(annotation_id, r).map(|_| true),
                None => Ok(false),
            }
        }
        PersistOp::DeleteReply {
            annotation_id,
            reply_id,
        } => gateway.delete_reply(annotation_id, reply_id).map(|_| true),
        PersistOp::CreateSavedView { id } => match store.saved_view(id) {
            Some(v) => gateway.create_saved_view(v).map(|_| true),
            None => Ok(false),
        },
        PersistOp::UpdateSavedView { id } => match store.saved_view(id) {
            Some(v) => gateway.update_saved_view(v).map(|_| true),
            None => Ok(false),
        },
        PersistOp::DeleteSavedView { id } => gateway.delete_saved_view(id).map(|_| true),
    }
}
