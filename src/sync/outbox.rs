//! Ausgangs-Queue für Persistenz-Operationen.
//!
//! Store-Mutationen laufen lokal immer zuerst (optimistisch) und
//! hinterlegen hier die zugehörige Persistenz-Operation. Die Einbettung
//! leert die Queue und ruft das [`PersistenceGateway`](super::PersistenceGateway)
//! auf; ein Fehlschlag wird nur geloggt, nie lokal zurückgerollt.

/// Eine ausstehende Persistenz-Operation, referenziert per Entity-ID.
///
/// Create/Update tragen keine Snapshots: beim Flush wird der aktuelle
/// Store-Stand gelesen, womit aufeinanderfolgende Updates desselben
/// Entities automatisch zusammenfallen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOp {
    CreateMeasurement { id: u64 },
    UpdateMeasurement { id: u64 },
    DeleteMeasurement { id: u64 },
    CreateAnnotation { id: u64 },
    UpdateAnnotation { id: u64 },
    DeleteAnnotation { id: u64 },
    CreateReply { annotation_id: u64, reply_id: u64 },
    DeleteReply { annotation_id: u64, reply_id: u64 },
    CreateSavedView { id: u64 },
    UpdateSavedView { id: u64 },
    DeleteSavedView { id: u64 },
}

/// Geordnete Queue ausstehender Persistenz-Operationen.
#[derive(Debug, Default)]
pub struct SyncOutbox {
    ops: Vec<PersistOp>,
}

impl SyncOutbox {
    /// Erstellt eine leere Queue.
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Hängt eine Operation an. Direkt aufeinanderfolgende Duplikate
    /// (z.B. Punkt-Updates derselben Messung) werden zusammengefasst.
    pub fn push(&mut self, op: PersistOp) {
        if self.ops.last() == Some(&op) {
            return;
        }
        self.ops.push(op);
    }

    /// Entnimmt alle ausstehenden Operationen in Reihenfolge.
    pub fn drain(&mut self) -> Vec<PersistOp> {
        std::mem::take(&mut self.ops)
    }

    /// Anzahl ausstehender Operationen.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Gibt `true` zurück, wenn nichts aussteht.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Read-only Sicht auf die ausstehenden Operationen.
    pub fn ops(&self) -> &[PersistOp] {
        &self.ops
    }
}
