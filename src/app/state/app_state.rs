//! Application State — zentrale Datenhaltung.

use crate::app::CommandLog;
use crate::core::PendingMeasurement;
use crate::shared::EditorOptions;
use crate::sync::SyncOutbox;

use super::{EntityStore, InteractionState, SceneState, ViewState};

/// Identität und Zeitbasis der lokalen Session.
///
/// Der Core liest keine Uhren; `now_ms` wird von der Einbettung vor
/// der Event-Verarbeitung aktualisiert.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionContext {
    /// User-ID des lokalen Akteurs (für `created_by`)
    pub user_id: String,
    /// Aktuelle Zeit in Epoch-Millisekunden
    pub now_ms: f64,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self {
            user_id: "local".into(),
            now_ms: 0.0,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Alle persistierbaren Entities
    pub store: EntityStore,
    /// Laufende, noch nicht finalisierte Messung (höchstens eine)
    pub pending_measurement: Option<PendingMeasurement>,
    /// Werkzeug-, Selektions- und Gizmo-Zustand
    pub interaction: InteractionState,
    /// Transform und Metadaten des geladenen Scans
    pub scene: SceneState,
    /// Kamera und Viewport
    pub view: ViewState,
    /// Lokale Session (User-ID, Zeitbasis)
    pub session: SessionContext,
    /// Laufzeit-Optionen
    pub options: EditorOptions,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Ausstehende Persistenz-Operationen (optimistisch, ohne Rollback)
    pub outbox: SyncOutbox,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            store: EntityStore::new(),
            pending_measurement: None,
            interaction: InteractionState::new(),
            scene: SceneState::new(),
            view: ViewState::new(),
            session: SessionContext::default(),
            options: EditorOptions::default(),
            command_log: CommandLog::new(),
            outbox: SyncOutbox::new(),
        }
    }

    /// Gibt die Anzahl der Messungen zurück (für UI-Anzeige)
    pub fn measurement_count(&self) -> usize {
        self.store.measurement_count()
    }

    /// Gibt die Anzahl der Annotationen zurück (für UI-Anzeige)
    pub fn annotation_count(&self) -> usize {
        self.store.annotation_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
