//! Change-Notifications des Persistenz-Dienstes.
//!
//! Die Einbettung abonniert Änderungen pro Scan-ID und reicht sie als
//! [`RemoteChange`] in den Core. Eingefaltet wird nur, was lokal noch
//! nicht existiert — eigene Schreibvorgänge kommen als Echo zurück und
//! dürfen den lokalen Stand nicht doppeln.

use serde::{Deserialize, Serialize};

use crate::core::{Annotation, AnnotationReply, Measurement, SavedView};

/// Eine eingehende Änderung aus dem Persistenz-Dienst.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum RemoteChange {
    MeasurementInserted { measurement: Measurement },
    MeasurementUpdated { measurement: Measurement },
    MeasurementDeleted { id: u64 },
    AnnotationInserted { annotation: Annotation },
    AnnotationUpdated { annotation: Annotation },
    AnnotationDeleted { id: u64 },
    ReplyAdded { annotation_id: u64, reply: AnnotationReply },
    ReplyRemoved { annotation_id: u64, reply_id: u64 },
    SavedViewInserted { view: SavedView },
    SavedViewUpdated { view: SavedView },
    SavedViewDeleted { id: u64 },
}

/// Dekodiert eine Change-Notification aus ihrem JSON-Payload.
pub fn decode_remote_change(payload: &str) -> anyhow::Result<RemoteChange> {
    Ok(serde_json::from_str(payload)?)
}
