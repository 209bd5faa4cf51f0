//! Annotationen: im Raum verankerte Kommentar-Threads.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Art einer Annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationKind {
    /// Einfacher Pin ohne Diskussion
    Pin,
    /// Kommentar-Thread
    Comment,
    /// Markierung (z.B. Mangel-Kennzeichnung)
    Markup,
}

/// Bearbeitungsstatus einer Annotation.
///
/// Flache Menge: jeder Status ist von jedem anderen aus erreichbar,
/// es gibt keinen erzwungenen Workflow-Graphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Reopened,
    Archived,
}

/// Antwort innerhalb eines Annotation-Threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotationReply {
    /// Reply-ID (aus demselben ID-Raum wie Entities)
    pub id: u64,
    /// Text der Antwort
    pub content: String,
    /// Ersteller
    pub created_by: String,
    /// Erstellungszeitpunkt (Epoch-Millisekunden)
    pub created_at: f64,
}

/// Eine im Raum verankerte Annotation mit geordnetem Reply-Thread.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Annotation {
    /// Entity-ID
    pub id: u64,
    /// Pin, Kommentar oder Markup
    pub kind: AnnotationKind,
    /// Ankerpunkt in Welt-Koordinaten
    pub position: Vec3,
    /// Inhalt der Annotation
    pub content: String,
    /// Bearbeitungsstatus
    pub status: AnnotationStatus,
    /// Ersteller
    pub created_by: String,
    /// Erstellungszeitpunkt (Epoch-Millisekunden)
    pub created_at: f64,
    /// Antworten in Erstellungsreihenfolge
    pub replies: Vec<AnnotationReply>,
}

impl Annotation {
    /// Erstellt eine Annotation mit leerem Reply-Thread und Status `Open`.
    pub fn new(
        id: u64,
        kind: AnnotationKind,
        position: Vec3,
        content: String,
        created_by: String,
        created_at: f64,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            content,
            status: AnnotationStatus::Open,
            created_by,
            created_at,
            replies: Vec::new(),
        }
    }

    /// Entfernt eine Antwort anhand ihrer ID.
    pub fn remove_reply(&mut self, reply_id: u64) -> Option<AnnotationReply> {
        let index = self.replies.iter().position(|r| r.id == reply_id)?;
        Some(self.replies.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_annotation_starts_open_without_replies() {
        let a = Annotation::new(
            1,
            AnnotationKind::Comment,
            Vec3::ONE,
            "Riss in der Wand".into(),
            "user-a".into(),
            0.0,
        );
        assert_eq!(a.status, AnnotationStatus::Open);
        assert!(a.replies.is_empty());
    }

    #[test]
    fn remove_reply_keeps_order_of_remaining() {
        let mut a = Annotation::new(
            1,
            AnnotationKind::Comment,
            Vec3::ZERO,
            "Thread".into(),
            "user-a".into(),
            0.0,
        );
        for id in [10, 11, 12] {
            a.replies.push(AnnotationReply {
                id,
                content: format!("reply {id}"),
                created_by: "user-b".into(),
                created_at: 0.0,
            });
        }

        assert!(a.remove_reply(11).is_some());
        let ids: Vec<u64> = a.replies.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![10, 12]);
        assert!(a.remove_reply(99).is_none());
    }
}
