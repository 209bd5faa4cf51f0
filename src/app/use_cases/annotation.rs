//! Use-Cases für Annotationen: CRUD, Status und Reply-Threads.

use glam::Vec3;

use crate::app::AppState;
use crate::core::{Annotation, AnnotationKind, AnnotationReply, AnnotationStatus};
use crate::sync::PersistOp;

use super::selection;

/// Legt eine Annotation am Weltpunkt an und gibt den Snapshot zurück.
pub fn create(
    state: &mut AppState,
    kind: AnnotationKind,
    world_pos: Vec3,
    content: String,
) -> Annotation {
    let id = state.store.alloc_id();
    let annotation = Annotation::new(
        id,
        kind,
        world_pos,
        content,
        state.session.user_id.clone(),
        state.session.now_ms,
    );
    state.store.insert_annotation(annotation.clone());
    state.outbox.push(PersistOp::CreateAnnotation { id });
    log::info!("Annotation {id} ({kind:?}) angelegt");
    annotation
}

/// Setzt den Inhalt einer Annotation.
pub fn set_content(state: &mut AppState, id: u64, content: String) {
    let Some(annotation) = state.store.annotations.get_mut(&id) else {
        log::debug!("SetAnnotationContent ignoriert: Annotation {id} unbekannt");
        return;
    };
    annotation.content = content;
    state.outbox.push(PersistOp::UpdateAnnotation { id });
}

/// Setzt den Status. Alle Übergänge sind zulässig (flache Menge).
pub fn set_status(state: &mut AppState, id: u64, status: AnnotationStatus) {
    let Some(annotation) = state.store.annotations.get_mut(&id) else {
        log::debug!("SetAnnotationStatus ignoriert: Annotation {id} unbekannt");
        return;
    };
    annotation.status = status;
    state.outbox.push(PersistOp::UpdateAnnotation { id });
}

/// Verschiebt den Ankerpunkt einer Annotation.
pub fn move_to(state: &mut AppState, id: u64, world_pos: Vec3) {
    let Some(annotation) = state.store.annotations.get_mut(&id) else {
        return;
    };
    annotation.position = world_pos;
    state.store.mark_markers_dirty();
    state.store.ensure_marker_index();
    state.outbox.push(PersistOp::UpdateAnnotation { id });
}

/// Hängt eine Antwort an den Thread an.
pub fn add_reply(
    state: &mut AppState,
    annotation_id: u64,
    content: String,
) -> Option<AnnotationReply> {
    if !state.store.annotations.contains_key(&annotation_id) {
        log::debug!("AddAnnotationReply ignoriert: Annotation {annotation_id} unbekannt");
        return None;
    }
    let reply_id = state.store.alloc_id();
    let reply = AnnotationReply {
        id: reply_id,
        content,
        created_by: state.session.user_id.clone(),
        created_at: state.session.now_ms,
    };
    if let Some(annotation) = state.store.annotations.get_mut(&annotation_id) {
        annotation.replies.push(reply.clone());
    }
    state.outbox.push(PersistOp::CreateReply {
        annotation_id,
        reply_id,
    });
    Some(reply)
}

/// Entfernt eine Antwort aus dem Thread.
pub fn remove_reply(state: &mut AppState, annotation_id: u64, reply_id: u64) {
    let Some(annotation) = state.store.annotations.get_mut(&annotation_id) else {
        return;
    };
    if annotation.remove_reply(reply_id).is_some() {
        state.outbox.push(PersistOp::DeleteReply {
            annotation_id,
            reply_id,
        });
    }
}

/// Löscht eine Annotation inklusive referenzierender Selektion/Drags.
pub fn delete(state: &mut AppState, id: u64) -> Option<Annotation> {
    selection::clear_interaction_for_annotation(state, id);
    let removed = state.store.remove_annotation(id)?;
    state.outbox.push(PersistOp::DeleteAnnotation { id });
    log::info!("Annotation {id} gelöscht");
    Some(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::InteractionMode;

    #[test]
    fn create_assigns_session_creator() {
        let mut state = AppState::new();
        state.session.user_id = "user-7".into();
        state.session.now_ms = 1234.0;

        let a = create(&mut state, AnnotationKind::Pin, Vec3::ONE, "Pin".into());

        assert_eq!(a.created_by, "user-7");
        assert_eq!(a.created_at, 1234.0);
        assert_eq!(state.store.annotation_count(), 1);
    }

    #[test]
    fn status_transitions_are_unconstrained() {
        let mut state = AppState::new();
        let id = create(&mut state, AnnotationKind::Comment, Vec3::ZERO, "c".into()).id;

        // Beliebige Sprünge, auch "rückwärts"
        set_status(&mut state, id, AnnotationStatus::Archived);
        set_status(&mut state, id, AnnotationStatus::Open);
        set_status(&mut state, id, AnnotationStatus::Resolved);
        set_status(&mut state, id, AnnotationStatus::Reopened);

        assert_eq!(
            state.store.annotations[&id].status,
            AnnotationStatus::Reopened
        );
    }

    #[test]
    fn replies_are_ordered_and_persisted() {
        let mut state = AppState::new();
        let id = create(&mut state, AnnotationKind::Comment, Vec3::ZERO, "c".into()).id;

        let first = add_reply(&mut state, id, "eins".into()).expect("Reply erwartet");
        let second = add_reply(&mut state, id, "zwei".into()).expect("Reply erwartet");
        assert!(second.id > first.id);

        remove_reply(&mut state, id, first.id);
        let contents: Vec<&str> = state.store.annotations[&id]
            .replies
            .iter()
            .map(|r| r.content.as_str())
            .collect();
        assert_eq!(contents, vec!["zwei"]);
    }

    #[test]
    fn delete_clears_referencing_selection() {
        let mut state = AppState::new();
        let id = create(&mut state, AnnotationKind::Pin, Vec3::ZERO, String::new()).id;
        state.interaction.mode = InteractionMode::AnnotationSelected { annotation_id: id };

        delete(&mut state, id);

        assert_eq!(state.interaction.mode, InteractionMode::Idle);
        assert_eq!(state.store.annotation_count(), 0);
    }
}
