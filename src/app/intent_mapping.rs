//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ScanLoaded { bounds } => vec![AppCommand::LoadScan { bounds }],
        AppIntent::ScanCleared => vec![AppCommand::ClearScan],

        AppIntent::SetToolRequested { tool } => {
            let mut commands = Vec::new();

            // Werkzeugwechsel bricht eine laufende Messung anderer Art ab;
            // erneutes Aktivieren desselben Mess-Werkzeugs behält sie.
            let keeps_pending = matches!(
                (tool.measurement_kind(), state.pending_measurement.as_ref()),
                (Some(kind), Some(pending)) if pending.kind == kind
            );
            if state.pending_measurement.is_some() && !keeps_pending {
                commands.push(AppCommand::CancelMeasurement);
            }

            commands.push(AppCommand::SetTool { tool });

            if let Some(kind) = tool.measurement_kind() {
                if !keeps_pending {
                    commands.push(AppCommand::StartMeasurement { kind });
                }
            }

            commands
        }

        AppIntent::MeasurePointPlaced { world_pos } => {
            vec![AppCommand::AddMeasurementPoint { world_pos }]
        }
        AppIntent::UndoLastPointRequested => vec![AppCommand::UndoLastPoint],
        AppIntent::FinalizeMeasurementRequested => vec![AppCommand::FinalizeMeasurement],
        AppIntent::CancelMeasurementRequested => vec![AppCommand::CancelMeasurement],

        AppIntent::AnnotationPlaced {
            kind,
            world_pos,
            content,
        } => vec![AppCommand::CreateAnnotation {
            kind,
            world_pos,
            content,
        }],

        AppIntent::MarkerPickRequested { marker } => vec![AppCommand::SelectMarker { marker }],
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearInteraction],

        AppIntent::MarkerDragStarted { marker } => vec![AppCommand::BeginMarkerDrag { marker }],
        AppIntent::MarkerDragMoved { world_pos } => {
            vec![AppCommand::UpdateMarkerDrag { world_pos }]
        }
        AppIntent::MarkerDragEnded { world_pos } => vec![AppCommand::EndMarkerDrag { world_pos }],

        AppIntent::MeasurementLabelEdited { id, label } => {
            vec![AppCommand::SetMeasurementLabel { id, label }]
        }
        AppIntent::MeasurementPointMoved {
            id,
            index,
            world_pos,
        } => vec![AppCommand::MoveMeasurementPoint {
            id,
            index,
            world_pos,
        }],
        AppIntent::SegmentRemoveRequested { id, segment_index } => {
            vec![AppCommand::RemoveSegment { id, segment_index }]
        }
        AppIntent::DeleteMeasurementRequested { id } => {
            vec![AppCommand::DeleteMeasurement { id }]
        }

        AppIntent::AnnotationContentEdited { id, content } => {
            vec![AppCommand::SetAnnotationContent { id, content }]
        }
        AppIntent::AnnotationStatusChanged { id, status } => {
            vec![AppCommand::SetAnnotationStatus { id, status }]
        }
        AppIntent::AnnotationMoved { id, world_pos } => {
            vec![AppCommand::MoveAnnotation { id, world_pos }]
        }
        AppIntent::AnnotationReplyAdded {
            annotation_id,
            content,
        } => vec![AppCommand::AddAnnotationReply {
            annotation_id,
            content,
        }],
        AppIntent::AnnotationReplyRemoved {
            annotation_id,
            reply_id,
        } => vec![AppCommand::RemoveAnnotationReply {
            annotation_id,
            reply_id,
        }],
        AppIntent::DeleteAnnotationRequested { id } => vec![AppCommand::DeleteAnnotation { id }],

        AppIntent::SavedViewCreateRequested { name } => {
            vec![AppCommand::CreateSavedView { name }]
        }
        AppIntent::SavedViewRenameRequested { id, name } => {
            vec![AppCommand::RenameSavedView { id, name }]
        }
        AppIntent::SavedViewDeleteRequested { id } => vec![AppCommand::DeleteSavedView { id }],
        AppIntent::SavedViewReorderRequested { id, new_index } => {
            vec![AppCommand::ReorderSavedView { id, new_index }]
        }
        AppIntent::SavedViewApplyRequested { id } => vec![AppCommand::ApplySavedView { id }],

        AppIntent::ViewSnapRequested { axis } => vec![AppCommand::SnapViewToAxis { axis }],
        AppIntent::FrameSceneRequested => vec![AppCommand::FrameScene],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPoseReported { camera } => vec![AppCommand::SetCameraPose { camera }],

        AppIntent::GizmoToggled { enabled } => vec![AppCommand::SetGizmoEnabled { enabled }],
        AppIntent::GizmoModeChanged { mode } => vec![AppCommand::SetGizmoMode { mode }],
        AppIntent::GizmoSnapChanged { active } => vec![AppCommand::SetGizmoSnap { active }],
        AppIntent::GizmoDragStarted => vec![AppCommand::BeginGizmoDrag],
        AppIntent::GizmoTransformUpdated {
            position,
            rotation,
            scale,
        } => vec![AppCommand::ApplyGizmoTransform {
            position,
            rotation,
            scale,
        }],
        AppIntent::GizmoDragEnded => vec![AppCommand::EndGizmoDrag],

        AppIntent::RemoteChangeReceived { change } => {
            vec![AppCommand::ApplyRemoteChange { change }]
        }
        AppIntent::PersistFailureReported { description } => {
            vec![AppCommand::LogPersistFailure { description }]
        }

        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
    }
}
