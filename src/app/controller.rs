//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Szene ===
            AppCommand::LoadScan { bounds } => handlers::view::load_scan(state, bounds),
            AppCommand::ClearScan => handlers::view::clear_scan(state),

            // === Werkzeug & Selektion ===
            AppCommand::SetTool { tool } => handlers::selection::set_tool(state, tool),
            AppCommand::SelectMarker { marker } => {
                handlers::selection::select_marker(state, marker)
            }
            AppCommand::ClearInteraction => handlers::selection::clear(state),
            AppCommand::BeginMarkerDrag { marker } => {
                handlers::selection::begin_drag(state, marker)
            }
            AppCommand::UpdateMarkerDrag { world_pos } => {
                handlers::selection::update_drag(state, world_pos)
            }
            AppCommand::EndMarkerDrag { world_pos } => {
                handlers::selection::end_drag(state, world_pos)
            }

            // === Messungen ===
            AppCommand::StartMeasurement { kind } => handlers::measurement::start(state, kind),
            AppCommand::AddMeasurementPoint { world_pos } => {
                handlers::measurement::add_point(state, world_pos)
            }
            AppCommand::UndoLastPoint => handlers::measurement::undo_last_point(state),
            AppCommand::FinalizeMeasurement => handlers::measurement::finalize(state),
            AppCommand::CancelMeasurement => handlers::measurement::cancel(state),
            AppCommand::SetMeasurementLabel { id, label } => {
                handlers::measurement::set_label(state, id, label)
            }
            AppCommand::MoveMeasurementPoint {
                id,
                index,
                world_pos,
            } => handlers::measurement::move_point(state, id, index, world_pos),
            AppCommand::RemoveSegment { id, segment_index } => {
                handlers::measurement::remove_segment(state, id, segment_index)
            }
            AppCommand::DeleteMeasurement { id } => handlers::measurement::delete(state, id),

            // === Annotationen ===
            AppCommand::CreateAnnotation {
                kind,
                world_pos,
                content,
            } => handlers::annotation::create(state, kind, world_pos, content),
            AppCommand::SetAnnotationContent { id, content } => {
                handlers::annotation::set_content(state, id, content)
            }
            AppCommand::SetAnnotationStatus { id, status } => {
                handlers::annotation::set_status(state, id, status)
            }
            AppCommand::MoveAnnotation { id, world_pos } => {
                handlers::annotation::move_to(state, id, world_pos)
            }
            AppCommand::AddAnnotationReply {
                annotation_id,
                content,
            } => handlers::annotation::add_reply(state, annotation_id, content),
            AppCommand::RemoveAnnotationReply {
                annotation_id,
                reply_id,
            } => handlers::annotation::remove_reply(state, annotation_id, reply_id),
            AppCommand::DeleteAnnotation { id } => handlers::annotation::delete(state, id),

            // === Gespeicherte Ansichten ===
            AppCommand::CreateSavedView { name } => handlers::saved_view::create(state, name),
            AppCommand::RenameSavedView { id, name } => {
                handlers::saved_view::rename(state, id, name)
            }
            AppCommand::DeleteSavedView { id } => handlers::saved_view::delete(state, id),
            AppCommand::ReorderSavedView { id, new_index } => {
                handlers::saved_view::reorder(state, id, new_index)
            }
            AppCommand::ApplySavedView { id } => handlers::saved_view::apply(state, id),

            // === Kamera & Viewport ===
            AppCommand::SnapViewToAxis { axis } => handlers::view::snap_to_axis(state, axis),
            AppCommand::FrameScene => handlers::view::frame_scene(state),
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::SetCameraPose { camera } => handlers::view::set_camera_pose(state, camera),

            // === Gizmo ===
            AppCommand::SetGizmoEnabled { enabled } => handlers::gizmo::set_enabled(state, enabled),
            AppCommand::SetGizmoMode { mode } => handlers::gizmo::set_mode(state, mode),
            AppCommand::SetGizmoSnap { active } => handlers::gizmo::set_snap(state, active),
            AppCommand::BeginGizmoDrag => handlers::gizmo::begin_drag(state),
            AppCommand::ApplyGizmoTransform {
                position,
                rotation,
                scale,
            } => handlers::gizmo::apply_transform(state, position, rotation, scale),
            AppCommand::EndGizmoDrag => handlers::gizmo::end_drag(state),

            // === Persistenz-Rand ===
            AppCommand::ApplyRemoteChange { change } => {
                handlers::sync::apply_remote_change(state, change)
            }
            AppCommand::LogPersistFailure { description } => {
                handlers::sync::log_persist_failure(&description)
            }

            // === Optionen ===
            AppCommand::ApplyOptions { options } => handlers::options::apply(state, options),
            AppCommand::ResetOptions => handlers::options::reset(state),
        }

        Ok(())
    }
}
