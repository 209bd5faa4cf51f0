//! Tastatur-Routing: Abbrechen, Finalisieren, Snap-Modifier.

use crate::app::state::InteractionMode;
use crate::app::AppIntent;

use super::{InputContext, InputState, Key, Modifiers};

impl InputState {
    /// Wertet Tasten-Eingaben aus.
    pub(crate) fn handle_key(
        &mut self,
        ctx: &InputContext,
        key: Key,
        events: &mut Vec<AppIntent>,
    ) {
        match key {
            Key::Escape => {
                // Escape bricht zuerst die laufende Messung ab, sonst
                // Selektion/Drag
                if ctx.state.pending_measurement.is_some() {
                    events.push(AppIntent::CancelMeasurementRequested);
                } else {
                    if self.marker_dragging {
                        self.marker_dragging = false;
                        self.pointer_down = None;
                    }
                    events.push(AppIntent::ClearSelectionRequested);
                }
            }
            Key::Enter => {
                if ctx.state.pending_measurement.is_some() {
                    events.push(AppIntent::FinalizeMeasurementRequested);
                }
            }
            Key::Backspace => {
                if ctx.state.pending_measurement.is_some() {
                    events.push(AppIntent::UndoLastPointRequested);
                }
            }
            Key::Delete => {
                if let InteractionMode::AnnotationSelected { annotation_id } =
                    ctx.state.interaction.mode
                {
                    events.push(AppIntent::DeleteAnnotationRequested { id: annotation_id });
                }
            }
        }
    }

    /// Meldet Modifier-Änderungen (Gizmo-Snap an Ctrl gebunden).
    pub(crate) fn handle_modifiers(&mut self, modifiers: Modifiers, events: &mut Vec<AppIntent>) {
        if modifiers.ctrl != self.snap_modifier_down {
            self.snap_modifier_down = modifiers.ctrl;
            events.push(AppIntent::GizmoSnapChanged {
                active: modifiers.ctrl,
            });
        }
    }
}
