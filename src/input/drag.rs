//! Drag-Lifecycle: Klick/Drag-Schwelle, Live-Re-Pick, Snap-on-Release.

use glam::Vec2;

use crate::app::AppIntent;

use super::{InputContext, InputState};

impl InputState {
    /// Verarbeitet Pointer-Bewegung: Schwellen-Erkennung und Live-Updates.
    pub(crate) fn handle_pointer_moved(
        &mut self,
        ctx: &InputContext,
        pos_px: Vec2,
        events: &mut Vec<AppIntent>,
    ) {
        let Some(down) = self.pointer_down else {
            return;
        };

        if !self.drag_exceeded {
            let moved = (pos_px - down.pos_px).length();
            if moved <= ctx.state.options.click_drag_threshold_px {
                return;
            }
            // Schwelle überschritten: ab jetzt kein Platzierungs-Klick mehr
            self.drag_exceeded = true;

            if let Some(marker) = down.marker {
                self.marker_dragging = true;
                events.push(AppIntent::MarkerDragStarted { marker });
            }
            // Ohne Marker unter dem Cursor: Kamera-Orbit, Core unbeteiligt
        }

        if self.marker_dragging {
            // Live-Feedback: pro Event neu picken; die autoritative
            // Position entsteht erst beim Release
            if let Some(hit) = ctx
                .picker()
                .pick(&ctx.state.view.camera, ctx.to_ndc(pos_px))
            {
                events.push(AppIntent::MarkerDragMoved {
                    world_pos: hit.point,
                });
            }
        }
    }

    /// Schließt einen Marker-Drag ab: finaler Re-Pick von der
    /// End-Position (Snap-on-Release), `None` bei Fehlschuss.
    pub(crate) fn finish_marker_drag(
        &mut self,
        ctx: &InputContext,
        pos_px: Vec2,
        events: &mut Vec<AppIntent>,
    ) {
        let final_pos = ctx
            .picker()
            .pick(&ctx.state.view.camera, ctx.to_ndc(pos_px))
            .map(|hit| hit.point);
        events.push(AppIntent::MarkerDragEnded {
            world_pos: final_pos,
        });
        self.marker_dragging = false;
    }
}
