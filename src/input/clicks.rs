//! Klick-Routing: Platzierung und Selektion nach dem Drag-Filter.

use glam::Vec2;

use crate::app::AppIntent;

use super::{InputContext, InputState, PointerButton, PointerDownState};

impl InputState {
    /// Merkt sich Position und Drag-Kandidaten beim Pointer-Down.
    pub(crate) fn handle_pointer_down(
        &mut self,
        ctx: &InputContext,
        pos_px: Vec2,
        button: PointerButton,
    ) {
        if button != PointerButton::Primary {
            return;
        }

        // Marker unter dem Cursor als Drag-Kandidat merken. Ein Klick
        // platziert weiterhin (Werkzeug-Routing in route_click); erst
        // eine Drag-Geste über dem Marker startet den Marker-Drag.
        let marker = self.marker_under_cursor(ctx, pos_px);

        self.pointer_down = Some(PointerDownState { pos_px, marker });
        self.drag_exceeded = false;
    }

    /// Wertet den Pointer-Up aus: Klick (Platzierung/Selektion) oder
    /// Abschluss eines Drags. Orbit-Drags werden komplett ignoriert.
    pub(crate) fn handle_pointer_up(
        &mut self,
        ctx: &InputContext,
        pos_px: Vec2,
        button: PointerButton,
        events: &mut Vec<AppIntent>,
    ) {
        if button != PointerButton::Primary {
            return;
        }
        let Some(_down) = self.pointer_down.take() else {
            return;
        };

        if self.marker_dragging {
            self.finish_marker_drag(ctx, pos_px, events);
        } else if !self.drag_exceeded {
            self.route_click(ctx, pos_px, events);
        }
        // drag_exceeded ohne Marker: Kamera-Orbit, keine Intents

        self.drag_exceeded = false;
    }

    /// Übersetzt einen überlebenden Klick in Platzierung oder Selektion.
    fn route_click(&mut self, ctx: &InputContext, pos_px: Vec2, events: &mut Vec<AppIntent>) {
        let tool = ctx.state.interaction.active_tool;
        let ndc = ctx.to_ndc(pos_px);

        if tool.measurement_kind().is_some() {
            // Platzierung: Scan-Oberfläche, sonst generischer Raycast
            if let Some(hit) = ctx.picker().pick_or_fallback(&ctx.state.view.camera, ndc) {
                events.push(AppIntent::MeasurePointPlaced {
                    world_pos: hit.point,
                });
            }
            return;
        }

        if let Some(kind) = tool.annotation_kind() {
            if let Some(hit) = ctx.picker().pick_or_fallback(&ctx.state.view.camera, ndc) {
                events.push(AppIntent::AnnotationPlaced {
                    kind,
                    world_pos: hit.point,
                    content: String::new(),
                });
            }
            return;
        }

        // Select-Werkzeug: Marker treffen oder Selektion aufheben
        match self.marker_under_cursor(ctx, pos_px) {
            Some(marker) => events.push(AppIntent::MarkerPickRequested { marker }),
            None => events.push(AppIntent::ClearSelectionRequested),
        }
    }
}
