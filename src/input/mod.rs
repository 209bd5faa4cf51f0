//! Input-Layer: übersetzt rohe Pointer-/Tastatur-Events in `AppIntent`s.
//!
//! Die Einbettung speist alle Low-Level-Events über eine einzige
//! Dispatch-Funktion ein ([`InputState::process`]); Rückgabekanal ist
//! die Intent-Liste. Der Input-Layer hält nur Gesten-Zustand
//! (Pointer-Down-Position, Drag-Schwelle) — alles Fachliche liegt im
//! AppState.

mod clicks;
mod drag;
mod keyboard;

use glam::Vec2;

use crate::app::{AppIntent, AppState};
use crate::core::MarkerRef;
use crate::scene::{SceneRaycaster, SurfacePicker};

/// Taste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Modifier-Tasten eines Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

/// Tasten, die der Core interpretiert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Enter,
    Backspace,
    Delete,
}

/// Rohe Input-Events aus der Einbettung (Screen-Koordinaten in Pixeln).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown {
        pos_px: Vec2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    PointerMoved {
        pos_px: Vec2,
        modifiers: Modifiers,
    },
    PointerUp {
        pos_px: Vec2,
        button: PointerButton,
        modifiers: Modifiers,
    },
    KeyDown {
        key: Key,
        modifiers: Modifiers,
    },
    /// Modifier-Änderung ohne andere Eingabe (für Gizmo-Snap)
    ModifiersChanged { modifiers: Modifiers },
}

/// Read-only Kontext für die Event-Verarbeitung.
pub struct InputContext<'a> {
    /// Aktueller App-Zustand
    pub state: &'a AppState,
    /// Raycaster der Render-Engine
    pub raycaster: &'a dyn SceneRaycaster,
}

impl<'a> InputContext<'a> {
    /// Picker über dem Raycaster mit aktuellem Scan-Status.
    pub(crate) fn picker(&self) -> SurfacePicker<'a> {
        SurfacePicker::new(self.raycaster, self.state.scene.scan_loaded)
    }

    /// Normalisiert eine Pixel-Position auf `[0, 1]²`.
    pub(crate) fn to_ndc(&self, pos_px: Vec2) -> Vec2 {
        let [w, h] = self.state.view.viewport_size;
        Vec2::new(pos_px.x / w.max(1.0), pos_px.y / h.max(1.0))
    }
}

/// Zustand eines aktiven Pointer-Downs.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PointerDownState {
    /// Position beim Pointer-Down in Pixeln
    pub pos_px: Vec2,
    /// Marker unter dem Cursor beim Pointer-Down (Drag-Kandidat)
    pub marker: Option<MarkerRef>,
}

/// Gesten-Zustand des Input-Layers.
#[derive(Debug, Default)]
pub struct InputState {
    pub(crate) pointer_down: Option<PointerDownState>,
    /// Bewegung seit Pointer-Down hat die Klick-Schwelle überschritten
    pub(crate) drag_exceeded: bool,
    /// Ein Marker-Drag läuft (lokales Wissen, unabhängig vom AppState)
    pub(crate) marker_dragging: bool,
    pub(crate) snap_modifier_down: bool,
}

impl InputState {
    /// Erstellt einen leeren Gesten-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verarbeitet ein Event und hängt resultierende Intents an `events` an.
    pub fn process(&mut self, ctx: &InputContext, event: InputEvent, events: &mut Vec<AppIntent>) {
        match event {
            InputEvent::PointerDown {
                pos_px,
                button,
                modifiers: _,
            } => self.handle_pointer_down(ctx, pos_px, button),
            InputEvent::PointerMoved { pos_px, .. } => {
                self.handle_pointer_moved(ctx, pos_px, events)
            }
            InputEvent::PointerUp {
                pos_px, button, ..
            } => self.handle_pointer_up(ctx, pos_px, button, events),
            InputEvent::KeyDown { key, .. } => self.handle_key(ctx, key, events),
            InputEvent::ModifiersChanged { modifiers } => {
                self.handle_modifiers(modifiers, events)
            }
        }
    }

    /// Sucht den Marker unter dem Cursor (Oberflächen-Pick plus
    /// Radius-Abfrage gegen den Marker-Index).
    pub(crate) fn marker_under_cursor(
        &self,
        ctx: &InputContext,
        pos_px: Vec2,
    ) -> Option<MarkerRef> {
        let hit = ctx
            .picker()
            .pick(&ctx.state.view.camera, ctx.to_ndc(pos_px))?;
        ctx.state
            .store
            .marker_index()
            .nearest(hit.point)
            .filter(|m| m.distance <= ctx.state.options.marker_pick_radius)
            .map(|m| m.marker)
    }
}
