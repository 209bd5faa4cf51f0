//! Gespeicherte Ansichten (Kamera-Lesezeichen) mit dichter Sortierung.

use serde::{Deserialize, Serialize};

use super::camera::ViewCamera;

/// Eine benannte, gespeicherte Kamera-Ansicht.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedView {
    /// Entity-ID
    pub id: u64,
    /// Anzeigename
    pub name: String,
    /// Gespeicherte Kamera-Pose
    pub camera: ViewCamera,
    /// Listenposition; dicht und nullbasiert, wird bei jeder
    /// Mengenänderung neu vergeben
    pub sort_order: u32,
    /// Ersteller
    pub created_by: String,
    /// Erstellungszeitpunkt (Epoch-Millisekunden)
    pub created_at: f64,
}

/// Vergibt `sort_order` neu: dicht, nullbasiert, in Listenreihenfolge.
pub fn renumber_sort_orders(views: &mut [SavedView]) {
    for (index, view) in views.iter_mut().enumerate() {
        view.sort_order = index as u32;
    }
}
