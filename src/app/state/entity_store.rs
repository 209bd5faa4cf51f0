//! Entity Store: alleiniger Eigentümer aller Mess-, Annotations- und
//! Ansichts-Daten. Die Render-Schicht hält nur abgeleitete Darstellungen.

use indexmap::IndexMap;

use crate::core::saved_view::renumber_sort_orders;
use crate::core::{Annotation, MarkerIndex, Measurement, SavedView};

/// Container für alle persistierbaren Entities eines Scans.
///
/// IDs werden lokal fortlaufend vergeben; Entities aus Remote-Changes
/// bringen ihre ID mit und heben den Zähler über das Maximum.
#[derive(Debug)]
pub struct EntityStore {
    /// Alle Messungen, indexiert nach ID (Einfüge-Reihenfolge stabil)
    pub measurements: IndexMap<u64, Measurement>,
    /// Alle Annotationen, indexiert nach ID
    pub annotations: IndexMap<u64, Annotation>,
    /// Gespeicherte Ansichten in `sort_order`-Reihenfolge
    pub saved_views: Vec<SavedView>,
    next_id: u64,
    marker_index: MarkerIndex,
    marker_index_dirty: bool,
}

impl EntityStore {
    /// Erstellt einen leeren Store.
    pub fn new() -> Self {
        Self {
            measurements: IndexMap::new(),
            annotations: IndexMap::new(),
            saved_views: Vec::new(),
            next_id: 1,
            marker_index: MarkerIndex::empty(),
            marker_index_dirty: false,
        }
    }

    /// Vergibt die nächste lokale Entity-ID.
    pub fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Hebt den ID-Zähler über eine extern vergebene ID.
    pub fn observe_id(&mut self, id: u64) {
        if id >= self.next_id {
            self.next_id = id + 1;
        }
    }

    /// Fügt eine Messung ein (ersetzt eine vorhandene mit gleicher ID).
    pub fn insert_measurement(&mut self, measurement: Measurement) {
        self.observe_id(measurement.id);
        self.measurements.insert(measurement.id, measurement);
        self.rebuild_marker_index();
    }

    /// Entfernt eine Messung.
    pub fn remove_measurement(&mut self, id: u64) -> Option<Measurement> {
        let removed = self.measurements.shift_remove(&id);
        if removed.is_some() {
            self.rebuild_marker_index();
        }
        removed
    }

    /// Fügt eine Annotation ein (ersetzt eine vorhandene mit gleicher ID).
    pub fn insert_annotation(&mut self, annotation: Annotation) {
        self.observe_id(annotation.id);
        self.annotations.insert(annotation.id, annotation);
        self.rebuild_marker_index();
    }

    /// Entfernt eine Annotation.
    pub fn remove_annotation(&mut self, id: u64) -> Option<Annotation> {
        let removed = self.annotations.shift_remove(&id);
        if removed.is_some() {
            self.rebuild_marker_index();
        }
        removed
    }

    /// Fügt eine Ansicht an Position `index` ein und vergibt
    /// `sort_order` dicht neu.
    pub fn insert_saved_view_at(&mut self, view: SavedView, index: usize) {
        self.observe_id(view.id);
        let index = index.min(self.saved_views.len());
        self.saved_views.insert(index, view);
        renumber_sort_orders(&mut self.saved_views);
    }

    /// Entfernt eine Ansicht und vergibt `sort_order` dicht neu.
    pub fn remove_saved_view(&mut self, id: u64) -> Option<SavedView> {
        let index = self.saved_views.iter().position(|v| v.id == id)?;
        let removed = self.saved_views.remove(index);
        renumber_sort_orders(&mut self.saved_views);
        Some(removed)
    }

    /// Sucht eine Ansicht anhand ihrer ID.
    pub fn saved_view(&self, id: u64) -> Option<&SavedView> {
        self.saved_views.iter().find(|v| v.id == id)
    }

    /// Mutable Zugriff auf eine Ansicht.
    pub fn saved_view_mut(&mut self, id: u64) -> Option<&mut SavedView> {
        self.saved_views.iter_mut().find(|v| v.id == id)
    }

    /// Markiert den Marker-Index als veraltet (nach direkter
    /// Feld-Mutation, z.B. Punkt-Drag).
    pub fn mark_markers_dirty(&mut self) {
        self.marker_index_dirty = true;
    }

    /// Baut den Marker-Index neu auf, falls veraltet.
    pub fn ensure_marker_index(&mut self) {
        if self.marker_index_dirty {
            self.rebuild_marker_index();
        }
    }

    /// Read-only Zugriff auf den Marker-Index.
    /// Nach direkten Feld-Mutationen vorher [`ensure_marker_index`](Self::ensure_marker_index) aufrufen.
    pub fn marker_index(&self) -> &MarkerIndex {
        &self.marker_index
    }

    /// Gibt die Anzahl der Messungen zurück (für UI-Anzeige).
    pub fn measurement_count(&self) -> usize {
        self.measurements.len()
    }

    /// Gibt die Anzahl der Annotationen zurück (für UI-Anzeige).
    pub fn annotation_count(&self) -> usize {
        self.annotations.len()
    }

    fn rebuild_marker_index(&mut self) {
        self.marker_index =
            MarkerIndex::from_entities(self.measurements.values(), self.annotations.values());
        self.marker_index_dirty = false;
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
