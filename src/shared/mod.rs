//! Geteilte Typen zwischen App-Layer und Einbettung.

pub mod options;

pub use options::EditorOptions;
