//! Base trait for UI state in MVI architecture.

/// Marker trait for state owned by a reducer.
///
/// Implementors are plain data: cloneable snapshots that hold everything a
/// screen needs to render, comparable so tests can assert on whole states,
/// and `Default` so the owner can `mem::take` them during dispatch.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
