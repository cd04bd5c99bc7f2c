//! Compute button trait

/// Debounced, edge-triggered push button
///
/// Requests evaluation of the current entry.
pub trait ComputeButton {
    /// Returns true exactly once per physical press
    fn pressed(&mut self) -> bool;
}
