//! Shared numeric buffers connecting a hardware driver to sensor handles.
//!
//! A [`SensorBuffer`] is the storage one sensor quantity is published
//! through. The driver keeps a clone and writes it every update cycle; each
//! handle clone aliases the same cells, so a handle read always returns the
//! driver's current values, never a snapshot taken at registration time.
//!
//! # Caller obligations
//!
//! This type performs no synchronization. Loads and stores are per-element
//! atomic (concurrent access is well-defined) but relaxed: nothing blocks and
//! a reader racing a writer may observe a mix of old and new elements.
//! Consistency comes from the surrounding control framework's scheduling
//! discipline (one writer per buffer, read-after-write ordering within a
//! control cycle), not from this crate.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Quaternion storage in (x, y, z, w) order.
pub type QuaternionBuffer = SensorBuffer<4>;

/// Three-component vector storage (x, y, z).
pub type Vector3Buffer = SensorBuffer<3>;

/// Row-major 3×3 covariance matrix storage.
pub type CovarianceBuffer = SensorBuffer<9>;

/// A fixed-size `f64` buffer shared between one driver-side writer and any
/// number of reader clones.
///
/// Values are stored as their [`f64::to_bits`] images so that unsynchronized
/// cross-thread aliasing stays well-defined without locking.
#[derive(Clone, Debug)]
pub struct SensorBuffer<const N: usize> {
    cells: Arc<[AtomicU64; N]>,
}

impl<const N: usize> SensorBuffer<N> {
    /// Allocate a buffer holding `init`.
    pub fn new(init: [f64; N]) -> Self {
        Self {
            cells: Arc::new(std::array::from_fn(|i| AtomicU64::new(init[i].to_bits()))),
        }
    }

    /// Allocate a buffer holding all zeros.
    pub fn zeroed() -> Self {
        Self::new([0.0; N])
    }

    /// Overwrite the buffer with `values`, element by element.
    pub fn write(&self, values: &[f64; N]) {
        for (cell, value) in self.cells.iter().zip(values) {
            cell.store(value.to_bits(), Ordering::Relaxed);
        }
    }

    /// Read the buffer's current contents, element by element.
    pub fn read(&self) -> [f64; N] {
        std::array::from_fn(|i| f64::from_bits(self.cells[i].load(Ordering::Relaxed)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_then_read_returns_initial_values() {
        let buf = QuaternionBuffer::new([0.0, 0.0, 0.0, 1.0]);
        assert_eq!(buf.read(), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn zeroed_reads_all_zeros() {
        let buf = CovarianceBuffer::zeroed();
        assert_eq!(buf.read(), [0.0; 9]);
    }

    #[test]
    fn write_is_visible_on_next_read() {
        let buf = Vector3Buffer::zeroed();
        buf.write(&[0.1, -2.5, 9.81]);
        assert_eq!(buf.read(), [0.1, -2.5, 9.81]);
    }

    #[test]
    fn clones_alias_the_same_storage() {
        let writer = Vector3Buffer::zeroed();
        let reader = writer.clone();

        writer.write(&[1.0, 2.0, 3.0]);
        assert_eq!(reader.read(), [1.0, 2.0, 3.0]);

        // The alias works both ways.
        reader.write(&[4.0, 5.0, 6.0]);
        assert_eq!(writer.read(), [4.0, 5.0, 6.0]);
    }
}
