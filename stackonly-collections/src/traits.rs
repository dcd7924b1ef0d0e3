//! Common traits shared by the buffer-backed containers.

/// Capacity bookkeeping common to every container in this crate.
///
/// Capacity is the number of slots the caller's buffers provide; length is
/// the number of live elements. Writes fail once `len() == capacity()`
/// until the caller clears, removes, or (for expandable containers)
/// supplies another buffer.
pub trait BoundedCapacity {
    /// Get the maximum capacity this container can hold
    fn capacity(&self) -> usize;

    /// Get the current number of elements in the container
    fn len(&self) -> usize;

    /// Check if the container is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if the container is at maximum capacity
    fn is_full(&self) -> bool {
        self.len() >= self.capacity()
    }

    /// Get the remaining capacity for this container
    fn remaining_capacity(&self) -> usize {
        self.capacity().saturating_sub(self.len())
    }
}
