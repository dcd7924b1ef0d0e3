// Stackonly - stackonly-collections
// Module: ExpandableStack - LIFO stack over a growable chunk arena
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! LIFO stack whose storage is an [`ExpandableArray`].
//!
//! Behaves like [`FixedStack`](crate::FixedStack) until it is full; the
//! caller may then chain another buffer with [`ExpandableStack::expand`] and
//! retry. Growth never moves elements already pushed.

use core::ops::{Index, IndexMut};

use stackonly_error::{Error, Result};

use crate::collections::ExpandableArray;
use crate::limits::DEFAULT_MAX_CHUNKS;
use crate::traits::BoundedCapacity;

/// A LIFO stack backed by a chain of borrowed buffers.
///
/// # Invariants
///
/// 1. `count <= array.len()`
/// 2. Live elements are logical slots `[0, count)`, top at `count - 1`
///
/// # Examples
///
/// ```
/// use stackonly_collections::ExpandableStack;
///
/// let mut first = [0u32; 1];
/// let mut second = [0u32; 1];
///
/// let mut stack: ExpandableStack<'_, u32> = ExpandableStack::new(&mut first);
/// assert!(stack.push(1));
/// assert!(!stack.push(2));
///
/// stack.expand(&mut second)?;
/// assert!(stack.push(2));
/// assert_eq!(stack.capacity(), 2);
///
/// assert_eq!(*stack.pop()?, 2);
/// assert_eq!(*stack.pop()?, 1);
/// # Ok::<(), stackonly_error::Error>(())
/// ```
#[derive(Debug)]
pub struct ExpandableStack<'a, T, const C: usize = DEFAULT_MAX_CHUNKS> {
    array: ExpandableArray<'a, T, C>,
    count: usize,
}

impl<'a, T, const C: usize> ExpandableStack<'a, T, C> {
    /// Creates an empty stack with `buffer` as its first chunk.
    ///
    /// `buffer` must not be empty (`debug_assert!`).
    #[must_use]
    pub fn new(buffer: &'a mut [T]) -> Self {
        Self {
            array: ExpandableArray::new(buffer),
            count: 0,
        }
    }

    /// Checked variant of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] if `buffer` is empty.
    pub fn try_new(buffer: &'a mut [T]) -> Result<Self> {
        Ok(Self {
            array: ExpandableArray::try_new(buffer)?,
            count: 0,
        })
    }

    /// Number of elements on the stack.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Sum of all chunk lengths.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.array.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot of every chunk is live.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count >= self.array.len()
    }

    /// Number of chunks backing the stack.
    #[inline]
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.array.chunk_count()
    }

    /// Maximum number of chunks the stack can chain.
    #[inline]
    #[must_use]
    pub const fn max_chunks(&self) -> usize {
        C
    }

    /// Pushes `item` on top of the stack.
    ///
    /// Returns `false`, leaving the stack unchanged, if it is full. Growth is
    /// never automatic.
    #[must_use = "a full stack rejects the item"]
    pub fn push(&mut self, item: T) -> bool {
        if self.is_full() {
            trace_event!(trace, capacity = self.array.len(), "push rejected, stack full");
            return false;
        }

        match self.array.get_mut(self.count) {
            Ok(slot) => {
                *slot = item;
                self.count += 1;
                true
            }
            Err(_) => false,
        }
    }

    /// Removes the top element and returns a reference to its slot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::STACK_UNDERFLOW`] if the stack is empty.
    pub fn pop(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::stack_underflow());
        }

        self.count -= 1;
        self.array.get_mut(self.count)
    }

    /// Returns a reference to the top element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::STACK_UNDERFLOW`] if the stack is empty.
    pub fn peek(&mut self) -> Result<&mut T> {
        if self.is_empty() {
            return Err(Error::stack_underflow());
        }

        self.array.get_mut(self.count - 1)
    }

    /// Resets the count to zero. No chunk is released or zeroed.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Chains `buffer` as a new chunk, growing the capacity by its length.
    ///
    /// May be called at any fill level. `buffer` must not be empty
    /// (`debug_assert!`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CHUNK_TABLE_EXHAUSTED`] if all `C` chunk slots are in
    /// use; the stack is unchanged.
    pub fn expand(&mut self, buffer: &'a mut [T]) -> Result<()> {
        self.array.expand(buffer)
    }

    /// Checked variant of [`expand`](Self::expand).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] if `buffer` is empty, otherwise the
    /// errors of [`expand`](Self::expand).
    pub fn try_expand(&mut self, buffer: &'a mut [T]) -> Result<()> {
        self.array.try_expand(buffer)
    }

    /// The backing arena, live and stale slots alike.
    #[inline]
    #[must_use]
    pub const fn array(&self) -> &ExpandableArray<'a, T, C> {
        &self.array
    }
}

impl<T, const C: usize> BoundedCapacity for ExpandableStack<'_, T, C> {
    fn capacity(&self) -> usize {
        self.array.len()
    }

    fn len(&self) -> usize {
        self.count
    }
}

/// Indexes the arena slot, from the bottom of the stack.
impl<T, const C: usize> Index<usize> for ExpandableStack<'_, T, C> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.array[index]
    }
}

impl<T, const C: usize> IndexMut<usize> for ExpandableStack<'_, T, C> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.array[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
    struct TestStruct {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_push_success() {
        let mut buffer = [TestStruct::default(); 1];
        let mut stack: ExpandableStack<'_, TestStruct> = ExpandableStack::new(&mut buffer);

        assert_eq!(stack.capacity(), 1);
        assert_eq!(stack.len(), 0);

        assert!(stack.push(TestStruct { x: 3, y: 1 }));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_push_after_expand() -> Result<()> {
        let mut first = [TestStruct::default(); 1];
        let mut second = [TestStruct::default(); 1];
        let mut stack: ExpandableStack<'_, TestStruct> = ExpandableStack::new(&mut first);
        let expected = TestStruct { x: 3, y: 1 };

        assert!(stack.push(expected));
        assert!(!stack.push(expected));
        assert_eq!(stack.len(), 1);

        stack.expand(&mut second)?;

        assert!(stack.push(expected));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.capacity(), 2);
        assert_eq!(stack.chunk_count(), 2);
        Ok(())
    }

    #[test]
    fn test_pop_after_expanding() -> Result<()> {
        let mut first = [TestStruct::default(); 1];
        let mut second = [TestStruct::default(); 1];
        let mut stack: ExpandableStack<'_, TestStruct> = ExpandableStack::new(&mut first);

        assert!(stack.push(TestStruct { x: 1, y: 1 }));
        stack.expand(&mut second)?;
        assert!(stack.push(TestStruct { x: 3, y: 1 }));

        assert_eq!(*stack.pop()?, TestStruct { x: 3, y: 1 });
        assert_eq!(*stack.pop()?, TestStruct { x: 1, y: 1 });
        assert_eq!(stack.len(), 0);
        Ok(())
    }

    #[test]
    fn test_underflow_errors() {
        let mut buffer = [0u32; 1];
        let mut stack: ExpandableStack<'_, u32> = ExpandableStack::new(&mut buffer);

        assert_eq!(stack.pop().err(), Some(Error::STACK_UNDERFLOW));
        assert_eq!(stack.peek().err(), Some(Error::STACK_UNDERFLOW));
    }

    #[test]
    fn test_modify_through_peek() -> Result<()> {
        let mut buffer = [TestStruct::default(); 1];
        let mut stack: ExpandableStack<'_, TestStruct> = ExpandableStack::new(&mut buffer);
        assert!(stack.push(TestStruct { x: 3, y: 1 }));

        let top = stack.peek()?;
        top.x = 5;
        top.y = 18;

        assert_eq!(stack[0], TestStruct { x: 5, y: 18 });
        Ok(())
    }

    #[test]
    fn test_expand_before_full() -> Result<()> {
        let mut first = [0u32; 2];
        let mut second = [0u32; 3];
        let mut stack: ExpandableStack<'_, u32> = ExpandableStack::new(&mut first);

        assert!(stack.push(1));
        stack.expand(&mut second)?;
        for value in 2..=5 {
            assert!(stack.push(value));
        }
        assert!(stack.is_full());

        for expected in (1..=5).rev() {
            assert_eq!(*stack.pop()?, expected);
        }
        Ok(())
    }

    #[test]
    fn test_expand_rejected_when_table_full() -> Result<()> {
        let mut first = [0u8; 1];
        let mut second = [0u8; 1];
        let mut third = [0u8; 1];
        let mut stack: ExpandableStack<'_, u8, 2> = ExpandableStack::new(&mut first);

        stack.expand(&mut second)?;
        assert_eq!(stack.expand(&mut third), Err(Error::CHUNK_TABLE_EXHAUSTED));
        assert_eq!(stack.capacity(), 2);
        assert_eq!(stack.max_chunks(), 2);
        Ok(())
    }

    #[test]
    fn test_clear() {
        let mut buffer = [0u32; 2];
        let mut stack: ExpandableStack<'_, u32> = ExpandableStack::new(&mut buffer);
        assert!(stack.push(1));
        assert!(stack.push(2));

        stack.clear();
        assert_eq!(stack.len(), 0);
        assert!(stack.push(9));
        assert_eq!(stack[0], 9);
        assert_eq!(stack.array()[1], 2);
    }
}
