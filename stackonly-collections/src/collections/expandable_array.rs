// Stackonly - stackonly-collections
// Module: ExpandableArray - Chunk-chained view over caller buffers
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Chunk-chained array over caller-supplied buffers.
//!
//! `ExpandableArray<'a, T, C>` presents one logical index space over an
//! ordered list of borrowed buffers ("chunks"). Growth appends a chunk;
//! existing elements are never moved or copied.
//!
//! # Characteristics
//!
//! - **Zero allocation**: the chunk table is an inline `[&mut [T]; C]`
//! - **Stable storage**: elements stay in the buffer they were written to
//! - **O(chunks) indexing**: an index is resolved by walking the chunk table
//! - **Borrow-checked lifetime**: the arena cannot outlive any chunk
//!
//! # Index resolution
//!
//! Index `i` belongs to the first chunk whose length exceeds what is left of
//! `i` after subtracting the lengths of all earlier chunks:
//!
//! ```text
//! chunks:  [a0 a1] [b0] [c0 c1 c2]
//! index:    0  1    2    3  4  5
//! ```

use core::ops::{Index, IndexMut};

use stackonly_error::{Error, Result};

use crate::limits::DEFAULT_MAX_CHUNKS;
use crate::traits::BoundedCapacity;

/// A logical array spread over up to `C` caller-owned chunks.
///
/// # Invariants
///
/// 1. `1 <= chunk_count <= C`
/// 2. `chunks[0]` is the buffer passed to the constructor
/// 3. Chunk order is the order of `expand` calls
/// 4. `len` equals the sum of the lengths of `chunks[..chunk_count]`
/// 5. Slots `chunks[chunk_count..]` hold empty slices
///
/// # Examples
///
/// ```
/// use stackonly_collections::ExpandableArray;
///
/// let mut first = [1u32, 2];
/// let mut second = [3u32];
///
/// let mut array: ExpandableArray<'_, u32> = ExpandableArray::new(&mut first);
/// array.expand(&mut second)?;
///
/// assert_eq!(array.len(), 3);
/// assert_eq!(array[2], 3);
///
/// array[2] = 30;
/// assert_eq!(*array.get(2)?, 30);
/// assert!(array.get(3).is_err());
/// # Ok::<(), stackonly_error::Error>(())
/// ```
#[derive(Debug)]
pub struct ExpandableArray<'a, T, const C: usize = DEFAULT_MAX_CHUNKS> {
    /// Inline chunk table, live prefix is `chunks[..chunk_count]`
    chunks: [&'a mut [T]; C],

    /// Number of live chunks
    chunk_count: usize,

    /// Cached sum of live chunk lengths
    len: usize,
}

impl<'a, T, const C: usize> ExpandableArray<'a, T, C> {
    /// Wraps `buffer` as the sole chunk.
    ///
    /// `buffer` must not be empty. This is checked with `debug_assert!`;
    /// use [`try_new`](Self::try_new) for a checked constructor.
    #[must_use]
    pub fn new(buffer: &'a mut [T]) -> Self {
        const { assert!(C > 0, "ExpandableArray needs at least one chunk slot") };
        debug_assert!(!buffer.is_empty(), "ExpandableArray buffer must not be empty");

        let len = buffer.len();
        let mut chunks: [&'a mut [T]; C] = core::array::from_fn(|_| <&mut [T]>::default());
        chunks[0] = buffer;

        trace_event!(debug, len, max_chunks = C, "expandable array created");

        Self {
            chunks,
            chunk_count: 1,
            len,
        }
    }

    /// Checked variant of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] if `buffer` is empty.
    pub fn try_new(buffer: &'a mut [T]) -> Result<Self> {
        if buffer.is_empty() {
            return Err(Error::EMPTY_BUFFER);
        }
        Ok(Self::new(buffer))
    }

    /// Total number of slots across all chunks.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena has no slots at all.
    ///
    /// Only reachable when the precondition on [`new`](Self::new) was
    /// violated in a release build.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of chunks currently chained.
    #[inline]
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.chunk_count
    }

    /// Size of the inline chunk table.
    #[inline]
    #[must_use]
    pub const fn max_chunks(&self) -> usize {
        C
    }

    /// Returns `true` if another chunk can be chained.
    #[inline]
    #[must_use]
    pub const fn can_expand(&self) -> bool {
        self.chunk_count < C
    }

    /// Appends `buffer` as a new tail chunk.
    ///
    /// Elements already stored are untouched; new indices `len()..len() +
    /// buffer.len()` map into `buffer`. `buffer` must not be empty
    /// (`debug_assert!`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CHUNK_TABLE_EXHAUSTED`] without modifying the arena
    /// if all `C` chunk slots are in use.
    pub fn expand(&mut self, buffer: &'a mut [T]) -> Result<()> {
        debug_assert!(!buffer.is_empty(), "ExpandableArray chunk must not be empty");

        if !self.can_expand() {
            trace_event!(warn, chunk_count = self.chunk_count, "chunk table exhausted");
            return Err(Error::CHUNK_TABLE_EXHAUSTED);
        }

        enter_span!(crate::tracing::ArenaTrace::expanding(self.chunk_count, buffer.len()));

        self.len += buffer.len();
        self.chunks[self.chunk_count] = buffer;
        self.chunk_count += 1;

        trace_event!(debug, chunk_count = self.chunk_count, len = self.len, "chunk appended");
        Ok(())
    }

    /// Checked variant of [`expand`](Self::expand).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] if `buffer` is empty, otherwise the
    /// errors of [`expand`](Self::expand).
    pub fn try_expand(&mut self, buffer: &'a mut [T]) -> Result<()> {
        if buffer.is_empty() {
            return Err(Error::EMPTY_BUFFER);
        }
        self.expand(buffer)
    }

    /// Chains every chunk of `other` after the chunks of `self`, in order.
    ///
    /// Either all chunks are moved or, on error, none are.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CHUNK_TABLE_EXHAUSTED`] if the combined chunk count
    /// does not fit in `C`.
    pub fn append<const D: usize>(&mut self, other: ExpandableArray<'a, T, D>) -> Result<()> {
        if self.chunk_count + other.chunk_count > C {
            trace_event!(
                warn,
                chunk_count = self.chunk_count,
                incoming = other.chunk_count,
                "chunk table exhausted"
            );
            return Err(Error::CHUNK_TABLE_EXHAUSTED);
        }

        enter_span!(crate::tracing::ArenaTrace::appending(self.chunk_count, other.chunk_count));

        let incoming = other.chunk_count;
        for chunk in other.chunks.into_iter().take(incoming) {
            self.len += chunk.len();
            self.chunks[self.chunk_count] = chunk;
            self.chunk_count += 1;
        }
        Ok(())
    }

    /// Resolves a logical index to `(chunk, offset)`.
    fn locate(&self, index: usize) -> Option<(usize, usize)> {
        let mut offset = index;
        for (chunk_index, chunk) in self.chunks[..self.chunk_count].iter().enumerate() {
            if offset < chunk.len() {
                return Some((chunk_index, offset));
            }
            offset -= chunk.len();
        }
        None
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INDEX_OUT_OF_RANGE`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let (chunk, offset) = self.locate(index).ok_or(Error::INDEX_OUT_OF_RANGE)?;
        Ok(&self.chunks[chunk][offset])
    }

    /// Returns a mutable reference into the caller's buffer at `index`.
    ///
    /// Writes through the reference land directly in the backing buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INDEX_OUT_OF_RANGE`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let (chunk, offset) = self.locate(index).ok_or(Error::INDEX_OUT_OF_RANGE)?;
        Ok(&mut self.chunks[chunk][offset])
    }

    /// Returns a raw pointer to the element at `index`.
    ///
    /// Resolution and failure are identical to [`get_mut`](Self::get_mut).
    /// The pointer is valid for as long as the backing chunk is; using it
    /// after another borrow of the arena is the caller's responsibility.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INDEX_OUT_OF_RANGE`] if `index >= len()`.
    pub fn get_ptr(&mut self, index: usize) -> Result<*mut T> {
        self.get_mut(index).map(|slot| slot as *mut T)
    }

    /// Swaps the elements at logical indices `a` and `b`.
    ///
    /// Works across chunk boundaries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::INDEX_OUT_OF_RANGE`] if either index is out of range.
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let (chunk_a, offset_a) = self.locate(a).ok_or(Error::INDEX_OUT_OF_RANGE)?;
        let (chunk_b, offset_b) = self.locate(b).ok_or(Error::INDEX_OUT_OF_RANGE)?;

        if chunk_a == chunk_b {
            self.chunks[chunk_a].swap(offset_a, offset_b);
            return Ok(());
        }

        let ((low, low_offset), (high, high_offset)) = if chunk_a < chunk_b {
            ((chunk_a, offset_a), (chunk_b, offset_b))
        } else {
            ((chunk_b, offset_b), (chunk_a, offset_a))
        };
        let (head, tail) = self.chunks.split_at_mut(high);
        core::mem::swap(&mut head[low][low_offset], &mut tail[0][high_offset]);
        Ok(())
    }
}

impl<T, const C: usize> BoundedCapacity for ExpandableArray<'_, T, C> {
    fn capacity(&self) -> usize {
        self.len
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T, const C: usize> Index<usize> for ExpandableArray<'_, T, C> {
    type Output = T;

    #[allow(clippy::panic)]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(_) => panic!("index out of range: the len is {} but the index is {}", self.len, index),
        }
    }
}

impl<T, const C: usize> IndexMut<usize> for ExpandableArray<'_, T, C> {
    #[allow(clippy::panic)]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Ok(value) => value,
            Err(_) => panic!("index out of range: the len is {} but the index is {}", len, index),
        }
    }
}
