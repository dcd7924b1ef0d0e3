// Stackonly - stackonly-collections
// Module: ExpandableDictionary - Linear map over two growable chunk arenas
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Dense, unordered key-value map over a pair of [`ExpandableArray`]s.
//!
//! Same semantics as [`FixedDictionary`](crate::FixedDictionary): forward
//! linear scan, first match wins, swap-to-fill removal, no deduplication.
//! The key and value arenas always grow together, one chunk each.

use core::ops::{Index, IndexMut};

use stackonly_error::{Error, Result};

use crate::collections::ExpandableArray;
use crate::limits::DEFAULT_MAX_CHUNKS;
use crate::traits::BoundedCapacity;

/// A linear-scan map backed by two chunk arenas of equal length.
///
/// # Invariants
///
/// 1. `keys.len() == values.len()` and both have the same chunk layout
/// 2. `count <= keys.len()`
/// 3. `keys[i]` and `values[i]` form one entry for every `i < count`
///
/// # Examples
///
/// ```
/// use stackonly_collections::ExpandableDictionary;
///
/// let mut keys = [0u8; 1];
/// let mut values = [0u32; 1];
/// let mut more_keys = [0u8; 1];
/// let mut more_values = [0u32; 1];
///
/// let mut dict: ExpandableDictionary<'_, u8, u32> =
///     ExpandableDictionary::new(&mut keys, &mut values);
/// assert!(dict.try_add(1, 10));
/// assert!(!dict.try_add(2, 20));
///
/// dict.expand(&mut more_keys, &mut more_values)?;
/// assert!(dict.try_add(2, 20));
/// assert_eq!(*dict.get_value_ref(&2)?, 20);
/// # Ok::<(), stackonly_error::Error>(())
/// ```
#[derive(Debug)]
pub struct ExpandableDictionary<'a, K, V, const C: usize = DEFAULT_MAX_CHUNKS> {
    keys: ExpandableArray<'a, K, C>,
    values: ExpandableArray<'a, V, C>,
    count: usize,
}

impl<'a, K: PartialEq, V, const C: usize> ExpandableDictionary<'a, K, V, C> {
    /// Creates an empty dictionary with `keys` and `values` as the first
    /// chunk of each arena.
    ///
    /// Both buffers must be non-empty and of equal length (`debug_assert!`).
    #[must_use]
    pub fn new(keys: &'a mut [K], values: &'a mut [V]) -> Self {
        debug_assert!(
            keys.len() == values.len(),
            "ExpandableDictionary key and value buffers must have the same length"
        );
        Self {
            keys: ExpandableArray::new(keys),
            values: ExpandableArray::new(values),
            count: 0,
        }
    }

    /// Checked variant of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] if `keys` is empty and
    /// [`Error::MISMATCHED_BUFFER_LENGTHS`] if the lengths differ.
    pub fn try_new(keys: &'a mut [K], values: &'a mut [V]) -> Result<Self> {
        if keys.is_empty() {
            return Err(Error::EMPTY_BUFFER);
        }
        if keys.len() != values.len() {
            return Err(Error::MISMATCHED_BUFFER_LENGTHS);
        }
        Ok(Self::new(keys, values))
    }

    /// Number of live entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Sum of all key chunk lengths.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if there are no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot holds an entry.
    #[inline]
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.count >= self.keys.len()
    }

    /// Number of chunks in each arena.
    #[inline]
    #[must_use]
    pub const fn chunk_count(&self) -> usize {
        self.keys.chunk_count()
    }

    /// Maximum number of chunks each arena can chain.
    #[inline]
    #[must_use]
    pub const fn max_chunks(&self) -> usize {
        C
    }

    fn position(&self, key: &K) -> Option<usize> {
        (0..self.count).find(|&index| self.keys.get(index).is_ok_and(|candidate| candidate == key))
    }

    /// Appends an entry without checking for an existing key.
    ///
    /// Returns `false`, leaving the dictionary unchanged, if it is full.
    #[must_use = "a full dictionary rejects the entry"]
    pub fn try_add(&mut self, key: K, value: V) -> bool {
        if self.is_full() {
            trace_event!(trace, capacity = self.keys.len(), "add rejected, dictionary full");
            return false;
        }

        let index = self.count;
        let (Ok(key_slot), Ok(value_slot)) = (self.keys.get_mut(index), self.values.get_mut(index))
        else {
            return false;
        };
        *key_slot = key;
        *value_slot = value;

        self.count += 1;
        true
    }

    /// Returns a mutable reference to the value of the first entry whose key
    /// equals `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KEY_NOT_FOUND`] if no live entry matches.
    pub fn get_value_ref(&mut self, key: &K) -> Result<&mut V> {
        let index = self.position(key).ok_or(Error::KEY_NOT_FOUND)?;
        self.values.get_mut(index)
    }

    /// Returns the value of the first entry whose key equals `key`, if any.
    #[must_use]
    pub fn try_get_value(&self, key: &K) -> Option<&V> {
        self.position(key).and_then(|index| self.values.get(index).ok())
    }

    /// Returns `true` if a live entry has key `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Removes the first entry whose key equals `key`, moving the last live
    /// entry into its slot. Returns `false` if no entry matches.
    pub fn try_remove(&mut self, key: &K) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };

        let last = self.count - 1;
        if index != last
            && (self.keys.swap(index, last).is_err() || self.values.swap(index, last).is_err())
        {
            return false;
        }

        self.count -= 1;
        true
    }

    /// Resets the count to zero.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// Chains one chunk onto each arena.
    ///
    /// `keys` and `values` must be non-empty and of equal length
    /// (`debug_assert!`); the arenas would otherwise drift apart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CHUNK_TABLE_EXHAUSTED`] if the chunk tables are full.
    /// Neither arena is modified in that case.
    pub fn expand(&mut self, keys: &'a mut [K], values: &'a mut [V]) -> Result<()> {
        debug_assert!(
            keys.len() == values.len(),
            "ExpandableDictionary key and value chunks must have the same length"
        );
        if !self.keys.can_expand() || !self.values.can_expand() {
            trace_event!(warn, chunk_count = self.keys.chunk_count(), "chunk table exhausted");
            return Err(Error::CHUNK_TABLE_EXHAUSTED);
        }

        self.keys.expand(keys)?;
        self.values.expand(values)
    }

    /// Checked variant of [`expand`](Self::expand).
    ///
    /// # Errors
    ///
    /// Returns [`Error::EMPTY_BUFFER`] or [`Error::MISMATCHED_BUFFER_LENGTHS`]
    /// for invalid chunks, otherwise the errors of [`expand`](Self::expand).
    pub fn try_expand(&mut self, keys: &'a mut [K], values: &'a mut [V]) -> Result<()> {
        if keys.is_empty() {
            return Err(Error::EMPTY_BUFFER);
        }
        if keys.len() != values.len() {
            return Err(Error::MISMATCHED_BUFFER_LENGTHS);
        }
        self.expand(keys, values)
    }

    /// The key arena, live and stale slots alike.
    #[inline]
    #[must_use]
    pub const fn keys(&self) -> &ExpandableArray<'a, K, C> {
        &self.keys
    }

    /// The value arena, live and stale slots alike.
    #[inline]
    #[must_use]
    pub const fn values(&self) -> &ExpandableArray<'a, V, C> {
        &self.values
    }
}

impl<K: PartialEq, V, const C: usize> BoundedCapacity for ExpandableDictionary<'_, K, V, C> {
    fn capacity(&self) -> usize {
        self.keys.len()
    }

    fn len(&self) -> usize {
        self.count
    }
}

impl<K: PartialEq, V, const C: usize> Index<&K> for ExpandableDictionary<'_, K, V, C> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if no live entry has key `key`.
    #[allow(clippy::panic)]
    fn index(&self, key: &K) -> &V {
        match self.try_get_value(key) {
            Some(value) => value,
            None => panic!("key not found in ExpandableDictionary"),
        }
    }
}

impl<K: PartialEq, V, const C: usize> IndexMut<&K> for ExpandableDictionary<'_, K, V, C> {
    #[allow(clippy::panic)]
    fn index_mut(&mut self, key: &K) -> &mut V {
        match self.get_value_ref(key) {
            Ok(value) => value,
            Err(_) => panic!("key not found in ExpandableDictionary"),
        }
    }
}
