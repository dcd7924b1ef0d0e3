// Stackonly - stackonly-collections
// Module: FixedDictionary - Linear map over two caller buffers
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Dense, unordered key-value map over two parallel caller buffers.
//!
//! `FixedDictionary<'a, K, V>` stores keys and values in two borrowed
//! buffers of equal length. Live entries always occupy `[0, count)`;
//! removal moves the last live entry into the freed slot, so slot positions
//! are not stable across removals.
//!
//! # Characteristics
//!
//! - **Zero allocation**: entries are written straight into the buffers
//! - **O(n) lookup**: forward linear scan, first match wins
//! - **O(1) insertion**: append at `count`
//! - **O(n) removal**: scan, then swap-to-fill
//! - **No deduplication**: adding an existing key creates a second entry

use core::ops::{Index, IndexMut};

use stackonly_error::{Error, Result};

use crate::traits::BoundedCapacity;

/// A linear-scan map backed by a key buffer and a value buffer.
///
/// # Invariants
///
/// 1. `keys.len() == values.len()`
/// 2. `count <= keys.len()`
/// 3. `keys[i]` and `values[i]` form one entry for every `i < count`
///
/// # Examples
///
/// ```
/// use stackonly_collections::FixedDictionary;
///
/// let mut keys = [0u32; 4];
/// let mut values = [0i64; 4];
/// let mut dict = FixedDictionary::new(&mut keys, &mut values);
///
/// assert!(dict.try_add(1, 100));
/// assert!(dict.try_add(2, 200));
///
/// *dict.get_value_ref(&1)? += 1;
/// assert_eq!(dict.try_get_value(&1), Some(&101));
///
/// assert!(dict.try_remove(&1));
/// assert_eq!(dict.try_get_value(&1), None);
/// assert_eq!(dict[&2], 200);
/// # Ok::<(), stackonly_error::Error>(())
/// ```
#[derive(Debug)]
pub struct FixedDictionary<'a, K, V> {
    keys: &'a mut [K],
    values: &'a mut [V],
    count: usize,
}

impl<'a, K: PartialEq, V> FixedDictionary<'a, K, V> {
    /// Creates an empty dictionary over `keys` and `values`.
    ///
    /// Both buffers must be non-empty and of equal length (`debug_assert!`).
    #[must_use]
    pub fn new(keys: &'a mut [K], values: &'a mut [V]) -> Self {
        debug_assert!(!keys.is_empty(), "FixedDictionary buffers must not be empty");
        debug_assert!(
            keys.len() == values.len(),
            "FixedDictionary key and value buffers must have the same length"
        );
        Self {
            keys,
            values,
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

    /// Buffer length.
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

    fn position(&self, key: &K) -> Option<usize> {
        self.keys[..self.count].iter().position(|candidate| candidate == key)
    }

    /// Appends an entry.
    ///
    /// Existing entries are not checked: adding a key that is already
    /// present creates a second entry, which lookups never reach while the
    /// first one lives. Returns `false`, leaving the dictionary unchanged,
    /// if it is full.
    #[must_use = "a full dictionary rejects the entry"]
    pub fn try_add(&mut self, key: K, value: V) -> bool {
        if self.is_full() {
            trace_event!(trace, capacity = self.keys.len(), "add rejected, dictionary full");
            return false;
        }

        let index = self.count;
        self.count += 1;

        self.keys[index] = key;
        self.values[index] = value;
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
        Ok(&mut self.values[index])
    }

    /// Returns the value of the first entry whose key equals `key`, if any.
    #[must_use]
    pub fn try_get_value(&self, key: &K) -> Option<&V> {
        self.position(key).map(|index| &self.values[index])
    }

    /// Returns `true` if a live entry has key `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.position(key).is_some()
    }

    /// Removes the first entry whose key equals `key`.
    ///
    /// The last live entry is moved into the freed slot. Returns `false` if
    /// no entry matches.
    pub fn try_remove(&mut self, key: &K) -> bool {
        let Some(index) = self.position(key) else {
            return false;
        };

        let last = self.count - 1;
        self.count -= 1;

        if index != last {
            self.keys.swap(index, last);
            self.values.swap(index, last);
        }
        true
    }

    /// Resets the count to zero. The buffers are not touched.
    #[inline]
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// The whole key buffer, live and stale slots alike.
    #[inline]
    #[must_use]
    pub fn keys_buffer(&self) -> &[K] {
        &*self.keys
    }

    /// Mutable access to the key buffer.
    ///
    /// Rewriting a live key changes which lookups reach its entry.
    #[inline]
    pub fn keys_buffer_mut(&mut self) -> &mut [K] {
        &mut *self.keys
    }

    /// The whole value buffer, live and stale slots alike.
    #[inline]
    #[must_use]
    pub fn values_buffer(&self) -> &[V] {
        &*self.values
    }

    /// Mutable access to the value buffer.
    #[inline]
    pub fn values_buffer_mut(&mut self) -> &mut [V] {
        &mut *self.values
    }
}

impl<K: PartialEq, V> BoundedCapacity for FixedDictionary<'_, K, V> {
    fn capacity(&self) -> usize {
        self.keys.len()
    }

    fn len(&self) -> usize {
        self.count
    }
}

impl<K: PartialEq, V> Index<&K> for FixedDictionary<'_, K, V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if no live entry has key `key`.
    #[allow(clippy::panic)]
    fn index(&self, key: &K) -> &V {
        match self.try_get_value(key) {
            Some(value) => value,
            None => panic!("key not found in FixedDictionary"),
        }
    }
}

impl<K: PartialEq, V> IndexMut<&K> for FixedDictionary<'_, K, V> {
    #[allow(clippy::panic)]
    fn index_mut(&mut self, key: &K) -> &mut V {
        match self.get_value_ref(key) {
            Ok(value) => value,
            Err(_) => panic!("key not found in FixedDictionary"),
        }
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
    fn test_add_success() {
        let mut keys = [0i32; 1];
        let mut values = [TestStruct::default(); 1];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);

        assert_eq!(dict.capacity(), 1);
        assert_eq!(dict.len(), 0);

        assert!(dict.try_add(1, TestStruct { x: 3, y: 1 }));
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn test_add_when_full() {
        let mut keys = [0i32; 1];
        let mut values = [TestStruct::default(); 1];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);

        assert!(dict.try_add(1, TestStruct { x: 3, y: 1 }));
        assert!(!dict.try_add(2, TestStruct { x: 3, y: 1 }));
        assert_eq!(dict.len(), 1);
        assert!(!dict.contains_key(&2));
    }

    #[test]
    fn test_get_value_ref() -> Result<()> {
        let mut keys = [0i32; 2];
        let mut values = [TestStruct::default(); 2];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);
        assert!(dict.try_add(1, TestStruct { x: 3, y: 1 }));

        assert_eq!(*dict.get_value_ref(&1)?, TestStruct { x: 3, y: 1 });
        assert_eq!(dict.get_value_ref(&2).err(), Some(Error::KEY_NOT_FOUND));
        Ok(())
    }

    #[test]
    fn test_lookup_on_empty_dictionary() {
        let mut keys = [0i32; 2];
        let mut values = [0u8; 2];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);

        // Stale zeroed keys are not live entries
        assert_eq!(dict.get_value_ref(&0).err(), Some(Error::KEY_NOT_FOUND));
        assert_eq!(dict.try_get_value(&0), None);
        assert!(!dict.try_remove(&0));
    }

    #[test]
    fn test_modify_through_value_ref() -> Result<()> {
        let mut keys = [0i32; 1];
        let mut values = [TestStruct::default(); 1];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);
        assert!(dict.try_add(1, TestStruct { x: 3, y: 1 }));

        let value = dict.get_value_ref(&1)?;
        value.x = 5;
        value.y = 18;

        assert_eq!(dict[&1], TestStruct { x: 5, y: 18 });
        assert_eq!(dict.values_buffer()[0], TestStruct { x: 5, y: 18 });
        Ok(())
    }

    #[test]
    fn test_remove_non_last_keeps_other_entries() -> Result<()> {
        let mut keys = [0i32; 3];
        let mut values = [0u32; 3];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);
        assert!(dict.try_add(1, 10));
        assert!(dict.try_add(2, 20));
        assert!(dict.try_add(3, 30));

        assert!(dict.try_remove(&1));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.try_get_value(&1), None);
        assert_eq!(*dict.get_value_ref(&2)?, 20);
        assert_eq!(*dict.get_value_ref(&3)?, 30);

        // Last entry moved into the freed slot
        assert_eq!(dict.keys_buffer()[0], 3);
        Ok(())
    }

    #[test]
    fn test_remove_last_entry() {
        let mut keys = [0i32; 2];
        let mut values = [0u32; 2];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);
        assert!(dict.try_add(1, 10));
        assert!(dict.try_add(2, 20));

        assert!(dict.try_remove(&2));
        assert_eq!(dict.keys_buffer()[0], 1);
        assert_eq!(dict.try_get_value(&1), Some(&10));
        assert!(!dict.try_remove(&2));
    }

    #[test]
    fn test_duplicate_keys_first_match_wins() {
        let mut keys = [0i32; 2];
        let mut values = [0u32; 2];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);

        assert!(dict.try_add(7, 1));
        assert!(dict.try_add(7, 2));
        assert_eq!(dict.len(), 2);
        assert_eq!(dict.try_get_value(&7), Some(&1));

        assert!(dict.try_remove(&7));
        assert_eq!(dict.try_get_value(&7), Some(&2));
    }

    #[test]
    fn test_clear() {
        let mut keys = [0i32; 1];
        let mut values = [0u32; 1];
        let mut dict = FixedDictionary::new(&mut keys, &mut values);
        assert!(dict.try_add(1, 10));

        dict.clear();
        assert!(dict.is_empty());
        assert!(!dict.contains_key(&1));
        assert!(dict.try_add(2, 20));
        assert_eq!(dict.keys_buffer()[0], 2);
    }

    #[test]
    fn test_try_new_validates_buffers() {
        let mut keys = [0i32; 2];
        let mut values = [0u32; 1];
        assert_eq!(
            FixedDictionary::try_new(&mut keys, &mut values).err(),
            Some(Error::MISMATCHED_BUFFER_LENGTHS)
        );

        let mut keys: [i32; 0] = [];
        let mut values: [u32; 0] = [];
        assert_eq!(
            FixedDictionary::try_new(&mut keys, &mut values).err(),
            Some(Error::EMPTY_BUFFER)
        );
    }

    #[test]
    #[should_panic(expected = "key not found")]
    fn test_index_panics_on_missing_key() {
        let mut keys = [0i32; 1];
        let mut values = [0u32; 1];
        let dict = FixedDictionary::new(&mut keys, &mut values);
        let _value = dict[&4];
    }
}
