// Stackonly - stackonly-collections
// Module: Buffer-backed collections
//
// Copyright (c) 2025 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Buffer-backed collections.
//!
//! | Type | Construct from | Capacity | Growth |
//! |---|---|---|---|
//! | [`FixedStack`] | 1 buffer | buffer length | none |
//! | [`FixedQueue`] | 1 buffer | buffer length | none |
//! | [`FixedDictionary`] | 2 equal-length buffers | buffer length | none |
//! | [`ExpandableArray`] | 1 buffer | chunk sum | `expand(buffer)` |
//! | [`ExpandableStack`] | 1 buffer | chunk sum | `expand(buffer)` |
//! | [`ExpandableQueue`] | 1 buffer | chunk sum | `expand(buffer)` |
//! | [`ExpandableDictionary`] | 2 equal-length buffers | chunk sum | `expand(keys, values)` |

mod expandable_array;
mod expandable_dictionary;
mod expandable_queue;
mod expandable_stack;
mod fixed_dictionary;
mod fixed_queue;
mod fixed_stack;

pub use expandable_array::ExpandableArray;
pub use expandable_dictionary::ExpandableDictionary;
pub use expandable_queue::ExpandableQueue;
pub use expandable_stack::ExpandableStack;
pub use fixed_dictionary::FixedDictionary;
pub use fixed_queue::FixedQueue;
pub use fixed_stack::FixedStack;
