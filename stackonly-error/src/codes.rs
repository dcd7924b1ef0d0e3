// Stackonly - stackonly-error
// Module: Stackonly Error Codes
//
// Copyright (c) 2024 Ralf Anton Beier
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for stackonly

// Invalid operation error codes (1000-1999)
/// Pop or peek on an empty stack
pub const STACK_UNDERFLOW: u16 = 1000;
/// Dequeue or peek on an empty queue
pub const QUEUE_UNDERFLOW: u16 = 1001;

// Lookup error codes (2000-2999)
/// Key not present in a dictionary
pub const KEY_NOT_FOUND: u16 = 2000;

// Bounds error codes (3000-3999)
/// Logical index not covered by any chunk
pub const INDEX_OUT_OF_RANGE: u16 = 3000;

// Validation error codes (4000-4999)
/// Zero-length buffer passed to a constructor or `expand`
pub const EMPTY_BUFFER: u16 = 4000;
/// Key and value buffers of different lengths
pub const MISMATCHED_BUFFER_LENGTHS: u16 = 4001;

// Capacity error codes (5000-5999)
/// The inline chunk table of an arena has no free slot
pub const CHUNK_TABLE_EXHAUSTED: u16 = 5000;
