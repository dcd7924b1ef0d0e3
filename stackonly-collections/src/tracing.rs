//! Tracing support for stackonly collections
//!
//! This module provides structured tracing of arena growth. It wraps the
//! `tracing` crate and works in both std and `no_std` environments; a
//! subscriber installed by the application decides what is recorded.

#![cfg(feature = "tracing")]

pub use ::tracing::{debug, error, info, trace, warn};
pub use ::tracing::{debug_span, error_span, info_span, span, trace_span, warn_span};
pub use ::tracing::{event, Level, Span};

/// Trace spans for arena operations
#[derive(Debug, Clone)]
pub struct ArenaTrace;

impl ArenaTrace {
    /// Create a span for appending a chunk
    #[inline]
    pub fn expanding(chunk_count: usize, chunk_len: usize) -> Span {
        debug_span!("arena_expand", chunk_count = %chunk_count, chunk_len = %chunk_len)
    }

    /// Create a span for merging another arena's chunks
    #[inline]
    pub fn appending(chunk_count: usize, incoming: usize) -> Span {
        debug_span!("arena_append", chunk_count = %chunk_count, incoming = %incoming)
    }
}
