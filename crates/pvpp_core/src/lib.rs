//! Public library API for decoding PVPP performer-parameter payloads.

/// Cursor, scoped offset dereference, record decoders, and motion-chain helpers.
pub mod pvpp;
