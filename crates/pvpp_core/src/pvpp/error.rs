use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, PvppError>;

/// Errors produced while loading and decoding PVPP payloads.
///
/// Every decode error is fatal to the whole document. `path` fields carry the
/// nesting path at the failure site, for example `chara_entries[0].motions[1].motion`.
#[derive(Debug, Error)]
pub enum PvppError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// A fixed-width read would run past the end of the buffer.
	#[error("out of bounds read at offset {at} in {path}: need {need} bytes, remaining {rem}")]
	OutOfBounds {
		/// Absolute byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
		/// Nesting path of the record being decoded.
		path: String,
	},
	/// A non-absent offset points outside the buffer.
	#[error("invalid offset 0x{offset:x} in {path} (buffer length {len})")]
	InvalidOffset {
		/// Raw offset value as stored in the payload.
		offset: u64,
		/// Length of the whole buffer.
		len: usize,
		/// Nesting path including the offset field.
		path: String,
	},
	/// A null-terminated string never terminated before the buffer end.
	#[error("unterminated string at offset {at} in {path}")]
	MalformedString {
		/// Absolute offset where the string run starts.
		at: usize,
		/// Nesting path including the string field.
		path: String,
	},
	/// An array count is negative or cannot fit in the buffer.
	#[error("unexpected count {count} for {field} in {path}")]
	UnexpectedCount {
		/// Count field name.
		field: &'static str,
		/// Count as stored in the payload.
		count: i64,
		/// Nesting path of the owning record.
		path: String,
	},
	/// Payload base lies outside the supplied buffer.
	#[error("payload base {base} exceeds buffer length {len}")]
	InvalidPayloadBase {
		/// Requested payload base.
		base: usize,
		/// Buffer length.
		len: usize,
	},
	/// Motion chain revisited an already walked entry.
	#[error("motion chain cycle at offset 0x{offset:x}")]
	MotionChainCycle {
		/// Offset of the revisited motion entry.
		offset: u64,
	},
}
