/// Byte order of fixed-width fields in the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
	/// Little-endian byte order.
	#[default]
	Little,
	/// Big-endian byte order.
	Big,
}

impl Endianness {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Little => "little",
			Self::Big => "big",
		}
	}
}

/// Options controlling a single document decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Byte order established by the enclosing section.
	pub endianness: Endianness,
	/// Payload start within the buffer; stored offsets are relative to it.
	pub base: usize,
	/// Reject counts whose records cannot fit in the buffer, and counts paired with absent offsets.
	pub strict_counts: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			endianness: Endianness::Little,
			base: 0,
			strict_counts: false,
		}
	}
}

impl DecodeOptions {
	/// Preset for big-endian payloads.
	pub fn big_endian() -> Self {
		Self {
			endianness: Endianness::Big,
			..Self::default()
		}
	}
}

/// Action when a motion chain revisits an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopMode {
	/// Stop traversal and report the reason.
	Stop,
	/// Abort with an error.
	Error,
}

/// Options for lazy motion-chain resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainOptions {
	/// Maximum number of motion entries to decode.
	pub max_steps: usize,
	/// Action when an entry is visited twice.
	pub on_cycle: StopMode,
}

impl Default for ChainOptions {
	fn default() -> Self {
		Self {
			max_steps: 256,
			on_cycle: StopMode::Stop,
		}
	}
}
