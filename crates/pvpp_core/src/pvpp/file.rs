use std::fs;
use std::path::Path;

use crate::pvpp::{ChainOptions, DecodeOptions, Document, MotionChain, Result, walk_motion_chain};

/// An in-memory payload buffer, loaded once and read-only afterwards.
pub struct PvppFile {
	bytes: Vec<u8>,
}

impl PvppFile {
	/// Read a whole payload file from disk.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let bytes = fs::read(path)?;
		tracing::debug!(path = %path.display(), len = bytes.len(), "loaded payload");
		Ok(Self { bytes })
	}

	/// Wrap an already loaded buffer.
	pub fn from_bytes(bytes: Vec<u8>) -> Self {
		Self { bytes }
	}

	/// Return the raw buffer.
	pub fn bytes(&self) -> &[u8] {
		&self.bytes
	}

	/// Decode the whole document.
	pub fn decode(&self, options: &DecodeOptions) -> Result<Document> {
		Document::decode(&self.bytes, options)
	}

	/// Walk a motion chain starting at a stored offset.
	pub fn motion_chain(&self, start_offset: u64, decode: &DecodeOptions, options: &ChainOptions) -> Result<MotionChain> {
		walk_motion_chain(&self.bytes, start_offset, decode, options)
	}
}
