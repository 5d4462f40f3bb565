use crate::pvpp::bytes::Cursor;
use crate::pvpp::{NamedReference, Result};

/// One node in a motion chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionEntry {
	/// Motion reference, `None` when its offset is absent.
	pub motion: Option<NamedReference>,
	/// Raw offset of the next motion entry. Not followed during decode;
	/// see [`crate::pvpp::walk_motion_chain`].
	pub next_motion_offset: u64,
}

impl MotionEntry {
	/// On-disk record size.
	pub const STRIDE: usize = 16;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let motion_offset = cursor.read_offset()?;
		let next_motion_offset = cursor.read_offset()?;
		let motion = NamedReference::parse_at(cursor, "motion", motion_offset)?;
		Ok(Self { motion, next_motion_offset })
	}
}
