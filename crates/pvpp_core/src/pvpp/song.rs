use crate::pvpp::bytes::Cursor;
use crate::pvpp::{GlitterEntry, NamedReference, PerformerSlot, Result};

/// Audio/visual effect binding for one performer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongEffect {
	/// Owning performer slot.
	pub performer: PerformerSlot,
	/// Auth3d animation references in file order.
	pub auth3d: Vec<NamedReference>,
	/// Particle effects in file order.
	pub glitter: Vec<GlitterEntry>,
}

impl SongEffect {
	/// On-disk record size.
	pub const STRIDE: usize = 24;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let auth3d_count = cursor.read_count("auth3d_count")?;
		let glitter_count = cursor.read_count("glitter_count")?;
		let performer = PerformerSlot::from_raw(cursor.read_i8()?);
		cursor.skip(5)?;
		let auth3d_offset = cursor.read_offset()?;
		let glitter_offset = cursor.read_offset()?;

		let auth3d = cursor.read_array("auth3d", auth3d_offset, auth3d_count, NamedReference::STRIDE, NamedReference::parse)?;
		let glitter = cursor.read_array("glitter", glitter_offset, glitter_count, GlitterEntry::STRIDE, GlitterEntry::parse)?;

		Ok(Self { performer, auth3d, glitter })
	}
}
