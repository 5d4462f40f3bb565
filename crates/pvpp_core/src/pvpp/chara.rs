use crate::pvpp::bytes::Cursor;
use crate::pvpp::{CharaEffEntry, GlitterEntry, ItemEntry, MotionEntry, NamedReference, Result};

/// All per-character data for one slot.
#[derive(Debug, Clone, PartialEq)]
pub struct CharaEntry {
	/// The eight header bytes, counts included, preserved verbatim.
	pub header: [i8; 8],
	/// Character-effect bindings, when present.
	pub chara_eff: Option<CharaEffEntry>,
	/// Motion entries in file order.
	pub motions: Vec<MotionEntry>,
	/// Auth3d references in file order.
	pub auth3d: Vec<NamedReference>,
	/// Attached items in file order.
	pub items: Vec<ItemEntry>,
	/// Particle effects in file order.
	pub glitter: Vec<GlitterEntry>,
	/// Raw sixth offset. Its target is not interpreted.
	pub extra_offset: u64,
}

impl CharaEntry {
	/// On-disk record size.
	pub const STRIDE: usize = 56;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let mut header = [0_i8; 8];
		for slot in &mut header {
			*slot = cursor.read_i8()?;
		}
		let motion_count = cursor.count_from("motion_count", header[2])?;
		let auth3d_count = cursor.count_from("auth3d_count", header[3])?;
		let item_count = cursor.count_from("item_count", header[4])?;
		let glitter_count = cursor.count_from("glitter_count", header[6])?;

		let chara_eff_offset = cursor.read_offset()?;
		let motion_offset = cursor.read_offset()?;
		let auth3d_offset = cursor.read_offset()?;
		let item_offset = cursor.read_offset()?;
		let glitter_offset = cursor.read_offset()?;
		let extra_offset = cursor.read_offset()?;

		let chara_eff = cursor.at_offset("chara_eff", chara_eff_offset, CharaEffEntry::parse)?;
		let motions = cursor.read_array("motions", motion_offset, motion_count, MotionEntry::STRIDE, MotionEntry::parse)?;
		let auth3d = cursor.read_array("auth3d", auth3d_offset, auth3d_count, NamedReference::STRIDE, NamedReference::parse)?;
		let items = cursor.read_array("items", item_offset, item_count, ItemEntry::STRIDE, ItemEntry::parse)?;
		let glitter = cursor.read_array("glitter", glitter_offset, glitter_count, GlitterEntry::STRIDE, GlitterEntry::parse)?;

		Ok(Self {
			header,
			chara_eff,
			motions,
			auth3d,
			items,
			glitter,
			extra_offset,
		})
	}

	/// Motion count as stored in the header.
	pub fn motion_count(&self) -> i8 {
		self.header[2]
	}

	/// Auth3d count as stored in the header.
	pub fn auth3d_count(&self) -> i8 {
		self.header[3]
	}

	/// Item count as stored in the header.
	pub fn item_count(&self) -> i8 {
		self.header[4]
	}

	/// Glitter count as stored in the header.
	pub fn glitter_count(&self) -> i8 {
		self.header[6]
	}
}
