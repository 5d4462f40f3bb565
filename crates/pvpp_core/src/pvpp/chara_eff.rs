use crate::pvpp::bytes::Cursor;
use crate::pvpp::{Character, NamedReference, PerformerSlot, Result};

/// A character-effect animation binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharaEffAuth3d {
	/// Eight bytes of unknown meaning, preserved verbatim.
	pub unknown: [i8; 8],
	/// Character-effect auth3d reference.
	pub chara_eff: Option<NamedReference>,
	/// Source auth3d reference.
	pub source: Option<NamedReference>,
}

impl CharaEffAuth3d {
	/// On-disk record size.
	pub const STRIDE: usize = 24;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let mut unknown = [0_i8; 8];
		for slot in &mut unknown {
			*slot = cursor.read_i8()?;
		}
		let chara_eff_offset = cursor.read_offset()?;
		let source_offset = cursor.read_offset()?;

		let chara_eff = NamedReference::parse_at(cursor, "chara_eff", chara_eff_offset)?;
		let source = NamedReference::parse_at(cursor, "source", source_offset)?;
		Ok(Self { unknown, chara_eff, source })
	}
}

/// All character-effect bindings for one base character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharaEffEntry {
	/// Base character.
	pub character: Character,
	/// Owning performer slot.
	pub performer: PerformerSlot,
	/// Bindings in file order.
	pub auth3d: Vec<CharaEffAuth3d>,
}

impl CharaEffEntry {
	/// On-disk header size; the offset follows the three bytes unaligned.
	pub const STRIDE: usize = 11;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let character = Character::from_raw(cursor.read_i8()?);
		let auth3d_count = cursor.read_count("auth3d_count")?;
		let performer = PerformerSlot::from_raw(cursor.read_i8()?);
		let auth3d_offset = cursor.read_offset()?;

		let auth3d = cursor.read_array("auth3d", auth3d_offset, auth3d_count, CharaEffAuth3d::STRIDE, CharaEffAuth3d::parse)?;
		Ok(Self {
			character,
			performer,
			auth3d,
		})
	}
}
