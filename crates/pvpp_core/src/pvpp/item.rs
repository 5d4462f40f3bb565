use crate::pvpp::bytes::Cursor;
use crate::pvpp::strings::read_name;
use crate::pvpp::{ItemKind, NamedReference, Result};

/// Position and orientation of an attached item.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
	/// X component.
	pub x: f32,
	/// Y component.
	pub y: f32,
	/// Z component.
	pub z: f32,
	/// W component.
	pub w: f32,
}

/// An item attached to a character.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemEntry {
	/// Item kind.
	pub kind: ItemKind,
	/// Three bytes of unknown meaning following the kind.
	pub unknown: [i8; 3],
	/// Unknown 32-bit field.
	pub unknown_i32: i32,
	/// Placement floats, stored after the two offsets.
	pub placement: Placement,
	/// Auth3d reference.
	pub auth3d: Option<NamedReference>,
	/// Attachment node name, empty when absent.
	pub node: String,
}

impl ItemEntry {
	/// On-disk record size.
	pub const STRIDE: usize = 40;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let kind = ItemKind::from_raw(cursor.read_i8()?);
		let unknown = [cursor.read_i8()?, cursor.read_i8()?, cursor.read_i8()?];
		let unknown_i32 = cursor.read_i32()?;
		let auth3d_offset = cursor.read_offset()?;
		let node_offset = cursor.read_offset()?;
		let placement = Placement {
			x: cursor.read_f32()?,
			y: cursor.read_f32()?,
			z: cursor.read_f32()?,
			w: cursor.read_f32()?,
		};

		let auth3d = NamedReference::parse_at(cursor, "auth3d", auth3d_offset)?;
		let node = read_name(cursor, "node", node_offset)?;
		Ok(Self {
			kind,
			unknown,
			unknown_i32,
			placement,
			auth3d,
			node,
		})
	}
}
