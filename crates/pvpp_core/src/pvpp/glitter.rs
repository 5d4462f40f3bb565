use crate::pvpp::Result;
use crate::pvpp::bytes::Cursor;
use crate::pvpp::strings::{read_name, read_string_at};

/// A particle-effect reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlitterEntry {
	/// Effect name, empty when absent.
	pub name: String,
	/// Auxiliary name.
	pub aux_name: Option<String>,
	/// Unknown flag byte.
	pub flag: i8,
}

impl GlitterEntry {
	/// On-disk record size. Entries are packed without alignment padding.
	pub const STRIDE: usize = 17;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let name_offset = cursor.read_offset()?;
		let aux_offset = cursor.read_offset()?;
		let flag = cursor.read_i8()?;

		let name = read_name(cursor, "name", name_offset)?;
		let aux_name = read_string_at(cursor, "aux_name", aux_offset)?;
		Ok(Self { name, aux_name, flag })
	}
}
