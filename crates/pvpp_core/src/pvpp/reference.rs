use crate::pvpp::Result;
use crate::pvpp::bytes::Cursor;
use crate::pvpp::strings::read_name;

/// A string name paired with a numeric id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NamedReference {
	/// Resolved name, empty when the name offset is absent.
	pub name: String,
	/// Numeric id.
	pub id: i64,
}

impl NamedReference {
	/// On-disk record size.
	pub const STRIDE: usize = 16;

	/// Decode one record at the cursor.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let name_offset = cursor.read_offset()?;
		let id = cursor.read_i64()?;
		let name = read_name(cursor, "name", name_offset)?;
		Ok(Self { name, id })
	}

	/// Decode one record stored out-of-line at `offset`.
	pub(crate) fn parse_at(cursor: &mut Cursor<'_>, field: &'static str, offset: u64) -> Result<Option<Self>> {
		cursor.at_offset(field, offset, Self::parse)
	}
}
