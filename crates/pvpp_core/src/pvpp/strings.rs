use crate::pvpp::Result;
use crate::pvpp::bytes::Cursor;

/// Decode a null-terminated string stored at `offset`.
///
/// Returns `None` for the absent offset. Each call decodes an independent
/// copy, even when two offsets alias the same bytes. Invalid UTF-8 is
/// replaced lossily.
pub fn read_string_at(cursor: &mut Cursor<'_>, field: &'static str, offset: u64) -> Result<Option<String>> {
	cursor.at_offset(field, offset, read_string)
}

/// Decode a null-terminated string at the current position.
pub fn read_string(cursor: &mut Cursor<'_>) -> Result<String> {
	let raw = cursor.read_cstring_bytes()?;
	Ok(String::from_utf8_lossy(raw).into_owned())
}

/// Decode the string at `offset`, empty when absent.
pub(crate) fn read_name(cursor: &mut Cursor<'_>, field: &'static str, offset: u64) -> Result<String> {
	Ok(read_string_at(cursor, field, offset)?.unwrap_or_default())
}
