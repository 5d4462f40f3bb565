use std::fmt::Write as _;

use crate::pvpp::{DecodeOptions, Endianness, PvppError, Result};

/// Stored offset value meaning "no child".
pub const ABSENT_OFFSET: u64 = 0;

#[derive(Debug, Clone, Copy)]
enum PathSegment {
	Field(&'static str),
	Index(usize),
}

/// Bounded read cursor over an immutable payload buffer.
///
/// Positions are absolute within the buffer. The cursor only moves forward
/// through fixed-width reads; jumps to stored offsets go through
/// [`Cursor::at_offset`], which restores the position afterwards.
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
	base: usize,
	endianness: Endianness,
	strict_counts: bool,
	path: Vec<PathSegment>,
}

macro_rules! read_fixed {
	($name:ident, $ty:ty, $doc:literal) => {
		#[doc = $doc]
		pub fn $name(&mut self) -> Result<$ty> {
			let raw = self.read_exact(std::mem::size_of::<$ty>())?;
			let mut buf = [0_u8; std::mem::size_of::<$ty>()];
			buf.copy_from_slice(raw);
			Ok(match self.endianness {
				Endianness::Little => <$ty>::from_le_bytes(buf),
				Endianness::Big => <$ty>::from_be_bytes(buf),
			})
		}
	};
}

impl<'a> Cursor<'a> {
	/// Create a little-endian cursor at position 0 with base 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self {
			bytes,
			pos: 0,
			base: 0,
			endianness: Endianness::Little,
			strict_counts: false,
			path: Vec::new(),
		}
	}

	/// Create a cursor positioned at `options.base`.
	pub fn with_options(bytes: &'a [u8], options: &DecodeOptions) -> Result<Self> {
		if options.base > bytes.len() {
			return Err(PvppError::InvalidPayloadBase {
				base: options.base,
				len: bytes.len(),
			});
		}

		Ok(Self {
			bytes,
			pos: options.base,
			base: options.base,
			endianness: options.endianness,
			strict_counts: options.strict_counts,
			path: Vec::new(),
		})
	}

	/// Return current absolute byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return the payload base offsets are relative to.
	pub fn base(&self) -> usize {
		self.base
	}

	/// Return total buffer length.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Return whether the buffer is empty.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Render the current nesting path, `root` when at top level.
	pub fn path_label(&self) -> String {
		let mut out = String::from("root");
		for segment in &self.path {
			match segment {
				PathSegment::Field(name) => {
					out.push('.');
					out.push_str(name);
				}
				PathSegment::Index(index) => {
					let _ = write!(out, "[{index}]");
				}
			}
		}
		out
	}

	fn path_with(&self, field: &'static str) -> String {
		format!("{}.{field}", self.path_label())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(PvppError::OutOfBounds {
				at: self.pos,
				need: n,
				rem: self.remaining(),
				path: self.path_label(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Skip `n` padding bytes.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Read a signed byte.
	pub fn read_i8(&mut self) -> Result<i8> {
		Ok(i8::from_ne_bytes([self.read_u8()?]))
	}

	/// Read an unsigned byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	read_fixed!(read_i16, i16, "Read an `i16` in payload byte order.");
	read_fixed!(read_u16, u16, "Read a `u16` in payload byte order.");
	read_fixed!(read_i32, i32, "Read an `i32` in payload byte order.");
	read_fixed!(read_u32, u32, "Read a `u32` in payload byte order.");
	read_fixed!(read_i64, i64, "Read an `i64` in payload byte order.");
	read_fixed!(read_u64, u64, "Read a `u64` in payload byte order.");
	read_fixed!(read_f32, f32, "Read an IEEE-754 `f32` in payload byte order.");

	/// Read a stored 64-bit offset. The value is relative to the payload base
	/// and is not validated until dereferenced.
	pub fn read_offset(&mut self) -> Result<u64> {
		self.read_u64()
	}

	/// Read a signed-byte array count.
	///
	/// Negative counts fail with [`PvppError::UnexpectedCount`].
	pub fn read_count(&mut self, field: &'static str) -> Result<usize> {
		let raw = self.read_i8()?;
		self.count_from(field, raw)
	}

	/// Validate a count byte that was read as part of a larger header.
	pub fn count_from(&self, field: &'static str, raw: i8) -> Result<usize> {
		usize::try_from(raw).map_err(|_| PvppError::UnexpectedCount {
			field,
			count: i64::from(raw),
			path: self.path_label(),
		})
	}

	/// Read a zero-terminated byte run without the terminator.
	pub fn read_cstring_bytes(&mut self) -> Result<&'a [u8]> {
		let start = self.pos;
		let rem = self.bytes.get(start..).unwrap_or_default();
		let Some(rel_end) = rem.iter().position(|byte| *byte == 0) else {
			return Err(PvppError::MalformedString {
				at: start,
				path: self.path_label(),
			});
		};

		let end = start + rel_end;
		self.pos = end + 1;
		Ok(&self.bytes[start..end])
	}

	/// Run `body` with the cursor relocated to the stored `offset`.
	///
	/// Absent offsets return `Ok(None)` without invoking `body`. Offsets that
	/// land outside the buffer fail with [`PvppError::InvalidOffset`]. The
	/// cursor position and nesting path are restored whether `body` succeeds
	/// or fails.
	pub fn at_offset<T>(&mut self, field: &'static str, offset: u64, body: impl FnOnce(&mut Self) -> Result<T>) -> Result<Option<T>> {
		if offset == ABSENT_OFFSET {
			return Ok(None);
		}

		let target = self.resolve(offset).ok_or_else(|| PvppError::InvalidOffset {
			offset,
			len: self.bytes.len(),
			path: self.path_with(field),
		})?;

		let saved = self.pos;
		let depth = self.path.len();
		self.path.push(PathSegment::Field(field));
		tracing::trace!(offset, target, path = %self.path_label(), "dereference");

		self.pos = target;
		let result = body(self);

		self.path.truncate(depth);
		self.pos = saved;
		result.map(Some)
	}

	/// Decode `count` consecutive records of `stride` bytes at `offset`.
	///
	/// An absent offset yields an empty list. In strict mode an absent offset
	/// with a non-zero count, or a count whose records would run past the
	/// buffer end, fails with [`PvppError::UnexpectedCount`].
	pub fn read_array<T>(
		&mut self,
		field: &'static str,
		offset: u64,
		count: usize,
		stride: usize,
		mut read: impl FnMut(&mut Self) -> Result<T>,
	) -> Result<Vec<T>> {
		if self.strict_counts && offset == ABSENT_OFFSET && count > 0 {
			return Err(self.count_error(field, count));
		}

		let items = self.at_offset(field, offset, |cursor| {
			if cursor.strict_counts && count.checked_mul(stride).is_none_or(|need| need > cursor.remaining()) {
				return Err(cursor.count_error(field, count));
			}

			let mut items = Vec::with_capacity(count);
			for index in 0..count {
				cursor.path.push(PathSegment::Index(index));
				let item = read(cursor);
				cursor.path.pop();
				items.push(item?);
			}
			Ok(items)
		})?;

		Ok(items.unwrap_or_default())
	}

	fn count_error(&self, field: &'static str, count: usize) -> PvppError {
		PvppError::UnexpectedCount {
			field,
			count: i64::try_from(count).unwrap_or(i64::MAX),
			path: self.path_label(),
		}
	}

	fn resolve(&self, offset: u64) -> Option<usize> {
		let offset = usize::try_from(offset).ok()?;
		let target = self.base.checked_add(offset)?;
		(target < self.bytes.len()).then_some(target)
	}
}

#[cfg(test)]
mod tests;
