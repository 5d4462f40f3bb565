//! Shared test helpers for workspace crates.
//!
//! [`PayloadBuilder`] lays out synthetic payloads byte by byte. Offset fields
//! are written as placeholders and patched once their targets exist.
//! [`sample_payload`] writes a small but complete document used across the
//! workspace tests.

mod sample;

pub use sample::{SAMPLE_EXTRA_OFFSET, SAMPLE_NEXT_MOTION_OFFSET, SAMPLE_UNKNOWN_OFFSET, sample_payload};

/// Handle to an 8-byte offset placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot(usize);

/// Append-only payload writer with back-patched offsets.
#[derive(Debug, Clone)]
pub struct PayloadBuilder {
	bytes: Vec<u8>,
	base: usize,
	big_endian: bool,
}

impl Default for PayloadBuilder {
	fn default() -> Self {
		Self::new()
	}
}

macro_rules! put {
	($name:ident, $ty:ty) => {
		/// Append one value in the builder's byte order.
		pub fn $name(&mut self, value: $ty) -> &mut Self {
			if self.big_endian {
				self.bytes.extend_from_slice(&value.to_be_bytes());
			} else {
				self.bytes.extend_from_slice(&value.to_le_bytes());
			}
			self
		}
	};
}

impl PayloadBuilder {
	/// Little-endian builder with base 0.
	pub fn new() -> Self {
		Self {
			bytes: Vec::new(),
			base: 0,
			big_endian: false,
		}
	}

	/// Big-endian builder with base 0.
	pub fn big_endian() -> Self {
		Self {
			big_endian: true,
			..Self::new()
		}
	}

	/// Little-endian builder whose payload starts after `prefix` filler bytes.
	pub fn with_base(prefix: usize) -> Self {
		Self {
			bytes: vec![0xCC; prefix],
			base: prefix,
			big_endian: false,
		}
	}

	/// Current position relative to the payload base.
	pub fn pos(&self) -> u64 {
		(self.bytes.len() - self.base) as u64
	}

	/// Payload base within the finished buffer.
	pub fn base(&self) -> usize {
		self.base
	}

	put!(i8, i8);
	put!(u8, u8);
	put!(i16, i16);
	put!(u16, u16);
	put!(i32, i32);
	put!(u32, u32);
	put!(i64, i64);
	put!(u64, u64);
	put!(f32, f32);

	/// Append a literal offset value.
	pub fn offset(&mut self, value: u64) -> &mut Self {
		self.u64(value)
	}

	/// Append raw bytes.
	pub fn raw(&mut self, bytes: &[u8]) -> &mut Self {
		self.bytes.extend_from_slice(bytes);
		self
	}

	/// Append `n` zero bytes.
	pub fn zeros(&mut self, n: usize) -> &mut Self {
		self.bytes.resize(self.bytes.len() + n, 0);
		self
	}

	/// Append an absent offset to patch later.
	pub fn placeholder(&mut self) -> Slot {
		let slot = Slot(self.bytes.len());
		self.zeros(8);
		slot
	}

	/// Overwrite a placeholder with `value`.
	pub fn patch(&mut self, slot: Slot, value: u64) -> &mut Self {
		let raw = if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() };
		self.bytes[slot.0..slot.0 + 8].copy_from_slice(&raw);
		self
	}

	/// Patch a placeholder to point at the current position.
	pub fn patch_here(&mut self, slot: Slot) -> u64 {
		let here = self.pos();
		self.patch(slot, here);
		here
	}

	/// Append a null-terminated string and return its offset.
	pub fn cstring(&mut self, text: &str) -> u64 {
		let at = self.pos();
		self.bytes.extend_from_slice(text.as_bytes());
		self.bytes.push(0);
		at
	}

	/// Append an array of name/id records followed by their strings.
	pub fn named_refs(&mut self, items: &[(&str, i64)]) -> u64 {
		let start = self.pos();
		let slots: Vec<Slot> = items
			.iter()
			.map(|(_, id)| {
				let slot = self.placeholder();
				self.i64(*id);
				slot
			})
			.collect();

		for (slot, (name, _)) in slots.into_iter().zip(items) {
			let at = self.cstring(name);
			self.patch(slot, at);
		}
		start
	}

	/// Append an array of packed glitter records followed by their strings.
	pub fn glitter(&mut self, items: &[(&str, Option<&str>, i8)]) -> u64 {
		let start = self.pos();
		let slots: Vec<(Slot, Slot)> = items
			.iter()
			.map(|(_, _, flag)| {
				let name = self.placeholder();
				let aux = self.placeholder();
				self.i8(*flag);
				(name, aux)
			})
			.collect();

		for ((name_slot, aux_slot), (name, aux, _)) in slots.into_iter().zip(items) {
			let at = self.cstring(name);
			self.patch(name_slot, at);
			if let Some(aux) = aux {
				let at = self.cstring(aux);
				self.patch(aux_slot, at);
			}
		}
		start
	}

	/// Append an array of motion records with the given raw next offsets,
	/// followed by their name/id records.
	pub fn motions(&mut self, items: &[(&str, i64, u64)]) -> u64 {
		let start = self.pos();
		let slots: Vec<Slot> = items
			.iter()
			.map(|(_, _, next)| {
				let slot = self.placeholder();
				self.offset(*next);
				slot
			})
			.collect();

		for (slot, (name, id, _)) in slots.into_iter().zip(items) {
			let at = self.named_refs(&[(*name, *id)]);
			self.patch(slot, at);
		}
		start
	}

	/// Finish and return the whole buffer, prefix included.
	pub fn finish(&self) -> Vec<u8> {
		self.bytes.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::PayloadBuilder;

	#[test]
	fn named_refs_patch_string_offsets() {
		let mut builder = PayloadBuilder::new();
		builder.u64(0xFFFF);
		let start = builder.named_refs(&[("a", 7)]);
		let bytes = builder.finish();

		assert_eq!(start, 8);
		assert_eq!(&bytes[8..16], &24_u64.to_le_bytes());
		assert_eq!(&bytes[16..24], &7_i64.to_le_bytes());
		assert_eq!(&bytes[24..26], b"a\0");
	}

	#[test]
	fn base_prefix_is_excluded_from_positions() {
		let mut builder = PayloadBuilder::with_base(4);
		assert_eq!(builder.pos(), 0);
		builder.u32(1);
		assert_eq!(builder.pos(), 4);
		assert_eq!(builder.finish().len(), 8);
	}
}
