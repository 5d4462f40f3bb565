use crate::pvpp::bytes::Cursor;
use crate::pvpp::{CharaEntry, DecodeOptions, Result, SongEffect};

/// Scalars of the root record. Names follow the byte offsets they are
/// conventionally documented at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentHeader {
	/// Unknown leading word.
	pub unknown_20: u32,
	/// Character entry count as stored.
	pub chara_entry_count: i8,
	/// Three unknown bytes following the count.
	pub unknown_25: [i8; 3],
	/// Raw offset of the song-effect block.
	pub song_effect_block_offset: u64,
	/// Raw offset of the character entry array.
	pub chara_entries_offset: u64,
	/// Raw offset of an unexplored block. Not followed.
	pub unknown_offset: u64,
}

impl DocumentHeader {
	/// On-disk root record size.
	pub const SIZE: usize = 32;
}

/// Sub-header wrapping the song-effect array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SongEffectBlock {
	/// Unknown leading byte.
	pub unknown_40: i8,
	/// Song effect count as stored.
	pub song_effect_count: i8,
	/// Two unknown bytes following the count.
	pub unknown_42: [i8; 2],
	/// Unknown 32-bit field.
	pub unknown_44: i32,
	/// Raw offset of the song-effect array.
	pub song_effects_offset: u64,
}

impl SongEffectBlock {
	/// On-disk size, sub-header plus array offset.
	pub const SIZE: usize = 16;
}

/// A fully decoded performer-parameter payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
	/// Root record scalars.
	pub header: DocumentHeader,
	/// Song-effect block sub-header, when the block is present.
	pub song_effect_block: Option<SongEffectBlock>,
	/// Song effects in file order.
	pub song_effects: Vec<SongEffect>,
	/// Character entries in file order.
	pub chara_entries: Vec<CharaEntry>,
}

/// Per-collection element counts of a decoded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentSummary {
	/// Character entries.
	pub chara_entries: usize,
	/// Song effects.
	pub song_effects: usize,
	/// Character entries carrying a character-effect block.
	pub chara_eff_entries: usize,
	/// Motion entries across all characters.
	pub motions: usize,
	/// Auth3d references across characters, song effects, and character effects.
	pub auth3d: usize,
	/// Items across all characters.
	pub items: usize,
	/// Glitter entries across characters and song effects.
	pub glitter: usize,
}

impl Document {
	/// Decode the document rooted at `options.base`.
	pub fn decode(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		let mut cursor = Cursor::with_options(bytes, options)?;
		Self::parse(&mut cursor)
	}

	/// Decode the document rooted at the cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let unknown_20 = cursor.read_u32()?;
		let chara_entry_count = cursor.read_i8()?;
		let unknown_25 = [cursor.read_i8()?, cursor.read_i8()?, cursor.read_i8()?];
		let song_effect_block_offset = cursor.read_offset()?;
		let chara_entries_offset = cursor.read_offset()?;
		let unknown_offset = cursor.read_offset()?;
		let chara_count = cursor.count_from("chara_entry_count", chara_entry_count)?;

		let header = DocumentHeader {
			unknown_20,
			chara_entry_count,
			unknown_25,
			song_effect_block_offset,
			chara_entries_offset,
			unknown_offset,
		};

		let song = cursor.at_offset("song_effect_block", song_effect_block_offset, parse_song_effect_block)?;
		let (song_effect_block, song_effects) = match song {
			Some((block, effects)) => (Some(block), effects),
			None => (None, Vec::new()),
		};

		let chara_entries = cursor.read_array("chara_entries", chara_entries_offset, chara_count, CharaEntry::STRIDE, CharaEntry::parse)?;

		tracing::debug!(
			chara_entries = chara_entries.len(),
			song_effects = song_effects.len(),
			"decoded pvpp document"
		);

		Ok(Self {
			header,
			song_effect_block,
			song_effects,
			chara_entries,
		})
	}

	/// Count elements per collection.
	pub fn summary(&self) -> DocumentSummary {
		let mut summary = DocumentSummary {
			chara_entries: self.chara_entries.len(),
			song_effects: self.song_effects.len(),
			..DocumentSummary::default()
		};

		for effect in &self.song_effects {
			summary.auth3d += effect.auth3d.len();
			summary.glitter += effect.glitter.len();
		}

		for entry in &self.chara_entries {
			if let Some(chara_eff) = &entry.chara_eff {
				summary.chara_eff_entries += 1;
				summary.auth3d += chara_eff.auth3d.len();
			}
			summary.motions += entry.motions.len();
			summary.auth3d += entry.auth3d.len();
			summary.items += entry.items.len();
			summary.glitter += entry.glitter.len();
		}

		summary
	}
}

fn parse_song_effect_block(cursor: &mut Cursor<'_>) -> Result<(SongEffectBlock, Vec<SongEffect>)> {
	let unknown_40 = cursor.read_i8()?;
	let song_effect_count = cursor.read_i8()?;
	let unknown_42 = [cursor.read_i8()?, cursor.read_i8()?];
	let unknown_44 = cursor.read_i32()?;
	let song_effects_offset = cursor.read_offset()?;
	let count = cursor.count_from("song_effect_count", song_effect_count)?;

	tracing::debug!(count, song_effects_offset, "song effect block");
	let effects = cursor.read_array("song_effects", song_effects_offset, count, SongEffect::STRIDE, SongEffect::parse)?;

	let block = SongEffectBlock {
		unknown_40,
		song_effect_count,
		unknown_42,
		unknown_44,
		song_effects_offset,
	};
	Ok((block, effects))
}
