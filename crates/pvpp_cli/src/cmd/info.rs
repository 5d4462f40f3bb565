use crate::cmd::error::Result;
use crate::cmd::util::{DecodeArgs, emit_json, offset_hex};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Print header scalars and per-collection counts.
pub fn run(args: Args) -> Result<()> {
	let Args { decode, json } = args;

	let (file, options, doc) = decode.load()?;
	let summary = doc.summary();
	let header = doc.header;
	let block = doc.song_effect_block.unwrap_or_default();

	if json {
		emit_json(&InfoJson {
			path: decode.file.display().to_string(),
			size: file.bytes().len(),
			base: options.base,
			endianness: options.endianness.as_str(),
			unknown_20: header.unknown_20,
			unknown_25: header.unknown_25,
			unknown_offset: offset_hex(header.unknown_offset),
			song_effect_block: doc.song_effect_block.is_some(),
			unknown_40: block.unknown_40,
			unknown_42: block.unknown_42,
			unknown_44: block.unknown_44,
			chara_entries: summary.chara_entries,
			song_effects: summary.song_effects,
			chara_eff_entries: summary.chara_eff_entries,
			motions: summary.motions,
			auth3d: summary.auth3d,
			items: summary.items,
			glitter: summary.glitter,
		});
		return Ok(());
	}

	println!("path: {}", decode.file.display());
	println!("size: {}", file.bytes().len());
	println!("base: {}", options.base);
	println!("endianness: {}", options.endianness.as_str());
	println!("unknown_20: {}", header.unknown_20);
	println!("unknown_25: {:?}", header.unknown_25);
	println!("unknown_offset: {}", offset_hex(header.unknown_offset));
	println!("song_effect_block: {}", doc.song_effect_block.is_some());
	println!("unknown_40: {}", block.unknown_40);
	println!("unknown_42: {:?}", block.unknown_42);
	println!("unknown_44: {}", block.unknown_44);
	println!("chara_entries: {}", summary.chara_entries);
	println!("song_effects: {}", summary.song_effects);
	println!("chara_eff_entries: {}", summary.chara_eff_entries);
	println!("motions: {}", summary.motions);
	println!("auth3d: {}", summary.auth3d);
	println!("items: {}", summary.items);
	println!("glitter: {}", summary.glitter);

	Ok(())
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	size: usize,
	base: usize,
	endianness: &'static str,
	unknown_20: u32,
	unknown_25: [i8; 3],
	unknown_offset: String,
	song_effect_block: bool,
	unknown_40: i8,
	unknown_42: [i8; 2],
	unknown_44: i32,
	chara_entries: usize,
	song_effects: usize,
	chara_eff_entries: usize,
	motions: usize,
	auth3d: usize,
	items: usize,
	glitter: usize,
}
