use pvpp::pvpp::{CharaEffEntry, CharaEntry, Document, GlitterEntry, ItemEntry, MotionEntry, NamedReference, SongEffect};
use serde_json::{Value as JsonValue, json};

use crate::cmd::error::Result;
use crate::cmd::util::{DecodeArgs, emit_json, offset_hex};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub decode: DecodeArgs,
	#[arg(long)]
	pub json: bool,
}

/// Decode and print the whole document tree.
pub fn run(args: Args) -> Result<()> {
	let Args { decode, json } = args;
	let (_, _, doc) = decode.load()?;

	if json {
		emit_json(&document_json(&doc));
		return Ok(());
	}

	println!("path: {}", decode.file.display());
	print_document(&doc);
	Ok(())
}

fn document_json(doc: &Document) -> JsonValue {
	json!({
		"header": {
			"unknown_20": doc.header.unknown_20,
			"chara_entry_count": doc.header.chara_entry_count,
			"unknown_25": doc.header.unknown_25,
			"unknown_offset": offset_hex(doc.header.unknown_offset),
		},
		"song_effect_block": doc.song_effect_block.map(|block| json!({
			"unknown_40": block.unknown_40,
			"song_effect_count": block.song_effect_count,
			"unknown_42": block.unknown_42,
			"unknown_44": block.unknown_44,
		})),
		"song_effects": doc.song_effects.iter().map(song_effect_json).collect::<Vec<_>>(),
		"chara_entries": doc.chara_entries.iter().map(chara_entry_json).collect::<Vec<_>>(),
	})
}

fn named_json(item: &NamedReference) -> JsonValue {
	json!({ "name": item.name, "id": item.id })
}

fn glitter_json(item: &GlitterEntry) -> JsonValue {
	json!({ "name": item.name, "aux_name": item.aux_name, "flag": item.flag })
}

fn song_effect_json(effect: &SongEffect) -> JsonValue {
	json!({
		"performer": effect.performer.as_str(),
		"performer_raw": effect.performer.raw(),
		"auth3d": effect.auth3d.iter().map(named_json).collect::<Vec<_>>(),
		"glitter": effect.glitter.iter().map(glitter_json).collect::<Vec<_>>(),
	})
}

fn chara_eff_json(entry: &CharaEffEntry) -> JsonValue {
	json!({
		"character": entry.character.as_str(),
		"character_raw": entry.character.raw(),
		"performer": entry.performer.as_str(),
		"auth3d": entry.auth3d.iter().map(|binding| json!({
			"unknown": binding.unknown,
			"chara_eff": binding.chara_eff.as_ref().map(named_json),
			"source": binding.source.as_ref().map(named_json),
		})).collect::<Vec<_>>(),
	})
}

fn motion_json(entry: &MotionEntry) -> JsonValue {
	json!({
		"motion": entry.motion.as_ref().map(named_json),
		"next_motion_offset": offset_hex(entry.next_motion_offset),
	})
}

fn item_json(item: &ItemEntry) -> JsonValue {
	json!({
		"kind": item.kind.as_str(),
		"kind_raw": item.kind.raw(),
		"unknown": item.unknown,
		"unknown_i32": item.unknown_i32,
		"placement": [item.placement.x, item.placement.y, item.placement.z, item.placement.w],
		"auth3d": item.auth3d.as_ref().map(named_json),
		"node": item.node,
	})
}

fn chara_entry_json(entry: &CharaEntry) -> JsonValue {
	json!({
		"header": entry.header,
		"chara_eff": entry.chara_eff.as_ref().map(chara_eff_json),
		"motions": entry.motions.iter().map(motion_json).collect::<Vec<_>>(),
		"auth3d": entry.auth3d.iter().map(named_json).collect::<Vec<_>>(),
		"items": entry.items.iter().map(item_json).collect::<Vec<_>>(),
		"glitter": entry.glitter.iter().map(glitter_json).collect::<Vec<_>>(),
		"extra_offset": offset_hex(entry.extra_offset),
	})
}

fn print_document(doc: &Document) {
	println!("unknown_20: {}", doc.header.unknown_20);
	println!("unknown_25: {:?}", doc.header.unknown_25);
	println!("unknown_offset: {}", offset_hex(doc.header.unknown_offset));

	println!("song_effects: {}", doc.song_effects.len());
	for (index, effect) in doc.song_effects.iter().enumerate() {
		println!("  [{index}] performer={}", effect.performer.as_str());
		for item in &effect.auth3d {
			println!("    auth3d {}", named_label(item));
		}
		for item in &effect.glitter {
			println!("    glitter {}", glitter_label(item));
		}
	}

	println!("chara_entries: {}", doc.chara_entries.len());
	for (index, entry) in doc.chara_entries.iter().enumerate() {
		println!("  [{index}] header={:?} extra={}", entry.header, offset_hex(entry.extra_offset));
		if let Some(chara_eff) = &entry.chara_eff {
			println!("    chara_eff character={} performer={}", chara_eff.character.as_str(), chara_eff.performer.as_str());
			for binding in &chara_eff.auth3d {
				println!(
					"      {:?} {} <- {}",
					binding.unknown,
					binding.chara_eff.as_ref().map_or_else(|| "-".to_owned(), named_label),
					binding.source.as_ref().map_or_else(|| "-".to_owned(), named_label)
				);
			}
		}
		for motion in &entry.motions {
			println!(
				"    motion {} next={}",
				motion.motion.as_ref().map_or_else(|| "-".to_owned(), named_label),
				offset_hex(motion.next_motion_offset)
			);
		}
		for item in &entry.auth3d {
			println!("    auth3d {}", named_label(item));
		}
		for item in &entry.items {
			let p = item.placement;
			println!(
				"    item {} node={} auth3d={} at=({}, {}, {}, {})",
				item.kind.as_str(),
				item.node,
				item.auth3d.as_ref().map_or_else(|| "-".to_owned(), named_label),
				p.x,
				p.y,
				p.z,
				p.w
			);
		}
		for item in &entry.glitter {
			println!("    glitter {}", glitter_label(item));
		}
	}
}

fn named_label(item: &NamedReference) -> String {
	format!("{}#{}", item.name, item.id)
}

fn glitter_label(item: &GlitterEntry) -> String {
	match &item.aux_name {
		Some(aux) => format!("{} ({aux}) flag={}", item.name, item.flag),
		None => format!("{} flag={}", item.name, item.flag),
	}
}
