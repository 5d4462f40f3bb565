use pvpp::pvpp::{ChainOptions, ChainStopReason, StopMode};

use crate::cmd::error::{CliError, Result};
use crate::cmd::util::{DecodeArgs, emit_json, offset_hex};

#[derive(clap::Args)]
pub struct Args {
	#[command(flatten)]
	pub decode: DecodeArgs,
	/// Character entry index.
	#[arg(long)]
	pub chara: usize,
	/// Motion index within the character entry; the walk follows its next link.
	#[arg(long)]
	pub motion: usize,
	#[arg(long = "max-steps", default_value_t = 256)]
	pub max_steps: usize,
	/// Fail instead of stopping when the chain loops.
	#[arg(long = "error-on-cycle")]
	pub error_on_cycle: bool,
	#[arg(long)]
	pub json: bool,
}

/// Walk the motion chain that continues after one decoded motion entry.
pub fn run(args: Args) -> Result<()> {
	let Args {
		decode,
		chara,
		motion,
		max_steps,
		error_on_cycle,
		json,
	} = args;

	let (file, options, doc) = decode.load()?;
	let entry = doc.chara_entries.get(chara).ok_or(CliError::IndexOutOfRange {
		kind: "chara entry",
		index: chara,
		len: doc.chara_entries.len(),
	})?;
	let start = entry.motions.get(motion).ok_or(CliError::IndexOutOfRange {
		kind: "motion",
		index: motion,
		len: entry.motions.len(),
	})?;

	let chain_options = ChainOptions {
		max_steps,
		on_cycle: if error_on_cycle { StopMode::Error } else { StopMode::Stop },
	};
	let chain = file.motion_chain(start.next_motion_offset, &options, &chain_options)?;

	if json {
		emit_json(&ChainJson {
			chara,
			motion,
			start_offset: offset_hex(start.next_motion_offset),
			items: chain
				.items
				.iter()
				.map(|item| ChainItemJson {
					index: item.index,
					offset: offset_hex(item.offset),
					name: item.entry.motion.as_ref().map(|motion| motion.name.clone()),
					id: item.entry.motion.as_ref().map(|motion| motion.id),
					next_motion_offset: offset_hex(item.entry.next_motion_offset),
				})
				.collect(),
			stop_step: chain.stop.step,
			stop_reason: stop_reason_label(chain.stop.reason),
		});
		return Ok(());
	}

	println!("chara: {chara}");
	println!("motion: {motion}");
	println!("start_offset: {}", offset_hex(start.next_motion_offset));
	println!("items: {}", chain.items.len());
	println!("idx\toffset\tname\tid\tnext");
	for item in &chain.items {
		let (name, id) = match &item.entry.motion {
			Some(motion) => (motion.name.as_str(), motion.id.to_string()),
			None => ("-", "-".to_owned()),
		};
		println!(
			"{}\t{}\t{}\t{}\t{}",
			item.index,
			offset_hex(item.offset),
			name,
			id,
			offset_hex(item.entry.next_motion_offset)
		);
	}
	println!("stop_step: {}", chain.stop.step);
	println!("stop_reason: {}", stop_reason_label(chain.stop.reason));

	Ok(())
}

fn stop_reason_label(reason: ChainStopReason) -> String {
	match reason {
		ChainStopReason::Absent => "Absent".to_owned(),
		ChainStopReason::Cycle(offset) => format!("Cycle({})", offset_hex(offset)),
		ChainStopReason::StepLimit => "StepLimit".to_owned(),
	}
}

#[derive(serde::Serialize)]
struct ChainItemJson {
	index: usize,
	offset: String,
	name: Option<String>,
	id: Option<i64>,
	next_motion_offset: String,
}

#[derive(serde::Serialize)]
struct ChainJson {
	chara: usize,
	motion: usize,
	start_offset: String,
	items: Vec<ChainItemJson>,
	stop_step: usize,
	stop_reason: String,
}
