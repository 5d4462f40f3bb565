use std::collections::HashSet;

use crate::pvpp::bytes::{ABSENT_OFFSET, Cursor};
use crate::pvpp::{ChainOptions, DecodeOptions, MotionEntry, PvppError, Result, StopMode};

/// Why a motion-chain walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainStopReason {
	/// Next offset was absent.
	Absent,
	/// Next offset pointed at an already visited entry.
	Cycle(u64),
	/// `max_steps` entries were decoded and the chain continues.
	StepLimit,
}

/// Stop metadata with the step index it occurred at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainStop {
	/// Number of entries decoded before stopping.
	pub step: usize,
	/// Structured stop reason.
	pub reason: ChainStopReason,
}

/// One decoded entry of a motion chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainItem {
	/// Zero-based visit index.
	pub index: usize,
	/// Stored offset the entry was decoded from.
	pub offset: u64,
	/// Decoded motion entry.
	pub entry: MotionEntry,
}

/// Result of walking a motion chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotionChain {
	/// Visited entries in order.
	pub items: Vec<ChainItem>,
	/// Why the walk ended.
	pub stop: ChainStop,
}

/// Follow `next_motion_offset` links starting at `start_offset`.
///
/// Decoding never follows these links on its own; this walk is the lazy
/// resolution. Revisited offsets are detected with a visited set, and the
/// walk never decodes more than `options.max_steps` entries.
pub fn walk_motion_chain(bytes: &[u8], start_offset: u64, decode: &DecodeOptions, options: &ChainOptions) -> Result<MotionChain> {
	let mut cursor = Cursor::with_options(bytes, decode)?;
	let mut items = Vec::new();
	let mut visited = HashSet::new();
	let mut current = start_offset;

	for step in 0..options.max_steps {
		if !visited.insert(current) {
			return match options.on_cycle {
				StopMode::Stop => Ok(MotionChain {
					items,
					stop: ChainStop {
						step,
						reason: ChainStopReason::Cycle(current),
					},
				}),
				StopMode::Error => Err(PvppError::MotionChainCycle { offset: current }),
			};
		}

		let Some(entry) = cursor.at_offset("next_motion", current, MotionEntry::parse)? else {
			return Ok(MotionChain {
				items,
				stop: ChainStop {
					step,
					reason: ChainStopReason::Absent,
				},
			});
		};

		let next = entry.next_motion_offset;
		items.push(ChainItem {
			index: step,
			offset: current,
			entry,
		});
		current = next;
	}

	let reason = if current == ABSENT_OFFSET {
		ChainStopReason::Absent
	} else {
		ChainStopReason::StepLimit
	};
	Ok(MotionChain {
		stop: ChainStop {
			step: items.len(),
			reason,
		},
		items,
	})
}

/// Walk the chain continuing after `entry`.
pub fn walk_after(bytes: &[u8], entry: &MotionEntry, decode: &DecodeOptions, options: &ChainOptions) -> Result<MotionChain> {
	walk_motion_chain(bytes, entry.next_motion_offset, decode, options)
}

#[cfg(test)]
mod tests;
