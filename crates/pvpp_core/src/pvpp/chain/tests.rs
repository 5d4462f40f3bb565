use pvpp_testkit::{PayloadBuilder, Slot};

use crate::pvpp::{ChainOptions, ChainStopReason, Cursor, DecodeOptions, MotionEntry, PvppError, StopMode, walk_after, walk_motion_chain};

/// Write motion entries linked by `links[i]` (an entry index, or `None` for
/// absent) and return each entry's offset.
fn linked_motions(links: &[Option<usize>]) -> (Vec<u8>, Vec<u64>) {
	let mut builder = PayloadBuilder::new();
	builder.u64(0);

	let mut offsets = Vec::new();
	let mut slots: Vec<(Slot, Slot)> = Vec::new();
	for _ in links {
		offsets.push(builder.pos());
		let name = builder.placeholder();
		let next = builder.placeholder();
		slots.push((name, next));
	}

	for (index, ((name, next), link)) in slots.into_iter().zip(links).enumerate() {
		let label = format!("MOT_{index}");
		let at = builder.named_refs(&[(label.as_str(), index as i64)]);
		builder.patch(name, at);
		if let Some(target) = link {
			builder.patch(next, offsets[*target]);
		}
	}

	(builder.finish(), offsets)
}

#[test]
fn walk_follows_three_node_chain_and_stops_on_absent() {
	let (bytes, offsets) = linked_motions(&[Some(1), Some(2), None]);

	let chain = walk_motion_chain(&bytes, offsets[0], &DecodeOptions::default(), &ChainOptions::default()).expect("walk succeeds");

	assert_eq!(chain.items.len(), 3);
	let names: Vec<_> = chain
		.items
		.iter()
		.map(|item| item.entry.motion.as_ref().map(|motion| motion.name.as_str()))
		.collect();
	assert_eq!(names, vec![Some("MOT_0"), Some("MOT_1"), Some("MOT_2")]);
	assert_eq!(chain.items[1].offset, offsets[1]);
	assert_eq!(chain.items[2].index, 2);
	assert_eq!(chain.stop.step, 3);
	assert_eq!(chain.stop.reason, ChainStopReason::Absent);
}

#[test]
fn walk_stops_on_cycle() {
	let (bytes, offsets) = linked_motions(&[Some(1), Some(0)]);

	let chain = walk_motion_chain(&bytes, offsets[0], &DecodeOptions::default(), &ChainOptions::default()).expect("walk succeeds");
	assert_eq!(chain.items.len(), 2);
	assert_eq!(chain.stop.step, 2);
	assert_eq!(chain.stop.reason, ChainStopReason::Cycle(offsets[0]));
}

#[test]
fn walk_cycle_can_be_an_error() {
	let (bytes, offsets) = linked_motions(&[Some(0)]);
	let options = ChainOptions {
		on_cycle: StopMode::Error,
		..ChainOptions::default()
	};

	let err = walk_motion_chain(&bytes, offsets[0], &DecodeOptions::default(), &options).expect_err("self cycle fails");
	assert!(matches!(err, PvppError::MotionChainCycle { offset } if offset == offsets[0]));
}

#[test]
fn walk_caps_steps() {
	let (bytes, offsets) = linked_motions(&[Some(1), Some(2), None]);
	let options = ChainOptions {
		max_steps: 2,
		..ChainOptions::default()
	};

	let chain = walk_motion_chain(&bytes, offsets[0], &DecodeOptions::default(), &options).expect("walk succeeds");
	assert_eq!(chain.items.len(), 2);
	assert_eq!(chain.stop.reason, ChainStopReason::StepLimit);

	let options = ChainOptions {
		max_steps: 3,
		..ChainOptions::default()
	};
	let chain = walk_motion_chain(&bytes, offsets[0], &DecodeOptions::default(), &options).expect("walk succeeds");
	assert_eq!(chain.stop.reason, ChainStopReason::Absent);
}

#[test]
fn walk_from_absent_offset_is_empty() {
	let (bytes, _) = linked_motions(&[None]);
	let chain = walk_motion_chain(&bytes, 0, &DecodeOptions::default(), &ChainOptions::default()).expect("walk succeeds");
	assert!(chain.items.is_empty());
	assert_eq!(chain.stop.step, 0);
	assert_eq!(chain.stop.reason, ChainStopReason::Absent);
}

#[test]
fn walk_rejects_invalid_next_offset() {
	let (bytes, _) = linked_motions(&[None]);
	let err = walk_motion_chain(&bytes, 0x10_0000, &DecodeOptions::default(), &ChainOptions::default()).expect_err("bad offset fails");
	match err {
		PvppError::InvalidOffset { offset, path, .. } => {
			assert_eq!(offset, 0x10_0000);
			assert_eq!(path, "root.next_motion");
		}
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn walk_after_continues_from_decoded_entry() {
	let (bytes, offsets) = linked_motions(&[Some(1), None]);

	let mut cursor = Cursor::new(&bytes);
	cursor.skip(offsets[0] as usize).expect("seek to first entry");
	let first = MotionEntry::parse(&mut cursor).expect("first entry decodes");
	assert_eq!(first.next_motion_offset, offsets[1]);

	let chain = walk_after(&bytes, &first, &DecodeOptions::default(), &ChainOptions::default()).expect("walk succeeds");
	assert_eq!(chain.items.len(), 1);
	assert_eq!(chain.items[0].entry.motion.as_ref().map(|motion| motion.id), Some(1));
}
