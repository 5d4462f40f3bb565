use pvpp_testkit::PayloadBuilder;

use crate::pvpp::{Cursor, DecodeOptions, Endianness, PvppError, Result, read_string_at};

#[test]
fn fixed_width_reads_advance_by_type_width() {
	let mut builder = PayloadBuilder::new();
	builder.i8(-2).u8(0xAB).i16(-300).u16(0xBEEF).i32(-70_000).u32(0xDEAD_BEEF).i64(-5).u64(9).f32(1.5);
	let bytes = builder.finish();

	let mut cursor = Cursor::new(&bytes);
	assert_eq!(cursor.read_i8().expect("i8"), -2);
	assert_eq!(cursor.pos(), 1);
	assert_eq!(cursor.read_u8().expect("u8"), 0xAB);
	assert_eq!(cursor.read_i16().expect("i16"), -300);
	assert_eq!(cursor.pos(), 4);
	assert_eq!(cursor.read_u16().expect("u16"), 0xBEEF);
	assert_eq!(cursor.read_i32().expect("i32"), -70_000);
	assert_eq!(cursor.read_u32().expect("u32"), 0xDEAD_BEEF);
	assert_eq!(cursor.pos(), 14);
	assert_eq!(cursor.read_i64().expect("i64"), -5);
	assert_eq!(cursor.read_u64().expect("u64"), 9);
	assert_eq!(cursor.read_f32().expect("f32"), 1.5);
	assert_eq!(cursor.pos(), bytes.len());
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn big_endian_reads_use_selected_order() {
	let mut builder = PayloadBuilder::big_endian();
	builder.u32(0x0102_0304).offset(0x10);
	let bytes = builder.finish();
	assert_eq!(&bytes[0..4], &[1, 2, 3, 4]);

	let options = DecodeOptions {
		endianness: Endianness::Big,
		..DecodeOptions::default()
	};
	let mut cursor = Cursor::with_options(&bytes, &options).expect("cursor builds");
	assert_eq!(cursor.read_u32().expect("u32"), 0x0102_0304);
	assert_eq!(cursor.read_offset().expect("offset"), 0x10);
}

#[test]
fn read_past_end_is_out_of_bounds() {
	let bytes = [1_u8, 2, 3];
	let mut cursor = Cursor::new(&bytes);
	cursor.read_u8().expect("first byte");

	let err = cursor.read_u32().expect_err("short read fails");
	assert!(matches!(err, PvppError::OutOfBounds { at: 1, need: 4, rem: 2, .. }));
	assert_eq!(cursor.pos(), 1);
}

#[test]
fn absent_offset_skips_body() {
	let bytes = [0_u8; 8];
	let mut cursor = Cursor::new(&bytes);
	let mut called = false;

	let value = cursor
		.at_offset("child", 0, |_| {
			called = true;
			Ok(1)
		})
		.expect("absent offset is not an error");

	assert_eq!(value, None);
	assert!(!called);
	assert_eq!(cursor.pos(), 0);
}

#[test]
fn offset_past_end_is_invalid_offset_with_path() {
	let bytes = [0_u8; 16];
	let mut cursor = Cursor::new(&bytes);

	let err = cursor.at_offset("child", 16, |cursor| cursor.read_u8()).expect_err("offset at len fails");
	match err {
		PvppError::InvalidOffset { offset, len, path } => {
			assert_eq!(offset, 16);
			assert_eq!(len, 16);
			assert_eq!(path, "root.child");
		}
		other => panic!("unexpected error: {other:?}"),
	}

	let err = cursor.at_offset("child", u64::MAX, |cursor| cursor.read_u8()).expect_err("huge offset fails");
	assert!(matches!(err, PvppError::InvalidOffset { offset: u64::MAX, .. }));
}

#[test]
fn dereference_restores_position_after_nested_reads() {
	let mut builder = PayloadBuilder::new();
	let outer = builder.placeholder();
	builder.u32(0x5151_5151);
	let outer_at = builder.patch_here(outer);
	let inner = builder.placeholder();
	builder.u32(0xAAAA_AAAA);
	builder.patch_here(inner);
	builder.u32(0x1234_5678);
	let bytes = builder.finish();

	let mut cursor = Cursor::new(&bytes);
	let outer_offset = cursor.read_offset().expect("outer offset");
	assert_eq!(outer_offset, outer_at);

	let inner_value = cursor
		.at_offset("outer", outer_offset, |cursor| {
			let inner_offset = cursor.read_offset()?;
			let nested = cursor.at_offset("inner", inner_offset, |cursor| cursor.read_u32())?;
			assert_eq!(cursor.read_u32()?, 0xAAAA_AAAA);
			Ok(nested)
		})
		.expect("nested dereference succeeds");

	assert_eq!(inner_value, Some(Some(0x1234_5678)));
	assert_eq!(cursor.pos(), 8);
	assert_eq!(cursor.read_u32().expect("sibling scalar"), 0x5151_5151);
}

#[test]
fn dereference_restores_position_when_body_fails() {
	let mut builder = PayloadBuilder::new();
	let slot = builder.placeholder();
	builder.u32(7);
	builder.patch_here(slot);
	builder.u8(1);
	let bytes = builder.finish();

	let mut cursor = Cursor::new(&bytes);
	let offset = cursor.read_offset().expect("offset");
	let err = cursor.at_offset("short", offset, |cursor| cursor.read_u64()).expect_err("body overruns");

	match err {
		PvppError::OutOfBounds { at, path, .. } => {
			assert_eq!(at, 12);
			assert_eq!(path, "root.short");
		}
		other => panic!("unexpected error: {other:?}"),
	}
	assert_eq!(cursor.pos(), 8);
	assert_eq!(cursor.path_label(), "root");
	assert_eq!(cursor.read_u32().expect("sibling survives"), 7);
}

#[test]
fn offsets_are_relative_to_payload_base() {
	let mut builder = PayloadBuilder::with_base(5);
	let slot = builder.placeholder();
	builder.patch_here(slot);
	builder.u32(42);
	let bytes = builder.finish();

	let options = DecodeOptions {
		base: builder.base(),
		..DecodeOptions::default()
	};
	let mut cursor = Cursor::with_options(&bytes, &options).expect("cursor builds");
	assert_eq!(cursor.pos(), 5);
	let offset = cursor.read_offset().expect("offset");
	assert_eq!(offset, 8);
	let value = cursor.at_offset("value", offset, |cursor| cursor.read_u32()).expect("deref");
	assert_eq!(value, Some(42));
}

#[test]
fn base_past_end_is_rejected() {
	let bytes = [0_u8; 4];
	let options = DecodeOptions {
		base: 5,
		..DecodeOptions::default()
	};
	let err = Cursor::with_options(&bytes, &options).err().expect("base past end fails");
	assert!(matches!(err, PvppError::InvalidPayloadBase { base: 5, len: 4 }));
}

#[test]
fn negative_count_is_unexpected_count() {
	let bytes = [0xFF_u8];
	let mut cursor = Cursor::new(&bytes);
	let err = cursor.read_count("item_count").expect_err("negative count fails");
	assert!(matches!(err, PvppError::UnexpectedCount { field: "item_count", count: -1, .. }));
}

#[test]
fn read_array_materializes_count_elements_in_order() {
	let mut builder = PayloadBuilder::new();
	let slot = builder.placeholder();
	builder.patch_here(slot);
	for value in [10_u32, 20, 30, 40] {
		builder.u32(value);
	}
	let bytes = builder.finish();

	let mut cursor = Cursor::new(&bytes);
	let offset = cursor.read_offset().expect("offset");
	let items = cursor.read_array("values", offset, 3, 4, Cursor::read_u32).expect("array decodes");
	assert_eq!(items, vec![10, 20, 30]);
	assert_eq!(cursor.pos(), 8);

	let none = cursor.read_array("values", offset, 0, 4, Cursor::read_u32).expect("empty array decodes");
	assert!(none.is_empty());
}

#[test]
fn read_array_error_path_names_element_index() {
	let mut builder = PayloadBuilder::new();
	let slot = builder.placeholder();
	builder.patch_here(slot);
	builder.u32(1).u16(2);
	let bytes = builder.finish();

	let mut cursor = Cursor::new(&bytes);
	let offset = cursor.read_offset().expect("offset");
	let err = cursor.read_array("values", offset, 2, 4, Cursor::read_u32).expect_err("second element overruns");
	match err {
		PvppError::OutOfBounds { path, .. } => assert_eq!(path, "root.values[1]"),
		other => panic!("unexpected error: {other:?}"),
	}
}

#[test]
fn strict_counts_reject_arrays_that_cannot_fit() {
	let mut builder = PayloadBuilder::new();
	let slot = builder.placeholder();
	builder.patch_here(slot);
	builder.u32(1);
	let bytes = builder.finish();

	let strict = DecodeOptions {
		strict_counts: true,
		..DecodeOptions::default()
	};
	let mut cursor = Cursor::with_options(&bytes, &strict).expect("cursor builds");
	let offset = cursor.read_offset().expect("offset");
	let err = cursor.read_array("values", offset, 2, 4, Cursor::read_u32).expect_err("strict count check");
	assert!(matches!(err, PvppError::UnexpectedCount { field: "values", count: 2, .. }));

	let err = cursor.read_array("values", 0, 1, 4, Cursor::read_u32).expect_err("count without offset");
	assert!(matches!(err, PvppError::UnexpectedCount { count: 1, .. }));

	let mut lenient = Cursor::new(&bytes);
	let items = lenient.read_array("values", 0, 1, 4, Cursor::read_u32).expect("lenient skips absent arrays");
	assert!(items.is_empty());
}

#[test]
fn strings_decode_up_to_terminator() {
	let mut builder = PayloadBuilder::new();
	let first = builder.placeholder();
	let second = builder.placeholder();
	let at = builder.cstring("MIK_PV001");
	builder.patch(first, at);
	builder.patch(second, at);
	let bytes = builder.finish();

	let mut cursor = Cursor::new(&bytes);
	let a = cursor.read_offset().expect("first offset");
	let b = cursor.read_offset().expect("second offset");
	let first = read_string_at(&mut cursor, "name", a).expect("first string");
	let second = read_string_at(&mut cursor, "name", b).expect("aliased string");
	assert_eq!(first.as_deref(), Some("MIK_PV001"));
	assert_eq!(first, second);
	assert_eq!(cursor.pos(), 16);
	assert_eq!(read_string_at(&mut cursor, "name", 0).expect("absent string"), None);
}

#[test]
fn unterminated_string_is_malformed() {
	let mut builder = PayloadBuilder::new();
	let slot = builder.placeholder();
	let at = builder.patch_here(slot);
	builder.raw(b"no terminator");
	let bytes = builder.finish();

	let mut cursor = Cursor::new(&bytes);
	let offset = cursor.read_offset().expect("offset");
	let err: Result<_> = read_string_at(&mut cursor, "node", offset);
	match err.expect_err("string never terminates") {
		PvppError::MalformedString { at: start, path } => {
			assert_eq!(start as u64, at);
			assert_eq!(path, "root.node");
		}
		other => panic!("unexpected error: {other:?}"),
	}
	assert_eq!(cursor.pos(), 8);
}
