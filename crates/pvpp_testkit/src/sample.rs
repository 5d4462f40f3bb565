use crate::PayloadBuilder;

/// Raw offset stored in the root's unexplored field.
pub const SAMPLE_UNKNOWN_OFFSET: u64 = 0x9999_9999;
/// Raw sixth offset of the first character entry.
pub const SAMPLE_EXTRA_OFFSET: u64 = 0x7777;
/// Raw next-motion offset of the second motion of the first character.
pub const SAMPLE_NEXT_MOTION_OFFSET: u64 = 0x0001_0000;

/// Write a complete sample document into `builder` and return the buffer.
///
/// Contents:
/// - header `unknown_20 = 7`, two character entries, `unknown_25 = [1, 2, 3]`;
/// - song block `unknown_40 = 5`, `unknown_42 = [6, 7]`, `unknown_44 = -1`,
///   with two song effects:
///   - 1p, auth3d `STGPV001_EFF`/11 and `STGPV001_EFF2`/12, glitter `eff_pv001` (aux `aux`, flag -1);
///   - 4p, no children;
/// - character entry 0, header `[7, 1, 2, 1, 1, 0, 1, 0]`:
///   - chara-eff for luka/1p with one binding (`unknown = 1..=8`,
///     `CHREFF_A3D`/21, `SRC_A3D`/22);
///   - motions `PV001_MOT_A`/100 (next absent) and `PV001_MOT_B`/101
///     (next [`SAMPLE_NEXT_MOTION_OFFSET`]);
///   - auth3d `ITEM_A3D`/5;
///   - one obj_hrc item, unknown `[9, 8, 7]`, `-42`, placement `1, 2, 3, 4`,
///     auth3d `ITM_A3D`/6, node `j_kao_wj`;
///   - glitter `chara_glt` (no aux, flag 3);
///   - extra offset [`SAMPLE_EXTRA_OFFSET`];
/// - character entry 1 with header `[7, 0, 0, 0, 0, 0, 0, 0]` and no children.
pub fn sample_payload(mut builder: PayloadBuilder) -> Vec<u8> {
	let b = &mut builder;

	b.u32(7).i8(2).i8(1).i8(2).i8(3);
	let song_block = b.placeholder();
	let chara_entries = b.placeholder();
	b.offset(SAMPLE_UNKNOWN_OFFSET);

	b.patch_here(song_block);
	b.i8(5).i8(2).i8(6).i8(7).i32(-1);
	let effects = b.placeholder();

	b.patch_here(effects);
	b.i8(2).i8(1).i8(0).zeros(5);
	let effect_auth3d = b.placeholder();
	let effect_glitter = b.placeholder();
	b.i8(0).i8(0).i8(3).zeros(5).offset(0).offset(0);

	let at = b.named_refs(&[("STGPV001_EFF", 11), ("STGPV001_EFF2", 12)]);
	b.patch(effect_auth3d, at);
	let at = b.glitter(&[("eff_pv001", Some("aux"), -1)]);
	b.patch(effect_glitter, at);

	b.patch_here(chara_entries);
	b.raw(&[7, 1, 2, 1, 1, 0, 1, 0]);
	let chara_eff = b.placeholder();
	let motions = b.placeholder();
	let auth3d = b.placeholder();
	let items = b.placeholder();
	let glitter = b.placeholder();
	b.offset(SAMPLE_EXTRA_OFFSET);
	b.raw(&[7, 0, 0, 0, 0, 0, 0, 0]).zeros(6 * 8);

	b.patch_here(chara_eff);
	b.i8(3).i8(1).i8(0);
	let bindings = b.placeholder();
	b.patch_here(bindings);
	b.raw(&[1, 2, 3, 4, 5, 6, 7, 8]);
	let binding_eff = b.placeholder();
	let binding_source = b.placeholder();
	let at = b.named_refs(&[("CHREFF_A3D", 21)]);
	b.patch(binding_eff, at);
	let at = b.named_refs(&[("SRC_A3D", 22)]);
	b.patch(binding_source, at);

	let at = b.motions(&[("PV001_MOT_A", 100, 0), ("PV001_MOT_B", 101, SAMPLE_NEXT_MOTION_OFFSET)]);
	b.patch(motions, at);

	let at = b.named_refs(&[("ITEM_A3D", 5)]);
	b.patch(auth3d, at);

	b.patch_here(items);
	b.i8(1).i8(9).i8(8).i8(7).i32(-42);
	let item_auth3d = b.placeholder();
	let item_node = b.placeholder();
	b.f32(1.0).f32(2.0).f32(3.0).f32(4.0);
	let at = b.named_refs(&[("ITM_A3D", 6)]);
	b.patch(item_auth3d, at);
	let at = b.cstring("j_kao_wj");
	b.patch(item_node, at);

	let at = b.glitter(&[("chara_glt", None, 3)]);
	b.patch(glitter, at);

	builder.finish()
}
