//! Single-byte enumerations. `-1` always means "none"; bytes outside the
//! known range decode to `Unrecognized` instead of failing the document.

/// Performer slot a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformerSlot {
	/// No performer (`-1`).
	None,
	/// First performer.
	P1,
	/// Second performer.
	P2,
	/// Third performer.
	P3,
	/// Fourth performer.
	P4,
	/// Byte value with no known meaning.
	Unrecognized(i8),
}

impl PerformerSlot {
	/// Decode from the stored byte.
	pub fn from_raw(raw: i8) -> Self {
		match raw {
			-1 => Self::None,
			0 => Self::P1,
			1 => Self::P2,
			2 => Self::P3,
			3 => Self::P4,
			other => Self::Unrecognized(other),
		}
	}

	/// Return the stored byte.
	pub fn raw(self) -> i8 {
		match self {
			Self::None => -1,
			Self::P1 => 0,
			Self::P2 => 1,
			Self::P3 => 2,
			Self::P4 => 3,
			Self::Unrecognized(raw) => raw,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::P1 => "1p",
			Self::P2 => "2p",
			Self::P3 => "3p",
			Self::P4 => "4p",
			Self::Unrecognized(_) => "unrecognized",
		}
	}
}

/// Base character of a character-effect binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Character {
	/// No character (`-1`).
	None,
	/// Miku.
	Miku,
	/// Rin.
	Rin,
	/// Len.
	Len,
	/// Luka.
	Luka,
	/// Neru.
	Neru,
	/// Haku.
	Haku,
	/// Kaito.
	Kaito,
	/// Meiko.
	Meiko,
	/// Sakine.
	Sakine,
	/// Teto.
	Teto,
	/// Extra slot character.
	Extra,
	/// Byte value with no known meaning.
	Unrecognized(i8),
}

impl Character {
	const KNOWN: [Self; 11] = [
		Self::Miku,
		Self::Rin,
		Self::Len,
		Self::Luka,
		Self::Neru,
		Self::Haku,
		Self::Kaito,
		Self::Meiko,
		Self::Sakine,
		Self::Teto,
		Self::Extra,
	];

	/// Decode from the stored byte.
	pub fn from_raw(raw: i8) -> Self {
		if raw == -1 {
			return Self::None;
		}
		usize::try_from(raw)
			.ok()
			.and_then(|index| Self::KNOWN.get(index).copied())
			.unwrap_or(Self::Unrecognized(raw))
	}

	/// Return the stored byte.
	pub fn raw(self) -> i8 {
		match self {
			Self::None => -1,
			Self::Unrecognized(raw) => raw,
			known => Self::KNOWN.iter().position(|item| *item == known).map_or(-1, |index| index as i8),
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Miku => "miku",
			Self::Rin => "rin",
			Self::Len => "len",
			Self::Luka => "luka",
			Self::Neru => "neru",
			Self::Haku => "haku",
			Self::Kaito => "kaito",
			Self::Meiko => "meiko",
			Self::Sakine => "sakine",
			Self::Teto => "teto",
			Self::Extra => "extra",
			Self::Unrecognized(_) => "unrecognized",
		}
	}
}

/// Kind of item attached to a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
	/// No item (`-1`).
	None,
	/// Plain object.
	Object,
	/// Object with a bone hierarchy.
	ObjectHierarchy,
	/// Byte value with no known meaning.
	Unrecognized(i8),
}

impl ItemKind {
	/// Decode from the stored byte.
	pub fn from_raw(raw: i8) -> Self {
		match raw {
			-1 => Self::None,
			0 => Self::Object,
			1 => Self::ObjectHierarchy,
			other => Self::Unrecognized(other),
		}
	}

	/// Return the stored byte.
	pub fn raw(self) -> i8 {
		match self {
			Self::None => -1,
			Self::Object => 0,
			Self::ObjectHierarchy => 1,
			Self::Unrecognized(raw) => raw,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Object => "obj",
			Self::ObjectHierarchy => "obj_hrc",
			Self::Unrecognized(_) => "unrecognized",
		}
	}
}
