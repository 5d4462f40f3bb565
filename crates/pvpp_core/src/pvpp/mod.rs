mod bytes;
mod chain;
mod chara;
mod chara_eff;
mod document;
mod error;
mod file;
mod glitter;
mod item;
mod kind;
mod motion;
mod options;
mod reference;
mod song;
mod strings;

/// Bounded payload cursor and the absent-offset sentinel.
pub use bytes::{ABSENT_OFFSET, Cursor};
/// Lazy motion-chain resolution.
pub use chain::{ChainItem, ChainStop, ChainStopReason, MotionChain, walk_after, walk_motion_chain};
/// Per-character record.
pub use chara::CharaEntry;
/// Character-effect records.
pub use chara_eff::{CharaEffAuth3d, CharaEffEntry};
/// Root document and its header scalars.
pub use document::{Document, DocumentHeader, DocumentSummary, SongEffectBlock};
/// Error and result aliases.
pub use error::{PvppError, Result};
/// In-memory payload file.
pub use file::PvppFile;
/// Particle-effect record.
pub use glitter::GlitterEntry;
/// Attached item record.
pub use item::{ItemEntry, Placement};
/// Single-byte enumerations.
pub use kind::{Character, ItemKind, PerformerSlot};
/// Motion chain node record.
pub use motion::MotionEntry;
/// Decode and traversal options.
pub use options::{ChainOptions, DecodeOptions, Endianness, StopMode};
/// Name/id pair record.
pub use reference::NamedReference;
/// Song effect record.
pub use song::SongEffect;
/// String table resolver.
pub use strings::{read_string, read_string_at};

/// Decode a document from `bytes` with `options`.
pub fn decode_document(bytes: &[u8], options: &DecodeOptions) -> Result<Document> {
	Document::decode(bytes, options)
}
