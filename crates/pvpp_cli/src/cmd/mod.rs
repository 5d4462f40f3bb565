/// Command error type.
pub mod error;
/// File-level header and count summary command.
pub mod info;
/// Lazy motion-chain walk command.
pub mod motions;
/// Full document print command.
pub mod show;
/// Shared argument parsing and rendering helpers.
pub mod util;
