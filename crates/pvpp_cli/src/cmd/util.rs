use std::path::PathBuf;

use pvpp::pvpp::{DecodeOptions, Document, Endianness, PvppFile};

use crate::cmd::error::{CliError, Result};

/// Decode flags shared by every command.
#[derive(clap::Args, Debug, Clone)]
pub struct DecodeArgs {
	/// Payload file, already extracted from its section container.
	pub file: PathBuf,
	/// Payload start within the file (decimal or `0x` hex).
	#[arg(long, default_value = "0")]
	pub base: String,
	/// Read fixed-width fields as big-endian.
	#[arg(long = "big-endian")]
	pub big_endian: bool,
	/// Reject counts that cannot fit in the buffer.
	#[arg(long)]
	pub strict: bool,
}

impl DecodeArgs {
	/// Build decode options from flags.
	pub fn options(&self) -> Result<DecodeOptions> {
		let base = parse_number(&self.base)?;
		let base = usize::try_from(base).map_err(|_| CliError::InvalidNumberLiteral { value: self.base.clone() })?;
		Ok(DecodeOptions {
			endianness: if self.big_endian { Endianness::Big } else { Endianness::Little },
			base,
			strict_counts: self.strict,
		})
	}

	/// Load the file and decode the whole document.
	pub fn load(&self) -> Result<(PvppFile, DecodeOptions, Document)> {
		let options = self.options()?;
		let file = PvppFile::open(&self.file)?;
		let document = file.decode(&options)?;
		let summary = document.summary();
		tracing::debug!(
			path = %self.file.display(),
			base = options.base,
			endianness = options.endianness.as_str(),
			strict = options.strict_counts,
			chara_entries = summary.chara_entries,
			song_effects = summary.song_effects,
			"decoded document"
		);
		Ok((file, options, document))
	}
}

/// Parse decimal or `0x`-prefixed hex literal.
pub(crate) fn parse_number(value: &str) -> Result<u64> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u64::from_str_radix(stripped, 16)
	} else {
		value.parse::<u64>()
	};

	parsed.map_err(|_| CliError::InvalidNumberLiteral { value: value.to_owned() })
}

/// Render a stored offset as fixed-width hex.
pub(crate) fn offset_hex(offset: u64) -> String {
	format!("0x{offset:08x}")
}

/// Print a serializable value as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) {
	match serde_json::to_string_pretty(value) {
		Ok(text) => println!("{text}"),
		Err(err) => eprintln!("error: failed to render json: {err}"),
	}
}
