// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// Module: output
// Purpose: Result line rendering for plain, hash-only and JSON modes.

use crate::rgm::mac::hmac::{DISPLAY_NAME, IDENTIFIER};
use crate::rgm::mac::Tag;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Tag encodings surfaced via the CLI `--output` flag.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputOptions {
	#[default]
	Base64,
	Hex,
	HexBase64,
}

impl OutputOptions {
	pub fn canonical_name(self) -> &'static str {
		match self {
			Self::Base64 => "base64",
			Self::Hex => "hex",
			Self::HexBase64 => "hex-base64",
		}
	}

	pub fn render(self, tag: &Tag) -> String {
		match self {
			Self::Base64 => tag.to_base64(),
			Self::Hex => tag.to_hex(),
			Self::HexBase64 => {
				format!("{} {}", tag.to_hex(), tag.to_base64())
			}
		}
	}
}

impl fmt::Display for OutputOptions {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.canonical_name())
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineStyle {
	Plain,
	HashOnly,
	Json,
}

/// How a record was verified.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyMode {
	/// The freshly computed tag checked against itself.
	#[serde(rename = "self")]
	SelfCheck,
	/// An externally supplied tag.
	Expected,
}

/// One processed input.
#[derive(Debug)]
pub struct MacRecord<'a> {
	pub input: &'a str,
	pub tag: Tag,
	pub verified: bool,
	pub mode: VerifyMode,
}

#[derive(Serialize)]
struct JsonRecord<'a> {
	algorithm: &'static str,
	input: &'a str,
	tag: String,
	encoding: &'static str,
	verified: bool,
	mode: VerifyMode,
}

pub fn format_record(
	record: &MacRecord<'_>,
	style: LineStyle,
	encoding: OutputOptions,
) -> Result<String, serde_json::Error> {
	let rendered = encoding.render(&record.tag);
	match style {
		LineStyle::Plain => Ok(format!(
			"INPUT: {}, {}: {}, Verified: {}",
			record.input, DISPLAY_NAME, rendered, record.verified
		)),
		LineStyle::HashOnly => Ok(rendered),
		LineStyle::Json => serde_json::to_string(&JsonRecord {
			algorithm: IDENTIFIER,
			input: record.input,
			tag: rendered,
			encoding: encoding.canonical_name(),
			verified: record.verified,
			mode: record.mode,
		}),
	}
}
