// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: tag.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! Fixed-length authentication tag and parsing of externally supplied tags.

use super::error::{MacError, MacErrorKind};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::fmt;
use subtle::{Choice, ConstantTimeEq};

pub const TAG_LENGTH: usize = 32;

/// An HMAC-SHA256 output. Equality is evaluated in constant time.
#[derive(Clone, Copy)]
pub struct Tag([u8; TAG_LENGTH]);

impl Tag {
	pub fn as_bytes(&self) -> &[u8; TAG_LENGTH] {
		&self.0
	}

	/// Standard Base64 with padding.
	pub fn to_base64(&self) -> String {
		STANDARD.encode(self.0)
	}

	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl From<[u8; TAG_LENGTH]> for Tag {
	fn from(bytes: [u8; TAG_LENGTH]) -> Self {
		Self(bytes)
	}
}

impl AsRef<[u8]> for Tag {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl ConstantTimeEq for Tag {
	fn ct_eq(&self, other: &Self) -> Choice {
		self.0[..].ct_eq(&other.0[..])
	}
}

impl PartialEq for Tag {
	fn eq(&self, other: &Self) -> bool {
		self.ct_eq(other).into()
	}
}

impl Eq for Tag {}

impl fmt::Debug for Tag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Tag({})", self.to_hex())
	}
}

/// Decodes a tag supplied on the command line.
///
/// Exactly 64 hex digits are read as hex; everything else must be
/// standard Base64. The decoded length is not checked here, a tag of the
/// wrong size simply fails comparison.
pub fn decode_candidate(text: &str) -> Result<Vec<u8>, MacError> {
	let trimmed = text.trim();
	if trimmed.len() == TAG_LENGTH * 2
		&& trimmed.bytes().all(|b| b.is_ascii_hexdigit())
	{
		return hex::decode(trimmed).map_err(|err| {
			MacError::new(
				MacErrorKind::InvalidTag,
				format!("invalid hex tag `{}`: {}", trimmed, err),
			)
		});
	}
	STANDARD.decode(trimmed).map_err(|err| {
		MacError::new(
			MacErrorKind::InvalidTag,
			format!(
				"expected tag must be 64 hex digits or standard Base64, got `{}`: {}",
				trimmed, err
			),
		)
	})
}
