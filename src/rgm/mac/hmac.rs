// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: hmac.rs
// Author: Volker Schwaberow <volker@schwaberow.de>

//! HMAC-SHA256 computation and verification.

use super::tag::{Tag, TAG_LENGTH};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

pub const IDENTIFIER: &str = "hmac-sha256";
pub const DISPLAY_NAME: &str = "HMAC-SHA256";

/// Computes the HMAC-SHA256 tag of `message` under `key`.
///
/// Keys of any length are accepted; keys longer than the 64-byte block
/// are hashed down to 32 bytes as RFC 2104 prescribes.
pub fn compute(key: &[u8], message: &[u8]) -> Tag {
	let mut mac = HmacSha256::new_from_slice(key)
		.expect("HMAC-SHA256 accepts keys of any length");
	mac.update(message);
	let mut bytes = [0u8; TAG_LENGTH];
	bytes.copy_from_slice(&mac.finalize().into_bytes());
	Tag::from(bytes)
}

/// Recomputes the tag for `message` and checks it against `candidate`.
///
/// Candidates of the wrong length are rejected up front; the byte
/// comparison itself runs in constant time.
pub fn compare(key: &[u8], message: &[u8], candidate: &[u8]) -> bool {
	let expected = compute(key, message);
	expected.as_ref().ct_eq(candidate).into()
}

/// Computes a tag and verifies it against itself.
pub fn self_check(key: &[u8], message: &[u8]) -> (Tag, bool) {
	let tag = compute(key, message);
	let verified = compare(key, message, tag.as_bytes());
	(tag, verified)
}
