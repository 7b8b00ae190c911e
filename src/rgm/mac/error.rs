// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: error.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacErrorKind {
	/// No key in the parsed arguments. Only library callers can hit
	/// this; the CLI reports a missing KEY as a usage error first.
	MissingKey,
	/// A caller-supplied tag could not be decoded.
	InvalidTag,
	/// One or more inputs did not match the expected tag.
	VerificationFailed,
}

/// Failure raised while preparing or checking a batch of tags.
///
/// HMAC computation itself cannot fail, so every variant describes bad
/// caller input or a verification outcome the CLI turns into exit 1.
#[derive(Debug)]
pub struct MacError {
	kind: MacErrorKind,
	message: Cow<'static, str>,
}

impl MacError {
	pub fn new(
		kind: MacErrorKind,
		message: impl Into<Cow<'static, str>>,
	) -> Self {
		Self {
			kind,
			message: message.into(),
		}
	}

	pub fn kind(&self) -> MacErrorKind {
		self.kind
	}

	pub fn message(&self) -> &str {
		self.message.as_ref()
	}
}

impl std::fmt::Display for MacError {
	fn fmt(
		&self,
		f: &mut std::fmt::Formatter<'_>,
	) -> std::fmt::Result {
		write!(f, "{}", self.message)
	}
}

impl std::error::Error for MacError {}
