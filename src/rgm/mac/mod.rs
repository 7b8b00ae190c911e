// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// Module: mac (message authentication codes)
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! HMAC-SHA256 engine: tag computation, constant-time verification and
//! the error type shared with the CLI.

pub mod error;
pub mod hmac;
pub mod tag;

pub use self::error::{MacError, MacErrorKind};
pub use self::hmac::{compare, compute, self_check};
pub use self::tag::{decode_candidate, Tag, TAG_LENGTH};
