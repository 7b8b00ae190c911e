// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: timing.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

//! Wall-clock measurement of a batch. The report is written when the
//! timer goes out of scope, so early returns are measured too.

use serde_json::json;
use std::io::{self, Write};
use std::time::{Duration, Instant};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TimingSink {
	Plain,
	Json,
	Silent,
}

pub struct BatchTimer {
	label: &'static str,
	sink: TimingSink,
	start: Instant,
}

impl BatchTimer {
	pub fn start(label: &'static str, sink: TimingSink) -> Self {
		Self {
			label,
			sink,
			start: Instant::now(),
		}
	}

	pub fn elapsed(&self) -> Duration {
		self.start.elapsed()
	}

	/// Formats the report line, or `None` for the silent sink.
	pub fn report(&self, elapsed: Duration) -> Option<String> {
		match self.sink {
			TimingSink::Plain => {
				Some(format!("{} took {:?}", self.label, elapsed))
			}
			TimingSink::Json => Some(
				json!({
					"label": self.label,
					"elapsed_ns": elapsed_nanos(elapsed),
				})
				.to_string(),
			),
			TimingSink::Silent => None,
		}
	}
}

/// Nanoseconds, saturating at `u64::MAX` (about 584 years).
fn elapsed_nanos(elapsed: Duration) -> u64 {
	u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

impl Drop for BatchTimer {
	fn drop(&mut self) {
		if let Some(line) = self.report(self.elapsed()) {
			// stdout may already be closed; nothing useful to do then.
			let _ = writeln!(io::stdout().lock(), "{}", line);
		}
	}
}
