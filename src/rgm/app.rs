// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: app.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use crate::rgm::mac::{self, decode_candidate, MacError, MacErrorKind};
use crate::rgm::output::{
	format_record, LineStyle, MacRecord, OutputOptions, VerifyMode,
};
use crate::rgm::timing::{BatchTimer, TimingSink};
use clap::{Arg, ArgAction, ArgMatches};
use clap_complete::{generate, Generator, Shell};
use colored::*;
use std::error::Error;
use std::io::{self, Write};

const HELP_TEMPLATE: &str = "{before-help}{name} {version}
Written by {author-with-newline}{about-with-newline}
Computes an HMAC-SHA256 tag for every INPUT under KEY and verifies it.
  rgm secret alpha beta            self-check each input
  rgm -e <TAG> secret alpha        verify against a supplied tag
{usage-heading} {usage}

{all-args}{after-help}
";

const BIN_NAME: &str = "rgm";
const TIMING_LABEL: &str = "Hashing";

/// Everything a batch run needs, already validated.
#[derive(Debug)]
pub struct BatchOptions {
	pub key: String,
	pub inputs: Vec<String>,
	/// Decoded tag to verify against; `None` means self-check.
	pub expected: Option<Vec<u8>>,
	pub style: LineStyle,
	pub encoding: OutputOptions,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BatchSummary {
	pub processed: usize,
	pub failed: usize,
}

/// Processes every input in order, writing one line per input.
pub fn run_batch<W: Write>(
	options: &BatchOptions,
	out: &mut W,
) -> Result<BatchSummary, Box<dyn Error>> {
	let key = options.key.as_bytes();
	let mut summary = BatchSummary::default();

	for input in &options.inputs {
		let message = input.as_bytes();
		let (tag, verified, mode) = match &options.expected {
			Some(candidate) => (
				mac::compute(key, message),
				mac::compare(key, message, candidate),
				VerifyMode::Expected,
			),
			None => {
				let (tag, verified) = mac::self_check(key, message);
				(tag, verified, VerifyMode::SelfCheck)
			}
		};
		let record = MacRecord {
			input,
			tag,
			verified,
			mode,
		};
		let line =
			format_record(&record, options.style, options.encoding)?;
		writeln!(out, "{}", line)?;

		summary.processed += 1;
		if !verified {
			summary.failed += 1;
		}
	}

	Ok(summary)
}

pub fn build_cli() -> clap::Command {
	clap::Command::new(clap::crate_name!())
		.color(clap::ColorChoice::Never)
		.help_template(HELP_TEMPLATE)
		.bin_name(BIN_NAME)
		.version(clap::crate_version!())
		.author(clap::crate_authors!())
		.about("A simple HMAC-SHA256 utility")
		.arg(
			Arg::new("key")
				.value_name("KEY")
				.help("Shared secret key, used as plain text")
				.allow_hyphen_values(true)
				.required_unless_present("completions"),
		)
		.arg(
			Arg::new("input")
				.value_name("INPUT")
				.help("Strings to authenticate, processed in order; everything after the first INPUT is taken verbatim")
				.num_args(1..)
				.allow_hyphen_values(true)
				.trailing_var_arg(true)
				.action(ArgAction::Append),
		)
		.arg(
			Arg::new("output")
				.short('o')
				.long("output")
				.value_parser(clap::value_parser!(OutputOptions))
				.help("Tag encoding (base64, hex, hex-base64)")
				.default_value("base64"),
		)
		.arg(
			Arg::new("expect")
				.short('e')
				.long("expect")
				.value_name("TAG")
				.help("Verify inputs against this tag (hex or Base64) instead of self-checking"),
		)
		.arg(
			Arg::new("hash-only")
				.long("hash-only")
				.help("Emit only tags without input or verification")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("json")
				.long("json")
				.help("Emit one JSON object per input")
				.conflicts_with("hash-only")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("no-timing")
				.long("no-timing")
				.help("Do not report the batch duration")
				.action(ArgAction::SetTrue),
		)
		.arg(
			Arg::new("completions")
				.long("completions")
				.value_name("SHELL")
				.value_parser(clap::value_parser!(Shell))
				.help("Generate shell completions and exit"),
		)
}

/// Turns parsed arguments into batch options. The expected tag is
/// decoded here so a malformed tag aborts before any hashing.
///
/// The `rgm` binary never reaches the `MissingKey` error since clap
/// rejects a missing KEY first; it covers library callers that hand in
/// matches from their own `clap::Command`.
pub fn batch_options(
	matches: &ArgMatches,
) -> Result<BatchOptions, MacError> {
	let key = matches.get_one::<String>("key").cloned().ok_or_else(
		|| {
			MacError::new(
				MacErrorKind::MissingKey,
				"a KEY argument is required",
			)
		},
	)?;
	let inputs = matches
		.get_many::<String>("input")
		.map(|values| values.cloned().collect())
		.unwrap_or_default();
	let expected = matches
		.get_one::<String>("expect")
		.map(|text| decode_candidate(text))
		.transpose()?;
	let style = if matches.get_flag("json") {
		LineStyle::Json
	} else if matches.get_flag("hash-only") {
		LineStyle::HashOnly
	} else {
		LineStyle::Plain
	};
	let encoding = matches
		.get_one::<OutputOptions>("output")
		.copied()
		.unwrap_or_default();

	Ok(BatchOptions {
		key,
		inputs,
		expected,
		style,
		encoding,
	})
}

fn timing_sink(matches: &ArgMatches, style: LineStyle) -> TimingSink {
	if matches.get_flag("no-timing") {
		TimingSink::Silent
	} else if style == LineStyle::Json {
		TimingSink::Json
	} else {
		TimingSink::Plain
	}
}

pub fn run() -> Result<(), Box<dyn Error>> {
	let mut capp = build_cli();
	let m = capp.get_matches_mut();

	if let Some(shell) = m.get_one::<Shell>("completions") {
		print_completions(*shell, &mut capp);
		return Ok(());
	}

	let options = batch_options(&m)?;
	if options.key.is_empty() {
		eprintln!(
			"{}",
			"warning: empty HMAC key; anyone can reproduce these tags"
				.yellow()
		);
	}

	let summary = {
		let _timer = BatchTimer::start(
			TIMING_LABEL,
			timing_sink(&m, options.style),
		);
		let stdout = io::stdout();
		let mut out = stdout.lock();
		run_batch(&options, &mut out)?
	};

	if summary.failed > 0 {
		return Err(MacError::new(
			MacErrorKind::VerificationFailed,
			format!(
				"{} of {} inputs failed verification",
				summary.failed, summary.processed
			),
		)
		.into());
	}
	Ok(())
}

fn print_completions<G: Generator>(gen: G, cmd: &mut clap::Command) {
	generate(gen, cmd, BIN_NAME, &mut std::io::stdout());
}
