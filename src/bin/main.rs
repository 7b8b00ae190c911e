// SPDX-License-Identifier: MIT OR Apache-2.0
// Project: rustgenmac
// File: main.rs
// Author: Volker Schwaberow <volker@schwaberow.de>
// Copyright (c) 2025 Volker Schwaberow

use colored::*;
use rustgenmac::rgm::app;
use std::process::ExitCode;

fn main() -> ExitCode {
	match app::run() {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("{}", format!("error: {}", err).red());
			ExitCode::FAILURE
		}
	}
}
