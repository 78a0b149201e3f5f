//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `dcalt_core` linkage from a standalone binary.
//! - Print the subjective day for an optional `HH:MM` day start argument.

use dcalt_core::{subjective_today, TimeOfDay};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("dcalt_core version={}", dcalt_core::core_version());

    let day_start = match std::env::args().nth(1) {
        Some(raw) => match raw.parse::<TimeOfDay>() {
            Ok(value) => value,
            Err(err) => {
                eprintln!("invalid day start: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => TimeOfDay::default(),
    };

    match subjective_today(day_start) {
        Ok(today) => {
            println!(
                "day_start={day_start} day={} time={}",
                today.day, today.time_of_day
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
