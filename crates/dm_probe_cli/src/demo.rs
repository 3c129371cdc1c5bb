//! `dm-probe demo`: greets on stdout, then runs the call forms in order.
//!
//! The last call is a terminating `probe!`, so the process exits with 1.

use std::io::{self, Write};

use chrono::Local;
use dm_probe::{probe, probe_check, probe_error, probe_notice, TIMESTAMP_FORMAT};

/// Runs the demo. Never returns normally.
pub fn run() -> Result<i32, Box<dyn std::error::Error>> {
    println!("Hello!{}", Local::now().format(TIMESTAMP_FORMAT));
    io::stdout().flush()?;

    probe_check!("what?");
    probe_notice!("help");
    probe_error!("hello");
    probe!("Whoopsie!")
}
