//! Fingerprint exchange client binary
//!
//! Connects to 127.0.0.1:4433 using `cert.pem` and `key.pem` from the
//! working directory, sends the peer certificate's SHA-256 fingerprint
//! over the encrypted channel, and prints the server's reply to stdout.
//! Diagnostics go to stderr; any fatal condition exits nonzero.

use certfp::client::{self, ClientOpts};
use std::process::ExitCode;

fn main() -> ExitCode {
    stderrlog::new()
        .verbosity(3)
        .init()
        .expect("Failed to initialize logging");

    let opts = ClientOpts::default();

    match client::run(&opts) {
        Ok(exchange) => {
            println!("{}", exchange.reply);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
