//! Binary entrypoint for the Veritext analysis server.

use std::process::ExitCode;

use veritext::start_veritext;

/// Start the server.
fn main() -> ExitCode {
    start_veritext::run()
}
