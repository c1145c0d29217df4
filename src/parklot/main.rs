//! # Parklot Interpreter
//!
//! The binary is intentionally thin: the interpreter lives in `src/parklot/cli/`,
//! while this file only invokes `cli::run()` and handles process termination.
//! Everything the interpreter drives (the lot, the commands, the API facade)
//! lives in the `parklot` library; see its crate docs for the layering.

mod cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
