//! ATM Simulator CLI
//!
//! An interactive terminal ATM over a fixed set of in-memory accounts.
//! All state is lost when the process ends.
//!
//! # Usage
//!
//! ```bash
//! cargo run
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use atm_simulator::{AccountStore, Atm, Result};
use std::io;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let mut atm = Atm::new(AccountStore::with_seed_accounts());
    atm.run(&mut stdin.lock(), &mut stdout.lock())
}
