//! # ATM Simulator
//!
//! A single-user, single-process interactive terminal simulation of an
//! automated teller machine. Users authenticate against a small fixed set
//! of in-memory accounts, then check their balance, deposit, withdraw, and
//! view a per-account transaction ledger until they exit.
//!
//! ## Design Principles
//!
//! - **Fixed-point arithmetic**: dollars-and-cents via `rust_decimal`
//! - **Structured audit trail**: ledger entries are typed records; the
//!   human-readable line is a presentation-layer projection
//! - **Scriptable sessions**: the machine is generic over its I/O streams,
//!   so tests drive it with canned input instead of a terminal
//! - **No ambient state**: the store and session live in an explicitly
//!   constructed [`Atm`], one fresh instance per test
//!
//! ## Example
//!
//! ```no_run
//! use atm_simulator::{AccountStore, Atm};
//!
//! let mut atm = Atm::new(AccountStore::with_seed_accounts());
//! let stdin = std::io::stdin();
//! let stdout = std::io::stdout();
//! atm.run(&mut stdin.lock(), &mut stdout.lock()).unwrap();
//! ```

pub mod account;
pub mod atm;
pub mod error;
pub mod ledger;
pub mod money;
pub mod store;

pub use account::{Account, WithdrawOutcome};
pub use atm::Atm;
pub use error::{AtmError, Result};
pub use ledger::{Action, LedgerEntry, TIMESTAMP_FORMAT};
pub use money::Money;
pub use store::AccountStore;
