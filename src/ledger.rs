//! Structured transaction ledger entries and their string rendering.
//!
//! Every significant action on an account, including failed attempts, is
//! recorded as a typed [`Action`] with a local-time timestamp. The audit
//! line `<timestamp> - <name> (<id>): <description>` is produced as a
//! presentation-layer projection, so tests assert on structured fields
//! instead of parsing strings.

use crate::money::Money;
use chrono::{Local, NaiveDateTime};
use std::fmt;

/// Timestamp format used in rendered ledger lines (local wall-clock time,
/// second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A recordable action, successful or failed, taken against an account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Successful login.
    LoggedIn,

    /// Logout via the exit menu choice.
    LoggedOut,

    /// Balance inquiry; carries the balance that was reported.
    BalanceChecked(Money),

    /// Successful deposit of the given amount.
    Deposited(Money),

    /// Deposit rejected because the amount was not positive.
    DepositRejected(Money),

    /// Successful withdrawal of the given amount.
    Withdrew(Money),

    /// Withdrawal rejected because the amount was not positive.
    WithdrawalRejected(Money),

    /// Withdrawal rejected because the requested amount exceeded the balance.
    /// Carries the requested amount, not the balance.
    WithdrawalInsufficient(Money),
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::LoggedIn => write!(f, "User logged in"),
            Action::LoggedOut => write!(f, "User logged out"),
            Action::BalanceChecked(balance) => write!(f, "Checked balance - ${}", balance),
            Action::Deposited(amount) => write!(f, "Deposited ${}", amount),
            Action::DepositRejected(amount) => {
                write!(f, "Failed deposit attempt - Invalid amount: ${}", amount)
            }
            Action::Withdrew(amount) => write!(f, "Withdrew ${}", amount),
            Action::WithdrawalRejected(amount) => {
                write!(f, "Failed withdrawal attempt - Invalid amount: ${}", amount)
            }
            Action::WithdrawalInsufficient(amount) => {
                write!(f, "Failed withdrawal attempt - Insufficient funds for ${}", amount)
            }
        }
    }
}

/// One append-only ledger record: what happened and when.
#[derive(Debug, Clone)]
pub struct LedgerEntry {
    /// Local wall-clock time the action was recorded.
    pub timestamp: NaiveDateTime,

    /// The action taken.
    pub action: Action,
}

impl LedgerEntry {
    /// Creates an entry stamped with the current local time.
    pub fn now(action: Action) -> Self {
        LedgerEntry {
            timestamp: Local::now().naive_local(),
            action,
        }
    }

    /// Renders the entry as an audit line:
    /// `<timestamp> - <displayName> (<accountId>): <actionDescription>`.
    pub fn render(&self, display_name: &str, account_id: &str) -> String {
        format!(
            "{} - {} ({}): {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            display_name,
            account_id,
            self.action
        )
    }
}
