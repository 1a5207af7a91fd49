//! Account entity: identity, balance, and the append-only transaction ledger.
//!
//! Balance mutation happens only through [`Account::deposit`] and
//! [`Account::withdraw`], each of which records exactly one ledger entry,
//! success or failure.

use crate::ledger::{Action, LedgerEntry};
use crate::money::Money;

/// Outcome of a withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawOutcome {
    /// Amount subtracted from the balance.
    Accepted,

    /// Amount was zero or negative; balance unchanged.
    InvalidAmount,

    /// Amount exceeded the balance; balance unchanged.
    InsufficientFunds,
}

/// One simulated bank customer.
///
/// # Invariants
///
/// - `balance` never goes negative: overdraws are rejected before mutation
/// - The ledger only grows within a run; entries are never removed
#[derive(Debug, Clone)]
pub struct Account {
    id: String,
    pin: String,
    balance: Money,
    display_name: String,
    ledger: Vec<LedgerEntry>,
}

impl Account {
    /// Creates an account with an empty ledger.
    pub fn new(
        id: impl Into<String>,
        pin: impl Into<String>,
        balance: Money,
        display_name: impl Into<String>,
    ) -> Self {
        Account {
            id: id.into(),
            pin: pin.into(),
            balance,
            display_name: display_name.into(),
            ledger: Vec::new(),
        }
    }

    /// The account number, unique within the store.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name used in greetings and rendered ledger lines.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Current balance.
    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Compares the candidate PIN by exact equality, case-sensitive,
    /// no trimming.
    pub fn verify_pin(&self, candidate: &str) -> bool {
        self.pin == candidate
    }

    /// Deposits `amount` if it is strictly positive.
    ///
    /// Returns `true` on success. Either way, exactly one ledger entry is
    /// appended; a rejected deposit is recorded as a failed attempt carrying
    /// the offending amount.
    pub fn deposit(&mut self, amount: Money) -> bool {
        if amount.is_positive() {
            self.balance += amount;
            self.record(Action::Deposited(amount));
            true
        } else {
            self.record(Action::DepositRejected(amount));
            false
        }
    }

    /// Withdraws `amount`, checking in order: positivity, then sufficiency.
    ///
    /// Exactly one ledger entry is appended regardless of outcome. Failed
    /// attempts record the requested amount, not the balance.
    pub fn withdraw(&mut self, amount: Money) -> WithdrawOutcome {
        if !amount.is_positive() {
            self.record(Action::WithdrawalRejected(amount));
            WithdrawOutcome::InvalidAmount
        } else if amount > self.balance {
            self.record(Action::WithdrawalInsufficient(amount));
            WithdrawOutcome::InsufficientFunds
        } else {
            self.balance -= amount;
            self.record(Action::Withdrew(amount));
            WithdrawOutcome::Accepted
        }
    }

    /// Appends a timestamped entry to the ledger.
    ///
    /// Used directly for actions that do not mutate the balance (login,
    /// logout, balance checks).
    pub fn record(&mut self, action: Action) {
        self.ledger.push(LedgerEntry::now(action));
    }

    /// The ledger in chronological (insertion) order.
    pub fn history(&self) -> &[LedgerEntry] {
        &self.ledger
    }

    /// Renders every ledger entry as an audit line.
    pub fn rendered_history(&self) -> Vec<String> {
        self.ledger
            .iter()
            .map(|entry| entry.render(&self.display_name, &self.id))
            .collect()
    }
}
