//! The ATM state machine: login loop, menu dispatch, and the four
//! account operations.
//!
//! The machine is generic over its input and output streams so tests can
//! drive a full session with scripted input instead of a live terminal.
//! It has two states: logged out (initial), where the only transition is a
//! successful login, and logged in, where menu choices 1-4 operate on the
//! session account and choice 5 logs out and ends the run.

use crate::account::{Account, WithdrawOutcome};
use crate::error::{AtmError, Result};
use crate::ledger::Action;
use crate::money::Money;
use crate::store::AccountStore;
use log::{debug, warn};
use std::io::{BufRead, Write};
use std::str::FromStr;

const SEPARATOR: &str = "=========================================";

/// The interactive teller machine.
///
/// Owns the account store and the current session. At most one account is
/// authenticated at a time; the session is set only by a successful login
/// and cleared only by the exit menu choice.
pub struct Atm {
    store: AccountStore,
    session: Option<String>,
}

impl Atm {
    /// Creates a machine over the given store with no active session.
    pub fn new(store: AccountStore) -> Self {
        Atm {
            store,
            session: None,
        }
    }

    /// Runs the simulation until the user exits via menu choice 5.
    ///
    /// Blocks line-by-line on `input`. Returns an error only for fatal
    /// conditions: malformed numeric input, end of input, or an I/O
    /// failure. Authentication failures, invalid amounts, insufficient
    /// funds, and unrecognized menu choices are all recovered locally.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(output, "Welcome to the ATM Machine Simulation System:")?;
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(output, "Please follow the instructions to use the ATM.")?;
        writeln!(output, "{}", SEPARATOR)?;

        loop {
            if self.session.is_none() {
                self.login(input, output)?;
            } else if !self.menu_round(input, output)? {
                return Ok(());
            }
        }
    }

    /// Prompts for an account number and PIN, then attempts authentication.
    ///
    /// Unknown ids and wrong PINs produce the same generic message, so the
    /// output does not leak which part failed. Failed attempts record no
    /// ledger entry; there is no lockout or retry limit.
    fn login<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(output)?;
        writeln!(output, "Please enter your account number:")?;
        let account_number = read_line(input)?;
        writeln!(output, "Please enter your PIN:")?;
        let pin = read_line(input)?;

        let authenticated = self
            .store
            .lookup(&account_number)
            .map(|account| account.verify_pin(&pin))
            .unwrap_or(false);

        if authenticated {
            // Safety: lookup above just matched this id
            let account = self
                .store
                .lookup_mut(&account_number)
                .expect("account exists");
            writeln!(output, "Login successful! Welcome {}", account.display_name())?;
            account.record(Action::LoggedIn);
            debug!("account {} logged in", account_number);
            self.session = Some(account_number);
        } else {
            writeln!(output, "Invalid account number or PIN. Please try again.")?;
            warn!("failed login attempt for account '{}'", account_number);
        }

        Ok(())
    }

    /// Shows the menu, reads one choice, and dispatches it.
    ///
    /// Returns `Ok(false)` when the user chose to exit.
    fn menu_round<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        output: &mut W,
    ) -> Result<bool> {
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(output)?;
        writeln!(output, "ATM Menu: Please Select an Option:")?;
        writeln!(output, "1. Check Balance")?;
        writeln!(output, "2. Deposit Money")?;
        writeln!(output, "3. Withdraw Money")?;
        writeln!(output, "4. View Transaction History")?;
        writeln!(output, "5. Exit")?;
        write!(output, "Enter your choice: ")?;
        output.flush()?;

        match read_number::<i64, R>(input)? {
            1 => {
                self.check_balance(output)?;
                Ok(true)
            }
            2 => {
                self.deposit(input, output)?;
                Ok(true)
            }
            3 => {
                self.withdraw(input, output)?;
                Ok(true)
            }
            4 => {
                self.view_history(output)?;
                Ok(true)
            }
            5 => {
                writeln!(output, "Thank you for using the ATM. Goodbye!")?;
                self.current_account_mut().record(Action::LoggedOut);
                debug!("session ended by user");
                self.session = None;
                Ok(false)
            }
            other => {
                writeln!(output, "Invalid choice. Please try again.")?;
                warn!("unrecognized menu choice {}", other);
                Ok(true)
            }
        }
    }

    /// Reports the session account's balance and records the inquiry.
    fn check_balance<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let account = self.current_account_mut();
        let balance = account.balance();
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(output, "Your current balance is: ${}", balance)?;
        account.record(Action::BalanceChecked(balance));
        Ok(())
    }

    /// Prompts for an amount and deposits it into the session account.
    fn deposit<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(
            output,
            "Your current balance is: ${}",
            self.current_account().balance()
        )?;
        write!(output, "Enter amount to deposit: ")?;
        output.flush()?;
        let amount = read_number::<Money, R>(input)?;

        let account = self.current_account_mut();
        if account.deposit(amount) {
            writeln!(output, "Deposit successful! New balance: ${}", account.balance())?;
            debug!("deposited {} into account {}", amount, account.id());
        } else {
            writeln!(output, "Invalid deposit amount.")?;
            warn!("rejected deposit of {} for account {}", amount, account.id());
        }

        Ok(())
    }

    /// Prompts for an amount and withdraws it from the session account.
    ///
    /// Rejection order: non-positive amount first, then insufficient funds.
    fn withdraw<R: BufRead, W: Write>(&mut self, input: &mut R, output: &mut W) -> Result<()> {
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(
            output,
            "Your current balance is: ${}",
            self.current_account().balance()
        )?;
        write!(output, "Enter amount to withdraw: ")?;
        output.flush()?;
        let amount = read_number::<Money, R>(input)?;

        let account = self.current_account_mut();
        match account.withdraw(amount) {
            WithdrawOutcome::Accepted => {
                writeln!(output, "${} withdrawn successfully.", amount)?;
                writeln!(output, "New balance: ${}", account.balance())?;
                debug!("withdrew {} from account {}", amount, account.id());
            }
            WithdrawOutcome::InvalidAmount => {
                writeln!(output, "Invalid withdrawal amount.")?;
                warn!("rejected withdrawal of {} for account {}", amount, account.id());
            }
            WithdrawOutcome::InsufficientFunds => {
                writeln!(
                    output,
                    "Insufficient funds. Your current balance is: ${}",
                    account.balance()
                )?;
                warn!(
                    "insufficient funds: requested {} from account {}",
                    amount,
                    account.id()
                );
            }
        }

        Ok(())
    }

    /// Prints the session account's ledger in chronological order.
    ///
    /// Viewing history is the one menu operation that records nothing.
    /// The empty-ledger branch is unreachable through the interactive flow
    /// since login itself is recorded, but is kept for completeness.
    fn view_history<W: Write>(&mut self, output: &mut W) -> Result<()> {
        let account = self.current_account();
        writeln!(output, "{}", SEPARATOR)?;
        writeln!(output, "Transaction History:")?;
        writeln!(output)?;
        writeln!(output, "Transaction History for {}:", account.display_name())?;
        writeln!(output, "Account Number: {}", account.id())?;
        writeln!(output, "{}", SEPARATOR)?;

        if account.history().is_empty() {
            writeln!(output, "No transactions recorded.")?;
        } else {
            for line in account.rendered_history() {
                writeln!(output, "{}", line)?;
            }
        }

        Ok(())
    }

    /// The authenticated account.
    ///
    /// Safety: only invoked from logged-in menu handlers, where a session
    /// is always present and refers to a stored account.
    fn current_account(&self) -> &Account {
        let id = self.session.as_deref().expect("active session");
        self.store.lookup(id).expect("session account exists")
    }

    fn current_account_mut(&mut self) -> &mut Account {
        let id = self.session.as_deref().expect("active session");
        self.store.lookup_mut(id).expect("session account exists")
    }

    /// Returns a reference to a stored account (for testing).
    #[cfg(test)]
    pub fn account(&self, id: &str) -> Option<&Account> {
        self.store.lookup(id)
    }
}

/// Reads one line, stripping the trailing newline only.
///
/// Account numbers and PINs are compared untrimmed, so interior and leading
/// whitespace is preserved.
fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AtmError::UnexpectedEof);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(line)
}

/// Reads one line and parses it as a number (menu choice or amount).
///
/// Non-numeric input is fatal: the run ends with a clear error instead of
/// re-prompting.
fn read_number<T: FromStr, R: BufRead>(input: &mut R) -> Result<T> {
    let line = read_line(input)?;
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| AtmError::MalformedNumber {
        input: trimmed.to_string(),
    })
}
