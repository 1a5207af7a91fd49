//! In-memory account store, seeded once at startup.
//!
//! The store exposes lookup only; there is no update or delete surface.
//! Balance mutation goes through the [`Account`] entity directly.

use crate::account::Account;
use crate::money::Money;
use std::collections::HashMap;

/// Fixed seed accounts standing in for a real account database.
/// Balances are in cents.
const SEED_ACCOUNTS: [(&str, &str, i64, &str); 4] = [
    ("123456", "1234", 100_000, "John Doe"),
    ("654321", "4321", 150_000, "Jane Smith"),
    ("456789", "4567", 200_000, "John Adeja"),
    ("987654", "9876", 250_000, "Jane alex"),
];

/// Accounts indexed by account number.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: HashMap<String, Account>,
}

impl AccountStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        AccountStore {
            accounts: HashMap::new(),
        }
    }

    /// Creates a store populated with the fixed seed accounts.
    pub fn with_seed_accounts() -> Self {
        let mut store = AccountStore::new();
        for (id, pin, cents, name) in SEED_ACCOUNTS {
            store.insert(Account::new(id, pin, Money::from_cents(cents), name));
        }
        store
    }

    /// Adds an account, keyed by its id. Ids are unique; inserting an
    /// existing id replaces the record.
    pub fn insert(&mut self, account: Account) {
        self.accounts.insert(account.id().to_string(), account);
    }

    /// Looks up an account by id.
    pub fn lookup(&self, id: &str) -> Option<&Account> {
        self.accounts.get(id)
    }

    /// Looks up an account by id for mutation.
    pub fn lookup_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.get_mut(id)
    }

    /// Number of accounts in the store.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
