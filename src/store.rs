// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Account, Category, Direction, Snapshot, Transaction};
use crate::seed;

#[derive(Debug, Error, PartialEq)]
pub enum LedgerError {
    #[error("account '{0}' does not exist")]
    UnknownAccount(String),
    #[error("invalid amount '{0}', expected a non-negative number")]
    InvalidAmount(Decimal),
    #[error("account id '{0}' is already in use")]
    DuplicateId(String),
}

/// Owned in-memory state container for the three collections. There is
/// exactly one logical owner per session; callers receive it by reference.
///
/// Every mutation validates completely before touching any collection, so a
/// failed call leaves the store exactly as it was and no caller can observe
/// a transaction without its balance effect.
#[derive(Debug, Clone)]
pub struct Store {
    categories: Vec<Category>,
    accounts: Vec<Account>,
    transactions: Vec<Transaction>,
}

impl Store {
    /// An empty ledger over the given category reference list.
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            accounts: Vec::new(),
            transactions: Vec::new(),
        }
    }

    /// The demo-mode ledger: built-in categories plus seed accounts and
    /// transactions.
    pub fn demo() -> Self {
        Self {
            categories: seed::categories(),
            accounts: seed::demo_accounts(),
            transactions: seed::demo_transactions(),
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            categories: snapshot.categories,
            accounts: snapshot.accounts,
            transactions: snapshot.transactions,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            categories: self.categories.clone(),
            accounts: self.accounts.clone(),
            transactions: self.transactions.clone(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Newest-first: `post_transaction` prepends.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn account(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    /// Defensive lookup: transaction category ids may dangle.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Adds an account with its caller-supplied opening balance.
    pub fn add_account(&mut self, account: Account) -> Result<(), LedgerError> {
        if self.accounts.iter().any(|a| a.id == account.id) {
            return Err(LedgerError::DuplicateId(account.id));
        }
        self.accounts.push(account);
        Ok(())
    }

    /// Posts a transaction and adjusts the owning account's balance as one
    /// indivisible transition. The transaction is prepended so the newest
    /// activity is always first.
    pub fn post_transaction(&mut self, tx: Transaction) -> Result<(), LedgerError> {
        if tx.amount.is_sign_negative() {
            return Err(LedgerError::InvalidAmount(tx.amount));
        }
        let account = self
            .accounts
            .iter_mut()
            .find(|a| a.id == tx.account_id)
            .ok_or_else(|| LedgerError::UnknownAccount(tx.account_id.clone()))?;
        match tx.direction {
            Direction::Income => account.balance += tx.amount,
            Direction::Expense => account.balance -= tx.amount,
        }
        self.transactions.insert(0, tx);
        Ok(())
    }

    /// Removes the account and every transaction referencing it. Unknown
    /// ids are a silent no-op.
    pub fn delete_account(&mut self, id: &str) {
        self.accounts.retain(|a| a.id != id);
        self.transactions.retain(|t| t.account_id != id);
    }
}
