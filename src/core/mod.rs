//! Core domain state for the finance tracker.
//!
//! [`FinanceStore`] holds the authoritative in-memory collections and applies
//! mutation commands issued by the presentation layer. Mutations targeting an
//! unknown identifier are silent no-ops (stale UI references such as a
//! double-fired delete must not error); the [`MutationOutcome`] tag exists so
//! callers and tests can still observe the miss.

pub mod account;
pub mod budget;
pub mod debt;
pub mod query;
pub mod settings;
pub mod transaction;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use account::{Account, AccountKind, AccountPatch};
pub use budget::{Budget, BudgetPatch, BudgetPeriod};
pub use debt::{Debt, DebtKind, DebtPatch, DebtPayment};
pub use query::{SortField, SortOrder, TransactionQuery};
pub use settings::{SettingsPatch, UserSettings};
pub use transaction::{Transaction, TransactionKind, TransactionPatch};

/// Whether a mutation found its target.
///
/// The UI is free to ignore this; either way a miss leaves the store
/// untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    NotFound,
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, MutationOutcome::Applied)
    }
}

/// Entity collections as persisted under the "finances" slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancesSnapshot {
    pub transactions: Vec<Transaction>,
    pub accounts: Vec<Account>,
    pub budgets: Vec<Budget>,
    pub debts: Vec<Debt>,
}

/// Serialized shape of the whole store, keyed by slice name. Round-trips
/// through a storage adapter back into an equivalent store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub finances: FinancesSnapshot,
    pub settings: UserSettings,
}

/// Authoritative in-memory state: entity collections plus the settings
/// singleton.
///
/// Constructed once at startup (seeded from storage via
/// [`crate::storage::restore`]) and passed by reference to whatever owns the
/// event loop. The store performs no input validation; field constraints are
/// the form layer's job and malformed values are accepted as-is.
#[derive(Debug, Default)]
pub struct FinanceStore {
    transactions: Vec<Transaction>,
    accounts: Vec<Account>,
    budgets: Vec<Budget>,
    debts: Vec<Debt>,
    settings: UserSettings,
    revision: u64,
}

impl FinanceStore {
    /// Creates an empty store with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a store from a persisted snapshot.
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            transactions: snapshot.finances.transactions,
            accounts: snapshot.finances.accounts,
            budgets: snapshot.finances.budgets,
            debts: snapshot.finances.debts,
            settings: snapshot.settings,
            revision: 0,
        }
    }

    /// Captures the current state for persistence.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            finances: FinancesSnapshot {
                transactions: self.transactions.clone(),
                accounts: self.accounts.clone(),
                budgets: self.budgets.clone(),
                debts: self.debts.clone(),
            },
            settings: self.settings.clone(),
        }
    }

    /// Counter bumped by every applied mutation. The persistence host
    /// compares revisions to decide whether a write is due.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    // ---- transactions ----

    /// Appends a transaction and returns its identifier.
    pub fn add_transaction(&mut self, tx: Transaction) -> Uuid {
        let id = tx.id;
        self.transactions.push(tx);
        self.touch();
        id
    }

    pub fn patch_transaction(&mut self, id: Uuid, patch: TransactionPatch) -> MutationOutcome {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(tx) => {
                patch.apply_to(tx);
                self.touch();
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn remove_transaction(&mut self, id: Uuid) -> MutationOutcome {
        let before = self.transactions.len();
        self.transactions.retain(|t| t.id != id);
        if self.transactions.len() == before {
            MutationOutcome::NotFound
        } else {
            self.touch();
            MutationOutcome::Applied
        }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|t| t.id == id)
    }

    /// Convenience wrapper over [`TransactionQuery::filter`].
    pub fn filter_transactions(&self, query: &TransactionQuery) -> Vec<&Transaction> {
        query.filter(&self.transactions)
    }

    // ---- accounts ----

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        self.touch();
        id
    }

    pub fn patch_account(&mut self, id: Uuid, patch: AccountPatch) -> MutationOutcome {
        match self.accounts.iter_mut().find(|a| a.id == id) {
            Some(account) => {
                patch.apply_to(account);
                self.touch();
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn remove_account(&mut self, id: Uuid) -> MutationOutcome {
        let before = self.accounts.len();
        self.accounts.retain(|a| a.id != id);
        if self.accounts.len() == before {
            MutationOutcome::NotFound
        } else {
            self.touch();
            MutationOutcome::Applied
        }
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    // ---- budgets ----

    pub fn add_budget(&mut self, budget: Budget) -> Uuid {
        let id = budget.id;
        self.budgets.push(budget);
        self.touch();
        id
    }

    pub fn patch_budget(&mut self, id: Uuid, patch: BudgetPatch) -> MutationOutcome {
        match self.budgets.iter_mut().find(|b| b.id == id) {
            Some(budget) => {
                patch.apply_to(budget);
                self.touch();
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn remove_budget(&mut self, id: Uuid) -> MutationOutcome {
        let before = self.budgets.len();
        self.budgets.retain(|b| b.id != id);
        if self.budgets.len() == before {
            MutationOutcome::NotFound
        } else {
            self.touch();
            MutationOutcome::Applied
        }
    }

    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn budget(&self, id: Uuid) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.id == id)
    }

    // ---- debts ----

    pub fn add_debt(&mut self, debt: Debt) -> Uuid {
        let id = debt.id;
        self.debts.push(debt);
        self.touch();
        id
    }

    pub fn patch_debt(&mut self, id: Uuid, patch: DebtPatch) -> MutationOutcome {
        match self.debts.iter_mut().find(|d| d.id == id) {
            Some(debt) => {
                patch.apply_to(debt);
                self.touch();
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    pub fn remove_debt(&mut self, id: Uuid) -> MutationOutcome {
        let before = self.debts.len();
        self.debts.retain(|d| d.id != id);
        if self.debts.len() == before {
            MutationOutcome::NotFound
        } else {
            self.touch();
            MutationOutcome::Applied
        }
    }

    pub fn debts(&self) -> &[Debt] {
        &self.debts
    }

    pub fn debt(&self, id: Uuid) -> Option<&Debt> {
        self.debts.iter().find(|d| d.id == id)
    }

    /// Records a payment against a debt; the debt's outstanding balance
    /// drops by derivation. No-op when the debt is unknown.
    pub fn add_payment(
        &mut self,
        debt_id: Uuid,
        amount: f64,
        date: NaiveDate,
        note: Option<String>,
    ) -> MutationOutcome {
        match self.debts.iter_mut().find(|d| d.id == debt_id) {
            Some(debt) => {
                debt.record_payment(amount, date, note);
                self.touch();
                MutationOutcome::Applied
            }
            None => MutationOutcome::NotFound,
        }
    }

    /// Removes a recorded payment; the debt's outstanding balance rises by
    /// derivation. No-op when either identifier is unknown.
    pub fn remove_payment(&mut self, debt_id: Uuid, payment_id: Uuid) -> MutationOutcome {
        match self.debts.iter_mut().find(|d| d.id == debt_id) {
            Some(debt) => {
                if debt.void_payment(payment_id) {
                    self.touch();
                    MutationOutcome::Applied
                } else {
                    MutationOutcome::NotFound
                }
            }
            None => MutationOutcome::NotFound,
        }
    }

    // ---- settings ----

    pub fn settings(&self) -> &UserSettings {
        &self.settings
    }

    /// Shallow-merges the patch into the settings singleton. Always applies.
    pub fn patch_settings(&mut self, patch: SettingsPatch) {
        patch.apply_to(&mut self.settings);
        self.touch();
    }

    // ---- derived selectors ----

    /// Sum of account balances, signed.
    pub fn total_balance(&self) -> f64 {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    /// Sum of income transaction amounts.
    pub fn total_income(&self) -> f64 {
        self.sum_of_kind(TransactionKind::Income)
    }

    /// Sum of expense transaction amounts.
    pub fn total_expenses(&self) -> f64 {
        self.sum_of_kind(TransactionKind::Expense)
    }

    fn sum_of_kind(&self, kind: TransactionKind) -> f64 {
        self.transactions
            .iter()
            .filter(|t| t.kind == kind)
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of outstanding balances across all debts.
    pub fn total_debt(&self) -> f64 {
        self.debts.iter().map(|d| d.amount()).sum()
    }

    pub fn debts_of_kind(&self, kind: DebtKind) -> Vec<&Debt> {
        self.debts.iter().filter(|d| d.kind == kind).collect()
    }

    /// Debts due later this month: due day strictly greater than `today`'s
    /// day-of-month, ascending by due day.
    ///
    /// Known limitation: the comparison does not wrap past the month
    /// boundary, so a debt due on the 3rd is not listed on the 25th even
    /// though it is chronologically the next payment.
    pub fn upcoming_payments(&self, today: NaiveDate) -> Vec<&Debt> {
        let day = today.day();
        let mut due: Vec<&Debt> = self.debts.iter().filter(|d| d.due_day > day).collect();
        due.sort_by_key(|d| d.due_day);
        due
    }
}
