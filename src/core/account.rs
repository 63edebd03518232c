use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of financial account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Checking,
    Savings,
    Credit,
    Investment,
}

/// A financial account with a manually maintained balance.
///
/// The balance is a user-edited snapshot; it is not derived from the
/// transaction collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub kind: AccountKind,
    /// Current balance, signed (credit accounts may go negative).
    pub balance: f64,
    /// Optional external account number, display-only.
    pub account_number: Option<String>,
    /// Currency code for the balance (e.g., USD).
    pub currency: String,
}

impl Account {
    /// Creates a new account with a freshly generated identifier.
    pub fn new(
        name: String,
        kind: AccountKind,
        balance: f64,
        account_number: Option<String>,
        currency: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            balance,
            account_number,
            currency,
        }
    }
}

/// Partial update for an [`Account`]. Absent fields are left untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AccountPatch {
    pub name: Option<String>,
    pub kind: Option<AccountKind>,
    pub balance: Option<f64>,
    pub account_number: Option<String>,
    pub currency: Option<String>,
}

impl AccountPatch {
    pub(crate) fn apply_to(self, account: &mut Account) {
        if let Some(name) = self.name {
            account.name = name;
        }
        if let Some(kind) = self.kind {
            account.kind = kind;
        }
        if let Some(balance) = self.balance {
            account.balance = balance;
        }
        if let Some(number) = self.account_number {
            account.account_number = Some(number);
        }
        if let Some(currency) = self.currency {
            account.currency = currency;
        }
    }
}
