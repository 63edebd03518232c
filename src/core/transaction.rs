use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction relative to the user's funds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

/// A single user-entered transaction.
///
/// The amount is stored as a non-negative value; direction comes from
/// [`TransactionKind`], not from the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier for this transaction.
    pub id: Uuid,
    /// Calendar date the transaction occurred on.
    pub date: NaiveDate,
    /// Short label shown in lists.
    pub title: String,
    /// Longer free-form description.
    pub description: String,
    /// Monetary amount, always non-negative.
    pub amount: f64,
    /// Whether this is income or an expense.
    pub kind: TransactionKind,
    /// Free-form category label.
    pub category: String,
    /// Optional notes attached by the user.
    pub notes: Option<String>,
}

impl Transaction {
    /// Creates a new transaction with a freshly generated identifier.
    ///
    /// Field constraints (non-empty title, non-negative amount) are enforced
    /// by the form layer; this constructor accepts whatever it is given.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: NaiveDate,
        title: String,
        description: String,
        amount: f64,
        kind: TransactionKind,
        category: String,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            title,
            description,
            amount,
            kind,
            category,
            notes,
        }
    }
}

/// Partial update for a [`Transaction`]. Absent fields are left untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct TransactionPatch {
    pub date: Option<NaiveDate>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub amount: Option<f64>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub notes: Option<String>,
}

impl TransactionPatch {
    pub(crate) fn apply_to(self, tx: &mut Transaction) {
        if let Some(date) = self.date {
            tx.date = date;
        }
        if let Some(title) = self.title {
            tx.title = title;
        }
        if let Some(description) = self.description {
            tx.description = description;
        }
        if let Some(amount) = self.amount {
            tx.amount = amount;
        }
        if let Some(kind) = self.kind {
            tx.kind = kind;
        }
        if let Some(category) = self.category {
            tx.category = category;
        }
        if let Some(notes) = self.notes {
            tx.notes = Some(notes);
        }
    }
}
