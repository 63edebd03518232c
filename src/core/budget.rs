use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Period a budget limit applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetPeriod {
    Weekly,
    Monthly,
    Yearly,
}

/// A spending budget for a single category.
///
/// `spent` is a manually maintained figure, not derived from matching
/// transactions. Limit and spent are assumed to share a currency; nothing
/// here enforces that.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: Uuid,
    pub category: String,
    /// Spending ceiling for the period.
    pub limit: f64,
    /// Amount spent so far, user-entered.
    pub spent: f64,
    pub period: BudgetPeriod,
}

impl Budget {
    /// Creates a new budget with a freshly generated identifier and zero
    /// spent amount.
    pub fn new(category: String, limit: f64, period: BudgetPeriod) -> Self {
        Self {
            id: Uuid::new_v4(),
            category,
            limit,
            spent: 0.0,
            period,
        }
    }

    /// Amount left before hitting the limit; negative when over budget.
    pub fn remaining(&self) -> f64 {
        self.limit - self.spent
    }

    /// True when spending has exceeded the limit.
    pub fn is_over(&self) -> bool {
        self.remaining() < 0.0
    }
}

/// Partial update for a [`Budget`]. Absent fields are left untouched.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BudgetPatch {
    pub category: Option<String>,
    pub limit: Option<f64>,
    pub spent: Option<f64>,
    pub period: Option<BudgetPeriod>,
}

impl BudgetPatch {
    pub(crate) fn apply_to(self, budget: &mut Budget) {
        if let Some(category) = self.category {
            budget.category = category;
        }
        if let Some(limit) = self.limit {
            budget.limit = limit;
        }
        if let Some(spent) = self.spent {
            budget.spent = spent;
        }
        if let Some(period) = self.period {
            budget.period = period;
        }
    }
}
