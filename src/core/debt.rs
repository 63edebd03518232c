use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Kind of debt obligation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtKind {
    CreditCard,
    PersonalLoan,
    Mortgage,
    StudentLoan,
    Other,
}

/// A recorded payment against a debt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayment {
    pub id: Uuid,
    pub amount: f64,
    pub date: NaiveDate,
    pub note: Option<String>,
}

/// A tracked debt with its payment history.
///
/// The outstanding balance is not a stored field: it is always derived from
/// `original_amount` minus the recorded payments (see [`Debt::amount`]), so
/// the balance and the payment list cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    pub kind: DebtKind,
    /// Principal at the time the debt was entered. Never changed by
    /// payments; edit it only to correct a data-entry mistake.
    pub original_amount: f64,
    /// Annual interest rate in percent (0-100).
    pub interest_rate: f64,
    pub minimum_payment: f64,
    /// Day of the month the payment is due (1-31).
    pub due_day: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub lender: String,
    /// Payments in the order they were recorded.
    pub payments: Vec<DebtPayment>,
    pub auto_pay_enabled: bool,
    pub reminder_enabled: bool,
    pub notes: Option<String>,
}

impl Debt {
    /// Creates a new debt with a freshly generated identifier and an empty
    /// payment history.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        kind: DebtKind,
        original_amount: f64,
        interest_rate: f64,
        minimum_payment: f64,
        due_day: u32,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
        lender: String,
        auto_pay_enabled: bool,
        reminder_enabled: bool,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            kind,
            original_amount,
            interest_rate,
            minimum_payment,
            due_day,
            start_date,
            end_date,
            lender,
            payments: Vec::new(),
            auto_pay_enabled,
            reminder_enabled,
            notes,
        }
    }

    /// Outstanding balance: the original principal minus every recorded
    /// payment.
    pub fn amount(&self) -> f64 {
        let paid: f64 = self.payments.iter().map(|p| p.amount).sum();
        self.original_amount - paid
    }

    pub(crate) fn record_payment(
        &mut self,
        amount: f64,
        date: NaiveDate,
        note: Option<String>,
    ) -> Uuid {
        let payment = DebtPayment {
            id: Uuid::new_v4(),
            amount,
            date,
            note,
        };
        let id = payment.id;
        self.payments.push(payment);
        id
    }

    pub(crate) fn void_payment(&mut self, payment_id: Uuid) -> bool {
        let before = self.payments.len();
        self.payments.retain(|p| p.id != payment_id);
        self.payments.len() != before
    }
}

/// Partial update for a [`Debt`]. Absent fields are left untouched. The
/// payment list is only mutated through the store's payment operations.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct DebtPatch {
    pub name: Option<String>,
    pub kind: Option<DebtKind>,
    pub original_amount: Option<f64>,
    pub interest_rate: Option<f64>,
    pub minimum_payment: Option<f64>,
    pub due_day: Option<u32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub lender: Option<String>,
    pub auto_pay_enabled: Option<bool>,
    pub reminder_enabled: Option<bool>,
    pub notes: Option<String>,
}

impl DebtPatch {
    pub(crate) fn apply_to(self, debt: &mut Debt) {
        if let Some(name) = self.name {
            debt.name = name;
        }
        if let Some(kind) = self.kind {
            debt.kind = kind;
        }
        if let Some(original_amount) = self.original_amount {
            debt.original_amount = original_amount;
        }
        if let Some(interest_rate) = self.interest_rate {
            debt.interest_rate = interest_rate;
        }
        if let Some(minimum_payment) = self.minimum_payment {
            debt.minimum_payment = minimum_payment;
        }
        if let Some(due_day) = self.due_day {
            debt.due_day = due_day;
        }
        if let Some(start_date) = self.start_date {
            debt.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            debt.end_date = Some(end_date);
        }
        if let Some(lender) = self.lender {
            debt.lender = lender;
        }
        if let Some(auto_pay) = self.auto_pay_enabled {
            debt.auto_pay_enabled = auto_pay;
        }
        if let Some(reminder) = self.reminder_enabled {
            debt.reminder_enabled = reminder;
        }
        if let Some(notes) = self.notes {
            debt.notes = Some(notes);
        }
    }
}
