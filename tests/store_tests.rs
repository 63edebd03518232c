use chrono::NaiveDate;
use pocket_ledger::core::{
    Account, AccountKind, AccountPatch, Budget, BudgetPatch, BudgetPeriod, FinanceStore,
    MutationOutcome, SettingsPatch, Transaction, TransactionKind, TransactionPatch,
};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expense(title: &str, amount: f64) -> Transaction {
    Transaction::new(
        date(2024, 1, 10),
        title.into(),
        String::new(),
        amount,
        TransactionKind::Expense,
        "misc".into(),
        None,
    )
}

#[test]
fn create_grows_collection_by_one_with_unique_id() {
    let mut store = FinanceStore::new();
    let first = store.add_transaction(expense("a", 1.0));
    let second = store.add_transaction(expense("b", 2.0));
    assert_eq!(store.transactions().len(), 2);
    assert_ne!(first, second);
}

#[test]
fn patch_changes_only_named_fields() {
    let mut store = FinanceStore::new();
    let id = store.add_transaction(expense("coffee", 3.0));
    let before = store.transaction(id).unwrap().clone();

    let outcome = store.patch_transaction(
        id,
        TransactionPatch {
            title: Some("espresso".into()),
            ..Default::default()
        },
    );
    assert_eq!(outcome, MutationOutcome::Applied);

    let after = store.transaction(id).unwrap();
    assert_eq!(after.title, "espresso");
    assert_eq!(after.amount, before.amount);
    assert_eq!(after.date, before.date);
    assert_eq!(after.category, before.category);
    assert_eq!(after.notes, before.notes);
}

#[test]
fn patch_of_unknown_id_is_a_silent_noop() {
    let mut store = FinanceStore::new();
    store.add_transaction(expense("coffee", 3.0));
    let snapshot_before = store.snapshot();

    let outcome = store.patch_transaction(
        Uuid::new_v4(),
        TransactionPatch {
            amount: Some(99.0),
            ..Default::default()
        },
    );
    assert_eq!(outcome, MutationOutcome::NotFound);
    assert_eq!(store.snapshot(), snapshot_before);
}

#[test]
fn remove_is_idempotent() {
    let mut store = FinanceStore::new();
    let id = store.add_transaction(expense("coffee", 3.0));

    assert_eq!(store.remove_transaction(id), MutationOutcome::Applied);
    assert!(store.transactions().is_empty());
    assert_eq!(store.remove_transaction(id), MutationOutcome::NotFound);
    assert!(store.transactions().is_empty());
}

#[test]
fn empty_store_has_zero_totals() {
    let store = FinanceStore::new();
    assert_eq!(store.total_income(), 0.0);
    assert_eq!(store.total_expenses(), 0.0);
    assert_eq!(store.total_balance(), 0.0);
    assert_eq!(store.total_debt(), 0.0);
}

#[test]
fn total_balance_sums_signed_balances() {
    let mut store = FinanceStore::new();
    store.add_account(Account::new(
        "Checking".into(),
        AccountKind::Checking,
        100.0,
        None,
        "USD".into(),
    ));
    store.add_account(Account::new(
        "Card".into(),
        AccountKind::Credit,
        -40.0,
        Some("1234".into()),
        "USD".into(),
    ));
    assert_eq!(store.total_balance(), 60.0);
}

#[test]
fn income_and_expense_totals_are_split_by_kind() {
    let mut store = FinanceStore::new();
    store.add_transaction(Transaction::new(
        date(2024, 1, 1),
        "salary".into(),
        String::new(),
        1800.0,
        TransactionKind::Income,
        "work".into(),
        None,
    ));
    store.add_transaction(expense("rent", 700.0));
    store.add_transaction(expense("food", 120.0));

    assert_eq!(store.total_income(), 1800.0);
    assert_eq!(store.total_expenses(), 820.0);
}

#[test]
fn over_budget_detection() {
    let mut store = FinanceStore::new();
    let id = store.add_budget(Budget::new("food".into(), 200.0, BudgetPeriod::Monthly));
    store.patch_budget(
        id,
        BudgetPatch {
            spent: Some(250.0),
            ..Default::default()
        },
    );
    let budget = store.budget(id).unwrap();
    assert!(budget.is_over());
    assert_eq!(budget.remaining(), -50.0);
}

#[test]
fn account_patch_misses_leave_collection_unchanged() {
    let mut store = FinanceStore::new();
    store.add_account(Account::new(
        "Main".into(),
        AccountKind::Savings,
        100.0,
        None,
        "USD".into(),
    ));
    let before = store.snapshot();
    let outcome = store.patch_account(
        Uuid::new_v4(),
        AccountPatch {
            balance: Some(0.0),
            ..Default::default()
        },
    );
    assert_eq!(outcome, MutationOutcome::NotFound);
    assert_eq!(store.snapshot(), before);
}

#[test]
fn settings_patch_always_applies() {
    let mut store = FinanceStore::new();
    store.patch_settings(SettingsPatch {
        language: Some("de".into()),
        date_format: Some("DD.MM.YYYY".into()),
        ..Default::default()
    });
    assert_eq!(store.settings().language, "de");
    assert_eq!(store.settings().date_format, "DD.MM.YYYY");
    assert_eq!(store.settings().currency, "USD");
}

#[test]
fn store_accepts_unvalidated_input() {
    // Validation belongs to the form layer; the store takes what it is given.
    let mut store = FinanceStore::new();
    let id = store.add_transaction(expense("refund gone wrong", -15.0));
    assert_eq!(store.transaction(id).unwrap().amount, -15.0);
}
