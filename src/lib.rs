//! Pocket Ledger
//!
//! This crate provides the in-memory domain store of a personal-finance
//! tracker: transactions, accounts, budgets, debts, and user settings, with
//! snapshot persistence to a local storage slot.

pub mod core;
pub mod storage;
