use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;

use super::transaction::{Transaction, TransactionKind};

/// Field a transaction listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Date,
    Amount,
    Title,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Filter and sort criteria for the transaction list.
///
/// Every predicate is optional; an absent predicate matches everything.
/// Without an explicit sort the insertion order is preserved.
#[derive(Debug, Default, Clone)]
pub struct TransactionQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub sort: Option<SortField>,
    pub order: SortOrder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    InvalidToken(String),
    InvalidDate(String),
    InvalidAmount(String),
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::InvalidToken(t) => write!(f, "invalid token: {t}"),
            ParseError::InvalidDate(d) => write!(f, "invalid date: {d}"),
            ParseError::InvalidAmount(a) => write!(f, "invalid amount: {a}"),
        }
    }
}

impl std::error::Error for ParseError {}

impl FromStr for TransactionQuery {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut q = TransactionQuery::default();
        for token in s.split_whitespace() {
            if let Some(rest) = token.strip_prefix("type:") {
                q.kind = Some(parse_kind(rest).ok_or_else(|| ParseError::InvalidToken(token.into()))?);
            } else if let Some(rest) = token.strip_prefix("category:") {
                q.category = Some(rest.to_string());
            } else if let Some(rest) = token.strip_prefix("start:") {
                q.start = Some(parse_date(rest)?);
            } else if let Some(rest) = token.strip_prefix("end:") {
                q.end = Some(parse_date(rest)?);
            } else if let Some(rest) = token.strip_prefix("date:") {
                let parts: Vec<&str> = rest.split("..").collect();
                if parts.len() != 2 {
                    return Err(ParseError::InvalidToken(token.into()));
                }
                if !parts[0].is_empty() {
                    q.start = Some(parse_date(parts[0])?);
                }
                if !parts[1].is_empty() {
                    q.end = Some(parse_date(parts[1])?);
                }
            } else if let Some(rest) = token.strip_prefix("min:") {
                q.min_amount = Some(parse_amount(rest)?);
            } else if let Some(rest) = token.strip_prefix("max:") {
                q.max_amount = Some(parse_amount(rest)?);
            } else if let Some(rest) = token.strip_prefix("sort:") {
                let (field, order) = parse_sort(rest).ok_or_else(|| ParseError::InvalidToken(token.into()))?;
                q.sort = Some(field);
                q.order = order;
            } else {
                return Err(ParseError::InvalidToken(token.into()));
            }
        }
        Ok(q)
    }
}

fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidDate(s.into()))
}

fn parse_amount(s: &str) -> Result<f64, ParseError> {
    s.parse::<f64>().map_err(|_| ParseError::InvalidAmount(s.into()))
}

fn parse_kind(s: &str) -> Option<TransactionKind> {
    match s {
        "income" => Some(TransactionKind::Income),
        "expense" => Some(TransactionKind::Expense),
        _ => None,
    }
}

fn parse_sort(s: &str) -> Option<(SortField, SortOrder)> {
    let (field, order) = match s.split_once(':') {
        Some((f, "asc")) => (f, SortOrder::Ascending),
        Some((f, "desc")) => (f, SortOrder::Descending),
        Some(_) => return None,
        None => (s, SortOrder::Ascending),
    };
    let field = match field {
        "date" => SortField::Date,
        "amount" => SortField::Amount,
        "title" => SortField::Title,
        "category" => SortField::Category,
        _ => return None,
    };
    Some((field, order))
}

impl TransactionQuery {
    /// True when the transaction passes every present predicate.
    pub fn matches(&self, tx: &Transaction) -> bool {
        if let Some(start) = self.start {
            if tx.date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if tx.date > end {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if tx.kind != kind {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if &tx.category != category {
                return false;
            }
        }
        if let Some(min) = self.min_amount {
            if tx.amount < min {
                return false;
            }
        }
        if let Some(max) = self.max_amount {
            if tx.amount > max {
                return false;
            }
        }
        true
    }

    /// Applies the predicates and, when a sort field is set, the sort.
    pub fn filter<'a>(&self, transactions: &'a [Transaction]) -> Vec<&'a Transaction> {
        let mut out: Vec<&Transaction> = transactions.iter().filter(|t| self.matches(t)).collect();
        if let Some(field) = self.sort {
            out.sort_by(|a, b| {
                let ord = match field {
                    SortField::Date => a.date.cmp(&b.date),
                    SortField::Amount => {
                        a.amount.partial_cmp(&b.amount).unwrap_or(Ordering::Equal)
                    }
                    SortField::Title => a.title.cmp(&b.title),
                    SortField::Category => a.category.cmp(&b.category),
                };
                match self.order {
                    SortOrder::Ascending => ord,
                    SortOrder::Descending => ord.reverse(),
                }
            });
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(title: &str, amount: f64, kind: TransactionKind, category: &str, day: u32) -> Transaction {
        Transaction::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            title.into(),
            String::new(),
            amount,
            kind,
            category.into(),
            None,
        )
    }

    #[test]
    fn parse_simple_tokens() {
        let q: TransactionQuery = "type:income category:food start:2024-01-01 end:2024-01-31 min:5 max:100"
            .parse()
            .unwrap();
        assert_eq!(q.kind, Some(TransactionKind::Income));
        assert_eq!(q.category.as_deref(), Some("food"));
        assert_eq!(q.start, Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert_eq!(q.end, Some(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert_eq!(q.min_amount, Some(5.0));
        assert_eq!(q.max_amount, Some(100.0));
    }

    #[test]
    fn parse_date_range_and_sort() {
        let q: TransactionQuery = "date:2024-01-01..2024-02-01 sort:amount:desc".parse().unwrap();
        assert_eq!(q.start, Some(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert_eq!(q.end, Some(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert_eq!(q.sort, Some(SortField::Amount));
        assert_eq!(q.order, SortOrder::Descending);
    }

    #[test]
    fn parse_rejects_unknown_token() {
        let err = "frobnicate:yes".parse::<TransactionQuery>().unwrap_err();
        assert_eq!(err, ParseError::InvalidToken("frobnicate:yes".into()));
    }

    #[test]
    fn absent_predicates_match_everything() {
        let list = vec![
            tx("coffee", 3.0, TransactionKind::Expense, "food", 5),
            tx("salary", 1800.0, TransactionKind::Income, "work", 10),
        ];
        let q = TransactionQuery::default();
        assert_eq!(q.filter(&list).len(), 2);
    }

    #[test]
    fn filter_preserves_insertion_order_without_sort() {
        let list = vec![
            tx("b", 10.0, TransactionKind::Expense, "misc", 3),
            tx("a", 5.0, TransactionKind::Expense, "misc", 1),
        ];
        let q = TransactionQuery::default();
        let titles: Vec<&str> = q.filter(&list).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn sort_by_amount_descending() {
        let list = vec![
            tx("small", 5.0, TransactionKind::Expense, "misc", 1),
            tx("big", 50.0, TransactionKind::Expense, "misc", 2),
            tx("mid", 20.0, TransactionKind::Expense, "misc", 3),
        ];
        let q: TransactionQuery = "sort:amount:desc".parse().unwrap();
        let titles: Vec<&str> = q.filter(&list).iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["big", "mid", "small"]);
    }
}
