use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A loan in progress. The three fields always travel together: an item is
/// either fully loaned out or not loaned at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub borrower: String,
    pub loaned_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

/// Explicit loan state. Modeling this as an enum (rather than nullable
/// borrower/date fields) makes a half-set loan unrepresentable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoanStatus {
    Available,
    OnLoan(Loan),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub isbn: String,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
}

impl Item {
    pub fn new(title: String, author: String, genre: String, isbn: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            author,
            genre,
            isbn,
            status: LoanStatus::Available,
            created_at: Utc::now(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self.status, LoanStatus::Available)
    }

    /// The active loan, if any.
    pub fn loan(&self) -> Option<&Loan> {
        match &self.status {
            LoanStatus::Available => None,
            LoanStatus::OnLoan(loan) => Some(loan),
        }
    }
}
