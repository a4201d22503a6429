use crate::model::Item;

pub mod add;
pub mod genre;
pub mod lend;
pub mod list;
pub mod overdue;
pub mod remove;
pub mod report;
pub mod return_item;
pub mod search;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// One overdue loan in a report: a value copy of the item with its fine
/// (rounded to cents) computed at query time.
#[derive(Debug, Clone)]
pub struct OverdueEntry {
    pub item: Item,
    pub fine: f64,
}

/// Aggregate catalog summary.
#[derive(Debug, Clone, PartialEq)]
pub struct LibraryReport {
    pub total_items: usize,
    pub on_loan: usize,
    pub available: usize,
    pub overdue: usize,
    /// Sum over currently-overdue loans, rounded to cents once at the end.
    pub total_fines_owed: f64,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_items: Vec<Item>,
    pub listed_items: Vec<Item>,
    pub overdue_items: Vec<OverdueEntry>,
    pub report: Option<LibraryReport>,
    /// Unrounded fine charged by a return, if any.
    pub fine: Option<f64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_items(mut self, items: Vec<Item>) -> Self {
        self.listed_items = items;
        self
    }

    pub fn with_overdue_items(mut self, entries: Vec<OverdueEntry>) -> Self {
        self.overdue_items = entries;
        self
    }

    pub fn with_report(mut self, report: LibraryReport) -> Self {
        self.report = Some(report);
        self
    }
}
