use biblio::api::{CmdMessage, LibraryReport, MessageLevel, OverdueEntry};
use biblio::model::Item;
use chrono::Utc;
use colored::Colorize;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const TITLE_WIDTH: usize = 32;
const AUTHOR_WIDTH: usize = 20;
const GENRE_WIDTH: usize = 12;

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_items(items: &[Item]) {
    if items.is_empty() {
        println!("No items found.");
        return;
    }

    for item in items {
        let status = match item.loan() {
            None => "available".green(),
            Some(loan) => {
                let due = format!("due {}", format_relative(loan.due_at));
                if loan.due_at < Utc::now() {
                    format!("{} ({})", due, loan.borrower).red()
                } else {
                    format!("{} ({})", due, loan.borrower).yellow()
                }
            }
        };

        println!(
            "{}  {}  {}  {}  {}",
            pad_to_width(&item.title, TITLE_WIDTH).bold(),
            pad_to_width(&item.author, AUTHOR_WIDTH),
            pad_to_width(&item.genre, GENRE_WIDTH).dimmed(),
            status,
            item.id.to_string().dimmed(),
        );
    }
}

pub fn print_overdue(entries: &[OverdueEntry]) {
    if entries.is_empty() {
        println!("No overdue loans.");
        return;
    }

    for entry in entries {
        let Some(loan) = entry.item.loan() else {
            continue;
        };
        println!(
            "{}  {} has it, due {}  {}",
            pad_to_width(&entry.item.title, TITLE_WIDTH).bold(),
            loan.borrower,
            format_relative(loan.due_at).red(),
            format!("${:.2}", entry.fine).red().bold(),
        );
    }
}

pub fn print_report(report: &LibraryReport) {
    println!("{}", "Library report".bold());
    println!("  Items in catalog:  {}", report.total_items);
    println!("  On loan:           {}", report.on_loan);
    println!("  Available:         {}", report.available);
    println!("  Overdue:           {}", report.overdue);
    println!(
        "  Fines owed:        {}",
        format!("${:.2}", report.total_fines_owed).bold()
    );
}

/// Pad (or pass through) to a fixed display width, unicode-aware.
fn pad_to_width(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// "in 3 days" / "3 days ago" relative to now.
fn format_relative(at: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let formatter = Formatter::new();
    if at <= now {
        let duration = now.signed_duration_since(at);
        formatter.convert(duration.to_std().unwrap_or_default())
    } else {
        let duration = at.signed_duration_since(now);
        format!(
            "in {}",
            formatter
                .convert(duration.to_std().unwrap_or_default())
                .trim_end_matches(" ago")
        )
    }
}
