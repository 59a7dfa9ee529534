//! Plain-text table rendering for console output.
//!
//! Cells may span several lines; each `\n` inside a cell starts a new
//! physical line within the same row.

use crate::directory::{AddressBook, UpcomingBirthday};
use std::fmt;

/// A simple bordered text table.
///
/// ```text
/// +-------+------------+
/// | Name  | Phones     |
/// +-------+------------+
/// | Alice | 1234567890 |
/// +-------+------------+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Missing cells render empty, extra cells are dropped.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .take(self.headers.len())
            .map(Into::into)
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                let longest = cell.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                *width = (*width).max(longest);
            }
        }
        widths
    }
}

fn write_border(f: &mut fmt::Formatter<'_>, widths: &[usize]) -> fmt::Result {
    write!(f, "+")?;
    for width in widths {
        write!(f, "{}+", "-".repeat(width + 2))?;
    }
    Ok(())
}

fn write_row(f: &mut fmt::Formatter<'_>, widths: &[usize], cells: &[String]) -> fmt::Result {
    let lines: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
    let height = lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    for line in 0..height {
        write!(f, "|")?;
        for (cell, width) in lines.iter().zip(widths) {
            let text = cell.get(line).copied().unwrap_or("");
            let pad = width - text.chars().count();
            write!(f, " {}{} |", text, " ".repeat(pad))?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();

        write_border(f, &widths)?;
        writeln!(f)?;
        write_row(f, &widths, &self.headers)?;
        write_border(f, &widths)?;
        writeln!(f)?;
        for row in &self.rows {
            write_row(f, &widths, row)?;
        }
        write_border(f, &widths)
    }
}

/// All contacts, one phone per line.
pub fn contacts_table(book: &AddressBook) -> Table {
    let mut table = Table::new(["Name", "Phones"]);
    for record in book.records() {
        let phones: Vec<&str> = record.phones().iter().map(|p| p.as_str()).collect();
        table.add_row([record.name().to_string(), phones.join("\n")]);
    }
    table
}

/// The upcoming birthday report.
pub fn birthdays_table(entries: &[UpcomingBirthday]) -> Table {
    let mut table = Table::new(["Name", "Congratulation date"]);
    for entry in entries {
        table.add_row([entry.name.to_string(), entry.formatted_date().to_string()]);
    }
    table
}
