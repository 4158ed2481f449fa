use crate::{api::StudentRosterEntry, utils::csv::append_csv_row};
use chrono::NaiveDate;

pub const ROSTER_CLASS: &str = "Mathematics 101";

/// Roster rows as CSV. Absent students have no arrival time and export an
/// empty cell.
pub fn roster_csv(entries: &[StudentRosterEntry]) -> String {
    let mut csv = String::new();
    append_csv_row(&mut csv, &["Name", "Email", "Status", "Time"]);
    for entry in entries {
        append_csv_row(
            &mut csv,
            &[
                entry.name.as_str(),
                entry.email.as_str(),
                entry.status.as_str(),
                entry.time.as_deref().unwrap_or_default(),
            ],
        );
    }
    csv
}

pub fn export_filename(class_name: &str, date: NaiveDate) -> String {
    let slug: String = class_name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    format!("{}-attendance-{}.csv", slug, date.format("%Y-%m-%d"))
}
