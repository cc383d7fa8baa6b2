//! Output formatting utilities

use crate::domain::{Entry, Tag, TagDeltaReport};

const TITLE_WIDTH: usize = 40;

fn format_timestamp(entry: &Entry) -> String {
    entry.date.format("%Y-%m-%d %H:%M").to_string()
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let head: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}

/// Format entries as a table: ID, date, privacy, title, tags
pub fn format_entry_table(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries found.".to_string();
    }

    let mut output = format!(
        "{:<5} {:<16} {:<7} {:<width$} {}\n",
        "ID",
        "Date",
        "Private",
        "Title",
        "Tags",
        width = TITLE_WIDTH
    );
    for entry in entries {
        let tags = if entry.tags.is_empty() {
            "None".to_string()
        } else {
            entry.tags.join(", ")
        };
        output.push_str(&format!(
            "{:<5} {:<16} {:<7} {:<width$} {}\n",
            entry.id,
            format_timestamp(entry),
            yes_no(entry.is_private),
            truncate(&entry.title, TITLE_WIDTH),
            tags,
            width = TITLE_WIDTH
        ));
    }
    output
}

/// Full detail block for one entry
pub fn format_entry_details(entry: &Entry) -> String {
    let tags = if entry.tags.is_empty() {
        "No Tags".to_string()
    } else {
        entry.tags.join(", ")
    };

    format!(
        "--- Entry ID: {} ---\n\
        Title: {}\n\
        Date: {}\n\
        Private: {}\n\
        Tags: {}\n\
        Content:\n{}\n\
        -------------------------",
        entry.id,
        entry.title,
        format_timestamp(entry),
        yes_no(entry.is_private),
        tags,
        entry.content
    )
}

/// Format tags with their entry counts
pub fn format_tag_list(tags: &[(Tag, usize)]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for (tag, count) in tags {
        output.push_str(&format!("{:<5} {} ({})\n", tag.id, tag.name, count));
    }
    output
}

/// Summarize what a tag delta did
pub fn format_delta_report(report: &TagDeltaReport) -> String {
    let sections = [
        ("Created new tags", &report.created),
        ("Added", &report.added),
        ("Already attached", &report.already_attached),
        ("Removed", &report.removed),
        ("Not attached", &report.not_attached),
        ("No such tag", &report.unknown),
    ];

    let lines: Vec<String> = sections
        .iter()
        .filter(|(_, names)| !names.is_empty())
        .map(|(label, names)| format!("{}: {}", label, names.join(", ")))
        .collect();

    if lines.is_empty() {
        "No tag changes.".to_string()
    } else {
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn entry(id: i64, title: &str, tags: &[&str]) -> Entry {
        Entry {
            id,
            title: title.to_string(),
            content: "Body text".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 5)
                .unwrap()
                .and_hms_opt(14, 7, 59)
                .unwrap(),
            is_private: true,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_entry_table(&[]), "No entries found.");
    }

    #[test]
    fn test_format_entry_table() {
        let output = format_entry_table(&[entry(3, "My Day", &["Work", "Home"]), entry(1, "Quiet", &[])]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID    Date"));
        assert!(lines[1].starts_with("3     2024-01-05 14:07 Yes     My Day"));
        assert!(lines[1].ends_with("Work, Home"));
        assert!(lines[2].ends_with("None"));
    }

    #[test]
    fn test_long_titles_are_truncated() {
        let long = "x".repeat(60);
        let output = format_entry_table(&[entry(1, &long, &[])]);
        assert!(output.contains(&format!("{}...", "x".repeat(37))));
        assert!(!output.contains(&long));
    }

    #[test]
    fn test_format_entry_details() {
        let output = format_entry_details(&entry(7, "My Day", &[]));
        assert!(output.starts_with("--- Entry ID: 7 ---"));
        assert!(output.contains("Title: My Day"));
        assert!(output.contains("Date: 2024-01-05 14:07"));
        assert!(output.contains("Private: Yes"));
        assert!(output.contains("Tags: No Tags"));
        assert!(output.contains("Content:\nBody text"));
    }

    #[test]
    fn test_format_tag_list() {
        assert_eq!(format_tag_list(&[]), "No tags found");

        let tags = vec![(
            Tag {
                id: 2,
                name: "Work".to_string(),
            },
            3,
        )];
        assert_eq!(format_tag_list(&tags), "2     Work (3)\n");
    }

    #[test]
    fn test_format_delta_report() {
        let report = TagDeltaReport {
            added: vec!["A".to_string(), "B".to_string()],
            removed: vec!["C".to_string()],
            unknown: vec!["Ghost".to_string()],
            ..Default::default()
        };
        assert_eq!(
            format_delta_report(&report),
            "Added: A, B\nRemoved: C\nNo such tag: Ghost"
        );
        assert_eq!(
            format_delta_report(&TagDeltaReport::default()),
            "No tag changes."
        );
    }
}
