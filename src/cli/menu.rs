//! Interactive menu loop

use crate::application::{
    apply_tag_delta, create_entry, create_tag, delete_entry, delete_tag, entries_by_tag,
    find_tag, get_entry, list_entries, list_tags, search_entries, update_entry, TagCreation,
};
use crate::cli::output::{
    format_delta_report, format_entry_details, format_entry_table, format_tag_list,
};
use crate::domain::{EntryUpdate, NewEntry, SearchQuery, TagDelta, TagSelector};
use crate::error::{JournalError, Result};
use crate::infrastructure::Store;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::warn;

/// A numbered menu option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddEntry,
    ViewAll,
    ViewDetails,
    Search,
    UpdateEntry,
    DeleteEntry,
    CreateTag,
    ManageTags,
    ViewByTag,
    DeleteTag,
    Quit,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" => Ok(MenuChoice::AddEntry),
            "2" => Ok(MenuChoice::ViewAll),
            "3" => Ok(MenuChoice::ViewDetails),
            "4" => Ok(MenuChoice::Search),
            "5" => Ok(MenuChoice::UpdateEntry),
            "6" => Ok(MenuChoice::DeleteEntry),
            "7" => Ok(MenuChoice::CreateTag),
            "8" => Ok(MenuChoice::ManageTags),
            "9" => Ok(MenuChoice::ViewByTag),
            "10" => Ok(MenuChoice::DeleteTag),
            "q" | "quit" => Ok(MenuChoice::Quit),
            other => Err(format!("Invalid choice: {}", other)),
        }
    }
}

/// How an operation ended when it did not fail
enum Flow {
    Done,
    Cancelled,
}

const MENU: &str = "\n--- Journal Menu ---\n\
    1. Add New Entry\n\
    2. View All Entries\n\
    3. View Entry Details (by ID)\n\
    4. Search Entries\n\
    5. Update Entry\n\
    6. Delete Entry\n\
    7. Create New Tag\n\
    8. Manage Tags for Entry\n\
    9. View Entries by Tag\n\
    10. Delete Tag\n\
    Q. Quit\n\
    --------------------";

/// Read-eval loop over a store. Every operation reports its own failures and returns to the menu.
pub struct Menu<'a, R, W> {
    store: &'a Store,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a Store, input: R, output: W) -> Self {
        Menu {
            store,
            input,
            output,
        }
    }

    /// Run until the user quits or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.output, "{}", MENU)?;

            let Some(line) = self.read_line("Enter your choice: ")? else {
                writeln!(self.output, "\nGoodbye!")?;
                return Ok(());
            };

            match line.parse::<MenuChoice>() {
                Ok(MenuChoice::Quit) => {
                    writeln!(self.output, "Exiting journal. Goodbye!")?;
                    return Ok(());
                }
                Ok(choice) => self.dispatch(choice)?,
                Err(_) => writeln!(self.output, "Invalid choice. Please try again.")?,
            }
        }
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        let outcome = match choice {
            MenuChoice::AddEntry => self.add_entry(),
            MenuChoice::ViewAll => self.view_all_entries(),
            MenuChoice::ViewDetails => self.view_entry_details(),
            MenuChoice::Search => self.search(),
            MenuChoice::UpdateEntry => self.update_entry(),
            MenuChoice::DeleteEntry => self.delete_entry(),
            MenuChoice::CreateTag => self.create_tag(),
            MenuChoice::ManageTags => self.manage_tags(),
            MenuChoice::ViewByTag => self.view_entries_by_tag(),
            MenuChoice::DeleteTag => self.delete_tag(),
            MenuChoice::Quit => unreachable!("quit is handled by the menu loop"),
        };

        match outcome {
            Ok(Flow::Done) => Ok(()),
            Ok(Flow::Cancelled) => {
                writeln!(self.output, "Operation cancelled.")?;
                Ok(())
            }
            // Terminal failures end the loop; everything else goes back to the menu
            Err(JournalError::Io(e)) => Err(JournalError::Io(e)),
            Err(err) => {
                if !err.is_validation() && !err.is_not_found() {
                    warn!(error = %err, ?choice, "operation failed");
                }
                writeln!(self.output, "Error: {}", err.display_with_suggestions())?;
                Ok(())
            }
        }
    }

    fn add_entry(&mut self) -> Result<Flow> {
        writeln!(self.output, "\n--- Add New Journal Entry ---")?;

        let Some(title) = self.prompt("Enter title: ")? else {
            return Ok(Flow::Cancelled);
        };
        if title.is_empty() {
            return Err(JournalError::EmptyField("Title"));
        }
        let Some(content) = self.prompt("Enter content: ")? else {
            return Ok(Flow::Cancelled);
        };
        let draft = NewEntry::new(&title, &content)?;

        let Some(privacy) = self.prompt("Private? (Y/n): ")? else {
            return Ok(Flow::Cancelled);
        };
        let is_private = parse_yes_no(&privacy).unwrap_or(true);

        let id = create_entry(self.store, draft.with_privacy(is_private))?;
        writeln!(
            self.output,
            "Entry '{}' created successfully with ID {}.",
            title, id
        )?;

        if self.confirm("Add tags to this entry? (y/n): ")? {
            return self.manage_tags_for(id);
        }
        Ok(Flow::Done)
    }

    fn view_all_entries(&mut self) -> Result<Flow> {
        let entries = list_entries(self.store)?;
        if entries.is_empty() {
            writeln!(self.output, "No entries found.")?;
        } else {
            writeln!(self.output, "\n--- All Journal Entries ---")?;
            write!(self.output, "{}", format_entry_table(&entries))?;
        }
        Ok(Flow::Done)
    }

    fn view_entry_details(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter Entry ID to view: ")? else {
            return Ok(Flow::Cancelled);
        };
        let entry = get_entry(self.store, id)?;
        writeln!(self.output, "\n{}", format_entry_details(&entry))?;
        Ok(Flow::Done)
    }

    fn search(&mut self) -> Result<Flow> {
        let Some(mode) = self.prompt("Search by (d)ate or (k)eyword? ")? else {
            return Ok(Flow::Cancelled);
        };

        let query = match mode.to_lowercase().as_str() {
            "d" | "date" => {
                let Some(date) = self.prompt("Enter date (YYYY-MM-DD): ")? else {
                    return Ok(Flow::Cancelled);
                };
                SearchQuery::by_date(&date)?
            }
            "k" | "keyword" => {
                let Some(keyword) = self.prompt("Enter keyword: ")? else {
                    return Ok(Flow::Cancelled);
                };
                SearchQuery::by_keyword(&keyword)?
            }
            _ => {
                writeln!(self.output, "Invalid search type. Use 'd' or 'k'.")?;
                return Ok(Flow::Done);
            }
        };

        let entries = search_entries(self.store, &query)?;
        if entries.is_empty() {
            writeln!(self.output, "No entries found for {}.", query.describe())?;
        } else {
            writeln!(self.output, "\n--- Results for {} ---", query.describe())?;
            write!(self.output, "{}", format_entry_table(&entries))?;
        }
        Ok(Flow::Done)
    }

    fn update_entry(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter Entry ID to update: ")? else {
            return Ok(Flow::Cancelled);
        };
        let current = get_entry(self.store, id)?;

        writeln!(self.output, "Current title: {}", current.title)?;
        let Some(title) = self.prompt("New title (blank to keep): ")? else {
            return Ok(Flow::Cancelled);
        };
        writeln!(self.output, "Current content:\n{}", current.content)?;
        let Some(content) = self.prompt("New content (blank to keep): ")? else {
            return Ok(Flow::Cancelled);
        };
        let privacy_label = format!(
            "Private? (y/n, blank to keep) [currently {}]: ",
            if current.is_private { "yes" } else { "no" }
        );
        let Some(privacy) = self.prompt(&privacy_label)? else {
            return Ok(Flow::Cancelled);
        };

        let update = EntryUpdate::from_input(&title, &content, parse_yes_no(&privacy));
        if update.is_empty() {
            writeln!(self.output, "No changes made to entry {}.", id)?;
        } else {
            update_entry(self.store, id, update)?;
            writeln!(self.output, "Entry {} updated successfully.", id)?;
        }

        if self.confirm("Manage tags for this entry? (y/n): ")? {
            return self.manage_tags_for(id);
        }
        Ok(Flow::Done)
    }

    fn delete_entry(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter Entry ID to delete: ")? else {
            return Ok(Flow::Cancelled);
        };
        let entry = get_entry(self.store, id)?;

        let label = format!("Delete entry {} '{}'? (y/n): ", entry.id, entry.title);
        if !self.confirm(&label)? {
            return Ok(Flow::Cancelled);
        }

        delete_entry(self.store, id)?;
        writeln!(self.output, "Entry {} deleted.", id)?;
        Ok(Flow::Done)
    }

    fn create_tag(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter new tag name: ")? else {
            return Ok(Flow::Cancelled);
        };

        match create_tag(self.store, &name)? {
            TagCreation::Created(tag) => writeln!(
                self.output,
                "Tag '{}' created with ID {}.",
                tag.name, tag.id
            )?,
            TagCreation::AlreadyExists(tag) => writeln!(
                self.output,
                "Tag '{}' already exists with ID {}.",
                tag.name, tag.id
            )?,
        }
        Ok(Flow::Done)
    }

    fn manage_tags(&mut self) -> Result<Flow> {
        let Some(id) = self.prompt_id("Enter Entry ID to manage tags for: ")? else {
            return Ok(Flow::Cancelled);
        };
        self.manage_tags_for(id)
    }

    fn manage_tags_for(&mut self, entry_id: i64) -> Result<Flow> {
        let entry = get_entry(self.store, entry_id)?;
        let current = if entry.tags.is_empty() {
            "None".to_string()
        } else {
            entry.tags.join(", ")
        };
        writeln!(self.output, "Current tags for '{}': {}", entry.title, current)?;

        let available: Vec<String> = list_tags(self.store)?
            .into_iter()
            .map(|(tag, _)| tag.name)
            .collect();
        if !available.is_empty() {
            writeln!(self.output, "Available tags: {}", available.join(", "))?;
        }

        let Some(input) =
            self.prompt("Enter tags (comma-separated, +tag to add, -tag to remove): ")?
        else {
            return Ok(Flow::Cancelled);
        };

        let delta = TagDelta::parse(&input);
        if delta.is_empty() {
            writeln!(self.output, "No tag changes.")?;
            return Ok(Flow::Done);
        }

        let report = apply_tag_delta(self.store, entry_id, &delta)?;
        writeln!(self.output, "{}", format_delta_report(&report))?;
        Ok(Flow::Done)
    }

    fn view_entries_by_tag(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter tag name: ")? else {
            return Ok(Flow::Cancelled);
        };

        let (tag, entries) = entries_by_tag(self.store, &name)?;
        if entries.is_empty() {
            writeln!(self.output, "No entries tagged '{}'.", tag.name)?;
        } else {
            writeln!(self.output, "\n--- Entries tagged '{}' ---", tag.name)?;
            write!(self.output, "{}", format_entry_table(&entries))?;
        }
        Ok(Flow::Done)
    }

    fn delete_tag(&mut self) -> Result<Flow> {
        let tags = list_tags(self.store)?;
        writeln!(self.output, "{}", format_tag_list(&tags).trim_end())?;

        let Some(input) = self.prompt("Enter tag name or ID to delete: ")? else {
            return Ok(Flow::Cancelled);
        };
        let selector = TagSelector::parse(&input)?;
        let tag = find_tag(self.store, &selector)?;

        let label = format!(
            "Delete tag '{}' (ID {})? Entries will be kept. (y/n): ",
            tag.name, tag.id
        );
        if !self.confirm(&label)? {
            return Ok(Flow::Cancelled);
        }

        let deleted = delete_tag(self.store, &selector)?;
        writeln!(
            self.output,
            "Tag '{}' deleted and removed from {} entr{}.",
            deleted.tag.name,
            deleted.detached,
            if deleted.detached == 1 { "y" } else { "ies" }
        )?;
        Ok(Flow::Done)
    }

    /// Print `label` and read one trimmed line. `None` at end of input.
    ///
    /// Invalid UTF-8 is replaced rather than treated as a terminal failure.
    fn read_line(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&line).trim().to_string()))
    }

    /// Like `read_line`, but `q`/`quit` also cancels
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        Ok(self
            .read_line(label)?
            .filter(|answer| !is_quit(answer)))
    }

    fn prompt_id(&mut self, label: &str) -> Result<Option<i64>> {
        let Some(answer) = self.prompt(label)? else {
            return Ok(None);
        };
        answer
            .parse::<i64>()
            .map(Some)
            .map_err(|_| JournalError::InvalidId(answer))
    }

    /// Yes/no question; anything but an explicit yes (including cancel) is "no"
    fn confirm(&mut self, label: &str) -> Result<bool> {
        Ok(self
            .prompt(label)?
            .and_then(|answer| parse_yes_no(&answer))
            .unwrap_or(false))
    }
}

fn is_quit(answer: &str) -> bool {
    answer.eq_ignore_ascii_case("q") || answer.eq_ignore_ascii_case("quit")
}

fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_script(store: &Store, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(store, Cursor::new(script.as_bytes()), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::AddEntry));
        assert_eq!(" 10 ".parse::<MenuChoice>(), Ok(MenuChoice::DeleteTag));
        assert_eq!("Q".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
        assert_eq!("quit".parse::<MenuChoice>(), Ok(MenuChoice::Quit));
        assert!("11".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_parse_yes_no() {
        assert_eq!(parse_yes_no("Y"), Some(true));
        assert_eq!(parse_yes_no(" no "), Some(false));
        assert_eq!(parse_yes_no(""), None);
        assert_eq!(parse_yes_no("maybe"), None);
    }

    #[test]
    fn test_end_of_input_quits() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "");
        assert!(output.contains("Goodbye!"));
    }

    #[test]
    fn test_add_entry_with_tags() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "1\nMy Day\nWent hiking\n\ny\nhike, +outdoors\nq\n");

        assert!(output.contains("Entry 'My Day' created successfully with ID 1."));
        assert!(output.contains("Added: Hike, Outdoors"));

        let entry = get_entry(&store, 1).unwrap();
        assert!(entry.is_private);
        assert_eq!(entry.tags, vec!["Hike", "Outdoors"]);
    }

    #[test]
    fn test_quit_at_prompt_cancels_without_writing() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "1\nDraft title\nquit\nq\n");

        assert!(output.contains("Operation cancelled."));
        assert!(list_entries(&store).unwrap().is_empty());
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "1\n   \n2\nq\n");

        assert!(output.contains("Error: Title cannot be empty"));
        assert!(output.contains("No entries found."));
    }

    #[test]
    fn test_invalid_id_returns_to_menu() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "3\nabc\nq\n");

        assert!(output.contains("Invalid ID: 'abc'"));
        assert!(output.contains("Exiting journal. Goodbye!"));
    }

    #[test]
    fn test_update_privacy_only() {
        let store = Store::open_in_memory().unwrap();
        let id = create_entry(&store, NewEntry::new("Keep", "Body").unwrap()).unwrap();

        let script = format!("5\n{}\n\n\nn\nn\nq\n", id);
        let output = run_script(&store, &script);

        assert!(output.contains(&format!("Entry {} updated successfully.", id)));
        let entry = get_entry(&store, id).unwrap();
        assert_eq!(entry.title, "Keep");
        assert_eq!(entry.content, "Body");
        assert!(!entry.is_private);
    }

    #[test]
    fn test_delete_entry_requires_confirmation() {
        let store = Store::open_in_memory().unwrap();
        let id = create_entry(&store, NewEntry::new("Keep me", "Body").unwrap()).unwrap();

        let output = run_script(&store, &format!("6\n{}\nn\nq\n", id));
        assert!(output.contains("Operation cancelled."));
        assert!(get_entry(&store, id).is_ok());

        let output = run_script(&store, &format!("6\n{}\ny\nq\n", id));
        assert!(output.contains(&format!("Entry {} deleted.", id)));
        assert!(get_entry(&store, id).is_err());
    }

    #[test]
    fn test_create_duplicate_tag_is_informational() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "7\njournal\n7\nJournal\nq\n");

        assert!(output.contains("Tag 'Journal' created with ID 1."));
        assert!(output.contains("Tag 'Journal' already exists with ID 1."));
        assert!(!output.contains("Error:"));
    }

    #[test]
    fn test_invalid_utf8_input_does_not_end_loop() {
        let store = Store::open_in_memory().unwrap();
        let mut output = Vec::new();
        Menu::new(
            &store,
            Cursor::new(&b"1\nCaf\xE9\nBody\n\nn\n2\nq\n"[..]),
            &mut output,
        )
        .run()
        .unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.contains("Entry 'Caf\u{FFFD}' created successfully with ID 1."));
        assert!(output.contains("--- All Journal Entries ---"));
        assert!(output.contains("Exiting journal. Goodbye!"));
    }

    #[test]
    fn test_store_failure_rolls_back_and_menu_continues() {
        let store = Store::open_in_memory().unwrap();
        let id = create_entry(&store, NewEntry::new("Entry", "Body").unwrap()).unwrap();
        store
            .execute_batch(
                "CREATE TRIGGER refuse_attach BEFORE INSERT ON entry_tag_association
                 BEGIN SELECT RAISE(ABORT, 'attach refused'); END;",
            )
            .unwrap();

        let output = run_script(&store, &format!("8\n{}\n+fresh\n2\nq\n", id));

        assert!(output.contains("Error: Store error"));
        assert!(output.contains("attach refused"));
        // The auto-created tag was rolled back with the failed attach
        assert!(list_tags(&store).unwrap().is_empty());
        assert!(get_entry(&store, id).unwrap().tags.is_empty());
        assert!(output.contains("--- All Journal Entries ---"));
        assert!(output.contains("Exiting journal. Goodbye!"));
    }

    #[test]
    fn test_cancel_at_chained_tag_prompt() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "1\nTitle\nBody\n\ny\nq\nq\n");

        assert!(output.contains("Entry 'Title' created successfully with ID 1."));
        assert!(output.contains("Operation cancelled."));
        assert!(get_entry(&store, 1).unwrap().tags.is_empty());
    }

    #[test]
    fn test_search_with_bad_date_reports_format() {
        let store = Store::open_in_memory().unwrap();
        let output = run_script(&store, "4\nd\n05/01/2024\nq\n");

        assert!(output.contains("Invalid date: '05/01/2024'"));
        assert!(output.contains("YYYY-MM-DD"));
    }
}
