use chrono::NaiveDate;
use uuid::Uuid;

/// One diary entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalEntry {
    id: Uuid,
    date: NaiveDate,
    description: String,
}

impl JournalEntry {
    pub fn new(date: NaiveDate, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            description: description.into(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Medium date style, e.g. "Oct 19, 2026"
    pub fn formatted_date(&self) -> String {
        format_date(self.date)
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Entries in the order they were written
#[derive(Debug, Default, Clone)]
pub struct Journal {
    entries: Vec<JournalEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, date: NaiveDate, description: impl Into<String>) -> &JournalEntry {
        self.entries.push(JournalEntry::new(date, description));
        let entry = &self.entries[self.entries.len() - 1];
        log::info!("Journal entry added for {}", entry.formatted_date());
        entry
    }

    /// Remove the entry at `index`; out-of-range indices are ignored
    pub fn remove(&mut self, index: usize) -> Option<JournalEntry> {
        if index < self.entries.len() {
            Some(self.entries.remove(index))
        } else {
            None
        }
    }

    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The "Dear Diary..." form: a draft that is either saved or thrown away
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub description: String,
}

impl EntryDraft {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            description: String::new(),
        }
    }

    /// Today's date in the local timezone
    pub fn today() -> Self {
        Self::new(chrono::Local::now().date_naive())
    }

    pub fn next_day(&mut self) {
        if let Some(next) = self.date.succ_opt() {
            self.date = next;
        }
    }

    pub fn previous_day(&mut self) {
        if let Some(prev) = self.date.pred_opt() {
            self.date = prev;
        }
    }

    /// Append the draft to the journal
    pub fn save(self, journal: &mut Journal) {
        journal.add(self.date, self.description);
    }
}
