use egui::{Color32, RichText};

use crate::journal::{EntryDraft, Journal, format_date};

use super::wide_button;

/// Journal list plus the add-entry form, if open
#[derive(Debug, Default)]
pub struct JournalScreen {
    pub journal: Journal,
    draft: Option<EntryDraft>,
}

impl JournalScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_form_open(&self) -> bool {
        self.draft.is_some()
    }

    pub fn open_form(&mut self, draft: EntryDraft) {
        self.draft = Some(draft);
    }

    pub fn draft_mut(&mut self) -> Option<&mut EntryDraft> {
        self.draft.as_mut()
    }

    /// Save the open draft into the journal and close the form
    pub fn save_draft(&mut self) {
        if let Some(draft) = self.draft.take() {
            draft.save(&mut self.journal);
        }
    }

    /// Close the form without saving
    pub fn cancel_draft(&mut self) {
        self.draft = None;
    }
}

enum FormAction {
    Save,
    Cancel,
}

pub fn journal_panel(screen: &mut JournalScreen, ui: &mut egui::Ui) {
    let list_height = (ui.available_height() - 80.0).max(50.0);
    let mut delete = None;

    egui::ScrollArea::vertical()
        .max_height(list_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, entry) in screen.journal.entries().iter().enumerate() {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(entry.formatted_date()).strong());
                        ui.label(entry.description());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("🗑").on_hover_text("Delete").clicked() {
                            delete = Some(index);
                        }
                    });
                });
                ui.separator();
            }
        });

    if let Some(index) = delete {
        screen.journal.remove(index);
    }

    if wide_button(ui, "Add New Entry", Color32::from_rgb(0, 122, 255)).clicked() {
        screen.open_form(EntryDraft::today());
    }

    if let Some(action) = entry_form(screen, ui.ctx()) {
        match action {
            FormAction::Save => screen.save_draft(),
            FormAction::Cancel => screen.cancel_draft(),
        }
    }
}

fn entry_form(screen: &mut JournalScreen, ctx: &egui::Context) -> Option<FormAction> {
    let draft = screen.draft_mut()?;
    let mut action = None;

    egui::Window::new("Dear Diary...")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Date");
                if ui.small_button("◀").clicked() {
                    draft.previous_day();
                }
                ui.label(format_date(draft.date));
                if ui.small_button("▶").clicked() {
                    draft.next_day();
                }
            });
            ui.add(
                egui::TextEdit::multiline(&mut draft.description)
                    .hint_text("Write here:")
                    .desired_rows(4),
            );
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    action = Some(FormAction::Cancel);
                }
                if ui.button("Save").clicked() {
                    action = Some(FormAction::Save);
                }
            });
        });

    action
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_cancel_discards_draft() {
        let mut screen = JournalScreen::new();
        screen.open_form(EntryDraft::today());
        screen.draft_mut().unwrap().description.push_str("nope");
        screen.cancel_draft();
        assert!(!screen.is_form_open());
        assert!(screen.journal.is_empty());
    }

    #[test]
    fn test_save_closes_form() {
        let mut screen = JournalScreen::new();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        screen.open_form(EntryDraft::new(date));
        screen.save_draft();
        assert!(!screen.is_form_open());
        assert_eq!(screen.journal.len(), 1);
        // Empty descriptions are allowed
        assert_eq!(screen.journal.entries()[0].description(), "");
    }
}
