mod breathing_panel;
mod doodle_panel;
mod game_panel;
mod journal_panel;
mod menu_panel;
mod tips_panel;

pub use breathing_panel::breathing_panel;
pub use doodle_panel::doodle_panel;
pub use game_panel::game_panel;
pub use journal_panel::{JournalScreen, journal_panel};
pub use menu_panel::menu_panel;
pub use tips_panel::tips_panel;

/// Full-width colored button used by the menu and the activity screens
pub(crate) fn wide_button(ui: &mut egui::Ui, label: &str, fill: egui::Color32) -> egui::Response {
    let text = egui::RichText::new(label)
        .strong()
        .size(18.0)
        .color(egui::Color32::WHITE);
    ui.add_sized(
        [ui.available_width(), 50.0],
        egui::Button::new(text).fill(fill).rounding(10.0),
    )
}
