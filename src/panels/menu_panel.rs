use crate::app::Screen;

use super::wide_button;

/// Draw the activity menu. Returns the screen the user picked, if any.
pub fn menu_panel(ui: &mut egui::Ui) -> Option<Screen> {
    let mut picked = None;

    ui.add_space(24.0);
    ui.vertical(|ui| {
        ui.spacing_mut().item_spacing.y = 40.0;
        for screen in Screen::ACTIVITIES {
            if wide_button(ui, screen.title(), screen.accent()).clicked() {
                picked = Some(screen);
            }
        }
    });

    picked
}
