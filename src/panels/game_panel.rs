use egui::{Color32, RichText, Sense};

use crate::game::{Game, TARGET_DIAMETER};

const MINT: Color32 = Color32::from_rgb(0, 199, 190);
/// Extent of the space target positions are drawn from, including the target's radius
const GAME_SPACE: egui::Vec2 = egui::vec2(350.0, 650.0);

pub fn game_panel(game: &mut Game, ui: &mut egui::Ui) {
    let now = ui.input(|i| i.time);
    game.update(now);

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Score: {}", game.score())).size(30.0).color(MINT));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                RichText::new(format!("Time: {}", game.time_remaining()))
                    .size(30.0)
                    .color(MINT),
            );
        });
    });

    let footer = if game.is_over() { 140.0 } else { 0.0 };
    let size = egui::vec2(
        ui.available_width(),
        (ui.available_height() - footer).max(TARGET_DIAMETER),
    );
    let (area, _) = ui.allocate_exact_size(size, Sense::hover());

    // Fit game space into the play area
    let scale = (area.width() / GAME_SPACE.x).min(area.height() / GAME_SPACE.y);
    let center = area.min + game.target().to_vec2() * scale;
    let radius = TARGET_DIAMETER / 2.0 * scale;
    let target_rect = egui::Rect::from_center_size(center, egui::Vec2::splat(radius * 2.0));

    ui.painter().circle_filled(center, radius, MINT);
    let response = ui.interact(target_rect, ui.id().with("target"), Sense::click());
    if response.clicked() {
        game.tap(&mut rand::rng());
    }

    if game.is_over() {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("Game Over").size(34.0).strong());
            ui.add_space(8.0);
            let restart = egui::Button::new(RichText::new("Restart Game").strong().color(Color32::WHITE))
                .fill(Color32::from_rgb(52, 199, 89))
                .rounding(10.0);
            if ui.add(restart).clicked() {
                game.restart();
            }
        });
    }

    if let Some(wait) = game.countdown().until_next(now) {
        ui.ctx().request_repaint_after(wait);
    }
}
