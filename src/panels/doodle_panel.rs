use egui::{Color32, Sense, Slider, Stroke as EguiStroke};

use crate::brush::{MAX_WIDTH, MIN_WIDTH, PaletteColor};
use crate::renderer::Renderer;
use crate::state::DoodleState;

const CONTROLS_HEIGHT: f32 = 120.0;
const SWATCH_SIZE: f32 = 30.0;

/// Drawing canvas on top, brush controls underneath
pub fn doodle_panel(state: &mut DoodleState, renderer: &Renderer, ui: &mut egui::Ui) {
    let available = ui.available_size();
    let canvas_size = egui::vec2(available.x, (available.y - CONTROLS_HEIGHT).max(100.0));
    let (response, painter) = ui.allocate_painter(canvas_size, Sense::drag());
    let rect = response.rect;

    state.handle_canvas_response(&response, rect.min);

    renderer.render_canvas(state.document(), &painter, rect);

    ui.add_space(8.0);
    color_picker(state, ui);

    ui.horizontal(|ui| {
        let mut width = state.brush().width();
        ui.vertical(|ui| {
            ui.label(format!("Line Width: {}", width as i32));
            let slider = Slider::new(&mut width, MIN_WIDTH..=MAX_WIDTH)
                .step_by(1.0)
                .show_value(false);
            if ui.add_sized([150.0, 20.0], slider).changed() {
                state.set_width(width);
            }
        });

        let clear = egui::Button::new(
            egui::RichText::new("Clear").strong().color(Color32::WHITE),
        )
        .fill(Color32::from_rgb(255, 59, 48))
        .rounding(10.0);
        if ui.add(clear).clicked() {
            state.clear();
        }
    });
}

fn color_picker(state: &mut DoodleState, ui: &mut egui::Ui) {
    ui.horizontal_wrapped(|ui| {
        for color in PaletteColor::ALL {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(SWATCH_SIZE + 4.0, SWATCH_SIZE + 4.0), Sense::click());
            let painter = ui.painter();
            painter.circle_filled(rect.center(), SWATCH_SIZE / 2.0, color.color32());
            if state.brush().color() == color {
                painter.rect_stroke(rect, 0.0, EguiStroke::new(2.0, Color32::GRAY));
            }
            if response.on_hover_text(color.name()).clicked() {
                state.select_color(color);
            }
        }
    });
}
