use egui::{RichText, Sense, Slider};

use crate::breathing::{Breathing, CYCLE_STEP_SECS, MAX_CYCLE_SECS, MIN_CYCLE_SECS};

const CIRCLE_DIAMETER: f32 = 200.0;

pub fn breathing_panel(state: &mut Breathing, ui: &mut egui::Ui) {
    let now = ui.input(|i| i.time);
    state.update(now);

    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.label(RichText::new(state.phase().label()).size(34.0).strong());
        ui.add_space(40.0);

        // Room for the circle at its largest
        let room = CIRCLE_DIAMETER * 1.5;
        let (rect, _) = ui.allocate_exact_size(egui::vec2(room, room), Sense::hover());
        let radius = CIRCLE_DIAMETER / 2.0 * state.scale_at(now);
        ui.painter()
            .circle_filled(rect.center(), radius, state.color());

        ui.add_space(40.0);
        let mut secs = state.cycle_secs();
        let slider = Slider::new(&mut secs, MIN_CYCLE_SECS..=MAX_CYCLE_SECS)
            .step_by(CYCLE_STEP_SECS)
            .suffix(" s")
            .text("Breath Duration");
        if ui.add(slider).changed() {
            state.set_cycle_secs(secs);
        }
        ui.add_space(12.0);
        ui.label(RichText::new("Adjust Breathing Duration").strong());
    });

    // The circle eases continuously
    ui.ctx().request_repaint();
}
