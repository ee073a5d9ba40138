use crate::tips::{HEADING, TIPS};

pub fn tips_panel(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new(HEADING)
            .size(28.0)
            .color(egui::Color32::from_rgb(175, 82, 222)),
    );
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        for tip in TIPS {
            ui.label(tip);
            ui.separator();
        }
    });
}
