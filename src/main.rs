#![warn(clippy::all, rust_2018_idioms)]

use mindful::{AppError, MindfulApp, Settings};

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings = Settings::from_env()?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(settings.window_size)
            .with_min_inner_size([320.0, 480.0])
            .with_title(settings.window_title.clone()),
        ..Default::default()
    };

    let title = settings.window_title.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(|cc| Ok(Box::new(MindfulApp::new(cc, settings)))),
    )?;

    Ok(())
}
