use egui::Color32;

use crate::breathing::Breathing;
use crate::brush::Brush;
use crate::config::Settings;
use crate::game::Game;
use crate::panels;
use crate::renderer::Renderer;
use crate::state::DoodleState;

/// The screens of the app. `Menu` links to all the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Menu,
    Tips,
    Breathing,
    Journal,
    Doodle,
    Game,
}

impl Screen {
    /// Activities in menu order
    pub const ACTIVITIES: [Screen; 5] = [
        Screen::Tips,
        Screen::Breathing,
        Screen::Journal,
        Screen::Doodle,
        Screen::Game,
    ];

    /// Label on the menu button
    pub fn title(self) -> &'static str {
        match self {
            Screen::Menu => "Mindfulness",
            Screen::Tips => "Mindfulness Tips",
            Screen::Breathing => "Breathing Exercise",
            Screen::Journal => "Digital Journal",
            Screen::Doodle => "Mindful Doodling",
            Screen::Game => "Interactive Game",
        }
    }

    /// Heading shown while the screen is open
    pub fn heading(self) -> &'static str {
        match self {
            Screen::Doodle => "Doodling Page",
            Screen::Game => "Tap the Shape Game",
            other => other.title(),
        }
    }

    pub fn accent(self) -> Color32 {
        match self {
            Screen::Menu => Color32::GRAY,
            Screen::Tips => Color32::from_rgb(175, 82, 222),
            Screen::Breathing => Color32::from_rgb(88, 86, 214),
            Screen::Journal => Color32::from_rgb(0, 122, 255),
            Screen::Doodle => Color32::from_rgb(50, 173, 230),
            Screen::Game => Color32::from_rgb(0, 199, 190),
        }
    }
}

/// Top-level app. Each activity owns its own state; nothing is shared.
pub struct MindfulApp {
    settings: Settings,
    screen: Screen,
    renderer: Renderer,
    doodle: DoodleState,
    breathing: Breathing,
    journal: panels::JournalScreen,
    game: Game,
}

impl Default for MindfulApp {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl MindfulApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        Self::with_settings(settings)
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            doodle: DoodleState::new(Self::default_brush(&settings)),
            breathing: Breathing::new(settings.default_breath_seconds),
            journal: panels::JournalScreen::new(),
            game: Game::new(settings.game_seconds),
            renderer: Renderer::new(),
            screen: Screen::Menu,
            settings,
        }
    }

    fn default_brush(settings: &Settings) -> Brush {
        let mut brush = Brush::default();
        brush.set_width(settings.default_brush_width);
        brush
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn doodle(&self) -> &DoodleState {
        &self.doodle
    }

    pub fn doodle_mut(&mut self) -> &mut DoodleState {
        &mut self.doodle
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn journal(&self) -> &panels::JournalScreen {
        &self.journal
    }

    pub fn journal_mut(&mut self) -> &mut panels::JournalScreen {
        &mut self.journal
    }

    /// Switch screens. Activities start fresh each time they are opened,
    /// except the journal which lives as long as the app.
    pub fn navigate(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        log::info!("Navigating {:?} -> {:?}", self.screen, screen);

        match screen {
            Screen::Doodle => {
                self.doodle = DoodleState::new(Self::default_brush(&self.settings));
            }
            Screen::Breathing => {
                self.breathing = Breathing::new(self.settings.default_breath_seconds);
            }
            Screen::Game => self.game = Game::new(self.settings.game_seconds),
            Screen::Journal => self.journal.cancel_draft(),
            Screen::Menu | Screen::Tips => {}
        }
        self.screen = screen;
    }

    fn show_screen(&mut self, ui: &mut egui::Ui) {
        match self.screen {
            Screen::Menu => {
                if let Some(screen) = panels::menu_panel(ui) {
                    self.navigate(screen);
                }
            }
            Screen::Tips => panels::tips_panel(ui),
            Screen::Breathing => panels::breathing_panel(&mut self.breathing, ui),
            Screen::Journal => panels::journal_panel(&mut self.journal, ui),
            Screen::Doodle => panels::doodle_panel(&mut self.doodle, &self.renderer, ui),
            Screen::Game => panels::game_panel(&mut self.game, ui),
        }
    }
}

impl eframe::App for MindfulApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if self.screen != Screen::Menu && ui.button("◀ Back").clicked() {
                    self.navigate(Screen::Menu);
                }
                ui.heading(self.screen.heading());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_screen(ui);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DragEvent;
    use egui::Pos2;

    #[test]
    fn test_leaving_doodle_discards_strokes() {
        let mut app = MindfulApp::default();
        app.navigate(Screen::Doodle);
        app.doodle_mut().handle_drag(&DragEvent::start(Pos2::new(1.0, 1.0)));
        assert_eq!(app.doodle().document().len(), 1);

        app.navigate(Screen::Menu);
        app.navigate(Screen::Doodle);
        assert!(app.doodle().document().is_empty());
    }

    #[test]
    fn test_journal_survives_navigation() {
        let mut app = MindfulApp::default();
        app.navigate(Screen::Journal);
        app.journal_mut()
            .open_form(crate::journal::EntryDraft::today());
        app.journal_mut().save_draft();

        app.navigate(Screen::Menu);
        app.navigate(Screen::Journal);
        assert_eq!(app.journal().journal.len(), 1);
    }

    #[test]
    fn test_settings_seed_activity_state() {
        let settings = Settings {
            default_brush_width: 3.0,
            game_seconds: 30,
            ..Settings::default()
        };
        let mut app = MindfulApp::with_settings(settings);
        app.navigate(Screen::Doodle);
        assert_eq!(app.doodle().brush().width(), 3.0);
        app.navigate(Screen::Game);
        assert_eq!(app.game().time_remaining(), 30);
    }

    #[test]
    fn test_run_frame() {
        let ctx = egui::Context::default();
        let mut app = MindfulApp::default();
        for screen in Screen::ACTIVITIES {
            app.navigate(screen);
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| app.show_screen(ui));
            });
        }
        assert_eq!(app.screen(), Screen::Game);
    }
}
