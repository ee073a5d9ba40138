//! Tap-the-shape: tap the moving circle as often as possible before time runs out.

use egui::Pos2;
use rand::Rng;

use crate::util::IntervalTimer;

pub const DEFAULT_GAME_SECS: u32 = 15;
pub const START_POSITION: Pos2 = Pos2::new(100.0, 100.0);
pub const TARGET_DIAMETER: f32 = 100.0;

/// Range the target is moved into after each hit, in game space
pub const X_RANGE: std::ops::RangeInclusive<f32> = 50.0..=300.0;
pub const Y_RANGE: std::ops::RangeInclusive<f32> = 100.0..=600.0;

#[derive(Debug, Clone)]
pub struct Game {
    score: u32,
    time_remaining: u32,
    game_over: bool,
    target: Pos2,
    duration: u32,
    countdown: IntervalTimer,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(DEFAULT_GAME_SECS)
    }
}

impl Game {
    pub fn new(duration_secs: u32) -> Self {
        Self {
            score: 0,
            time_remaining: duration_secs,
            game_over: false,
            target: START_POSITION,
            duration: duration_secs,
            countdown: IntervalTimer::new(1.0),
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// Center of the target in game space
    pub fn target(&self) -> Pos2 {
        self.target
    }

    pub fn countdown(&self) -> &IntervalTimer {
        &self.countdown
    }

    /// One second passed.
    ///
    /// The game is declared over on the tick after the clock reaches zero.
    pub fn tick(&mut self) {
        if self.time_remaining > 0 && !self.game_over {
            self.time_remaining -= 1;
        } else if !self.game_over {
            log::info!("Game over with score {}", self.score);
            self.game_over = true;
        }
    }

    /// Advance to frame time `now`, applying elapsed seconds one by one
    pub fn update(&mut self, now: f64) {
        for _ in 0..self.countdown.poll(now) {
            self.tick();
        }
    }

    /// The player hit the target. Ignored once the game is over.
    pub fn tap<R: Rng>(&mut self, rng: &mut R) {
        if self.game_over {
            return;
        }
        self.score += 1;
        self.target = Pos2::new(rng.random_range(X_RANGE), rng.random_range(Y_RANGE));
        log::debug!("Hit! score {} next target {:?}", self.score, self.target);
    }

    /// Start over with a full clock
    pub fn restart(&mut self) {
        log::info!("Game restarted");
        self.score = 0;
        self.time_remaining = self.duration;
        self.game_over = false;
        self.target = START_POSITION;
        self.countdown.reset();
    }
}
