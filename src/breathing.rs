//! Paced breathing: a circle that grows on the inhale and shrinks on the exhale.

use egui::Color32;

use crate::util::IntervalTimer;

pub const MIN_CYCLE_SECS: f64 = 2.0;
pub const MAX_CYCLE_SECS: f64 = 10.0;
pub const CYCLE_STEP_SECS: f64 = 0.5;
pub const DEFAULT_CYCLE_SECS: f64 = 4.0;

const INHALE_SCALE: f32 = 1.0;
const EXHALE_SCALE: f32 = 1.5;
const INDIGO: Color32 = Color32::from_rgb(88, 86, 214);
const MINT: Color32 = Color32::from_rgb(0, 199, 190);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreathPhase {
    Inhale,
    Exhale,
}

impl BreathPhase {
    pub fn label(self) -> &'static str {
        match self {
            BreathPhase::Inhale => "Inhale",
            BreathPhase::Exhale => "Exhale",
        }
    }

    pub fn target_scale(self) -> f32 {
        match self {
            BreathPhase::Inhale => INHALE_SCALE,
            BreathPhase::Exhale => EXHALE_SCALE,
        }
    }

    fn toggled(self) -> Self {
        match self {
            BreathPhase::Inhale => BreathPhase::Exhale,
            BreathPhase::Exhale => BreathPhase::Inhale,
        }
    }
}

/// Snap a cycle duration onto the slider grid
pub fn snap_cycle_secs(secs: f64) -> f64 {
    if !secs.is_finite() {
        return DEFAULT_CYCLE_SECS;
    }
    let snapped = (secs / CYCLE_STEP_SECS).round() * CYCLE_STEP_SECS;
    snapped.clamp(MIN_CYCLE_SECS, MAX_CYCLE_SECS)
}

/// Animation state for the breathing screen
#[derive(Debug, Clone)]
pub struct Breathing {
    phase: BreathPhase,
    color: Color32,
    cycle_secs: f64,
    timer: IntervalTimer,
    /// Frame time at which the current phase began; drives the easing
    phase_started: Option<f64>,
    scale_from: f32,
}

impl Default for Breathing {
    fn default() -> Self {
        Self::new(DEFAULT_CYCLE_SECS)
    }
}

impl Breathing {
    pub fn new(cycle_secs: f64) -> Self {
        let cycle_secs = snap_cycle_secs(cycle_secs);
        Self {
            phase: BreathPhase::Inhale,
            color: Color32::WHITE,
            cycle_secs,
            timer: IntervalTimer::new(cycle_secs),
            phase_started: None,
            scale_from: INHALE_SCALE,
        }
    }

    pub fn phase(&self) -> BreathPhase {
        self.phase
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn cycle_secs(&self) -> f64 {
        self.cycle_secs
    }

    pub fn timer(&self) -> &IntervalTimer {
        &self.timer
    }

    /// Change the cycle length; the tick timer restarts with the new period
    pub fn set_cycle_secs(&mut self, secs: f64) {
        let secs = snap_cycle_secs(secs);
        if secs != self.cycle_secs {
            log::debug!("Breath cycle set to {secs}s");
            self.cycle_secs = secs;
            self.timer.set_period(secs);
        }
    }

    /// Flip between inhale and exhale
    pub fn tick(&mut self, now: f64) {
        self.scale_from = self.scale_at(now);
        self.phase = self.phase.toggled();
        self.color = match self.phase {
            BreathPhase::Inhale => MINT,
            BreathPhase::Exhale => INDIGO,
        };
        self.phase_started = Some(now);
    }

    /// Advance to the frame time `now`, applying any elapsed ticks in order
    pub fn update(&mut self, now: f64) {
        for _ in 0..self.timer.poll(now) {
            self.tick(now);
        }
    }

    /// Circle scale at frame time `now`, eased toward the phase target
    pub fn scale_at(&self, now: f64) -> f32 {
        let Some(started) = self.phase_started else {
            return self.phase.target_scale();
        };
        let t = ((now - started) / self.cycle_secs).clamp(0.0, 1.0) as f32;
        let target = self.phase.target_scale();
        self.scale_from + (target - self.scale_from) * ease_in_out(t)
    }
}

/// Cubic ease-in-out on `[0, 1]`
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let breathing = Breathing::default();
        assert_eq!(breathing.phase(), BreathPhase::Inhale);
        assert_eq!(breathing.color(), Color32::WHITE);
        assert_eq!(breathing.scale_at(0.0), 1.0);
    }

    #[test]
    fn test_ticks_alternate_phase() {
        let mut breathing = Breathing::new(2.0);
        breathing.update(0.0);
        breathing.update(2.0);
        assert_eq!(breathing.phase(), BreathPhase::Exhale);
        assert_eq!(breathing.color(), INDIGO);

        breathing.update(4.0);
        assert_eq!(breathing.phase(), BreathPhase::Inhale);
        assert_eq!(breathing.color(), MINT);
    }

    #[test]
    fn test_scale_eases_to_target() {
        let mut breathing = Breathing::new(4.0);
        breathing.tick(0.0);
        assert_eq!(breathing.scale_at(0.0), 1.0);
        let mid = breathing.scale_at(2.0);
        assert!(mid > 1.0 && mid < 1.5);
        assert_eq!(breathing.scale_at(4.0), 1.5);
        assert_eq!(breathing.scale_at(10.0), 1.5);
    }

    #[test]
    fn test_cycle_is_snapped() {
        let mut breathing = Breathing::default();
        breathing.set_cycle_secs(3.3);
        assert_eq!(breathing.cycle_secs(), 3.5);
        breathing.set_cycle_secs(0.5);
        assert_eq!(breathing.cycle_secs(), MIN_CYCLE_SECS);
        breathing.set_cycle_secs(99.0);
        assert_eq!(breathing.cycle_secs(), MAX_CYCLE_SECS);
        assert_eq!(breathing.timer().period(), MAX_CYCLE_SECS);
    }

    #[test]
    fn test_ease_endpoints() {
        assert_eq!(ease_in_out(0.0), 0.0);
        assert_eq!(ease_in_out(1.0), 1.0);
        assert!((ease_in_out(0.5) - 0.5).abs() < 1e-6);
    }
}
