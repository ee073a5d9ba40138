use std::time::Duration;

/// Fixed-interval tick source driven by the frame clock.
///
/// The UI polls it once per frame with the current time in seconds
/// (`egui::InputState::time`). Ticks are reported as a count so that a
/// long frame gap still yields every tick, one after another.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalTimer {
    period: f64,
    last_fire: Option<f64>,
}

impl IntervalTimer {
    pub fn new(period_secs: f64) -> Self {
        Self {
            period: period_secs,
            last_fire: None,
        }
    }

    pub fn period(&self) -> f64 {
        self.period
    }

    /// Change the period. The timer re-arms on the next poll.
    pub fn set_period(&mut self, period_secs: f64) {
        if period_secs != self.period {
            self.period = period_secs;
            self.last_fire = None;
        }
    }

    /// Disarm the timer; the next poll starts counting from scratch
    pub fn reset(&mut self) {
        self.last_fire = None;
    }

    fn is_valid(&self) -> bool {
        self.period.is_finite() && self.period > 0.0
    }

    /// Number of ticks that elapsed since the last call.
    ///
    /// The first poll only arms the timer and returns 0.
    pub fn poll(&mut self, now: f64) -> u32 {
        if !self.is_valid() {
            return 0;
        }

        let Some(last) = self.last_fire else {
            self.last_fire = Some(now);
            return 0;
        };

        if now < last {
            // Clock went backwards, start over
            self.last_fire = Some(now);
            return 0;
        }

        let ticks = ((now - last) / self.period).floor();
        if ticks < 1.0 {
            return 0;
        }
        self.last_fire = Some(last + ticks * self.period);
        ticks.min(u32::MAX as f64) as u32
    }

    /// Time left until the next tick, for scheduling a repaint
    pub fn until_next(&self, now: f64) -> Option<Duration> {
        if !self.is_valid() {
            return None;
        }
        let remaining = match self.last_fire {
            Some(last) => (last + self.period - now).max(0.0),
            None => self.period,
        };
        Some(Duration::from_secs_f64(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_arms() {
        let mut timer = IntervalTimer::new(1.0);
        assert_eq!(timer.poll(10.0), 0);
        assert_eq!(timer.poll(10.5), 0);
        assert_eq!(timer.poll(11.0), 1);
        assert_eq!(timer.poll(11.2), 0);
    }

    #[test]
    fn test_long_gap_reports_every_tick() {
        let mut timer = IntervalTimer::new(0.5);
        timer.poll(0.0);
        assert_eq!(timer.poll(2.2), 4);
        // Phase is kept: next tick is at 2.5
        assert_eq!(timer.poll(2.4), 0);
        assert_eq!(timer.poll(2.5), 1);
    }

    #[test]
    fn test_set_period_rearms() {
        let mut timer = IntervalTimer::new(4.0);
        timer.poll(0.0);
        timer.set_period(2.0);
        assert_eq!(timer.poll(3.0), 0);
        assert_eq!(timer.poll(5.0), 1);
    }

    #[test]
    fn test_invalid_period_never_fires() {
        let mut timer = IntervalTimer::new(0.0);
        timer.poll(0.0);
        assert_eq!(timer.poll(100.0), 0);
        assert_eq!(timer.until_next(100.0), None);
    }

    #[test]
    fn test_until_next() {
        let mut timer = IntervalTimer::new(1.0);
        timer.poll(3.0);
        let left = timer.until_next(3.25).unwrap();
        assert!((left.as_secs_f64() - 0.75).abs() < 1e-9);
    }
}
