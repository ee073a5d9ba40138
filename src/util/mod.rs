pub mod timer;

pub use timer::IntervalTimer;
