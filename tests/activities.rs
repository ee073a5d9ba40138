use chrono::NaiveDate;
use mindful::breathing::{BreathPhase, Breathing};
use mindful::game::{Game, START_POSITION};
use mindful::journal::Journal;
use mindful::util::IntervalTimer;
use mindful::{MindfulApp, Screen, Settings};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_breathing_follows_frame_clock() {
    let mut breathing = Breathing::new(4.0);
    let mut phases = Vec::new();
    for frame in 0..=20 {
        breathing.update(frame as f64);
        phases.push(breathing.phase());
    }
    // Toggles at 4, 8, 12, 16, 20
    assert_eq!(phases[3], BreathPhase::Inhale);
    assert_eq!(phases[4], BreathPhase::Exhale);
    assert_eq!(phases[8], BreathPhase::Inhale);
    assert_eq!(phases[20], BreathPhase::Exhale);
}

#[test]
fn test_full_game_round() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = Game::default();
    game.update(0.0);

    game.tap(&mut rng);
    game.tap(&mut rng);
    game.tap(&mut rng);
    assert_eq!(game.score(), 3);

    game.update(15.0);
    assert_eq!(game.time_remaining(), 0);
    assert!(!game.is_over());
    game.update(16.0);
    assert!(game.is_over());

    game.tap(&mut rng);
    assert_eq!(game.score(), 3);

    game.restart();
    assert_eq!(game.score(), 0);
    assert_eq!(game.time_remaining(), 15);
    assert!(!game.is_over());
    assert_eq!(game.target(), START_POSITION);
}

#[test]
fn test_journal_keeps_insertion_order() {
    let mut journal = Journal::new();
    let day = |d| NaiveDate::from_ymd_opt(2026, 10, d).unwrap();
    journal.add(day(19), "first");
    journal.add(day(1), "second");
    journal.add(day(10), "third");
    journal.remove(1);

    let descriptions: Vec<_> = journal.entries().iter().map(|e| e.description()).collect();
    assert_eq!(descriptions, ["first", "third"]);
}

#[test]
fn test_timer_ticks_are_sequential() {
    let mut timer = IntervalTimer::new(1.0);
    let mut total = 0;
    for frame in 0..100 {
        total += timer.poll(frame as f64 * 0.37);
    }
    // 99 * 0.37 = 36.63 seconds elapsed after arming at 0
    assert_eq!(total, 36);
}

#[test]
fn test_menu_navigation() {
    let mut app = MindfulApp::with_settings(Settings::default());
    assert_eq!(app.screen(), Screen::Menu);
    for screen in Screen::ACTIVITIES {
        app.navigate(screen);
        assert_eq!(app.screen(), screen);
        app.navigate(Screen::Menu);
    }
    assert_eq!(app.screen(), Screen::Menu);
}
