use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use gibbet::keyboard::Keyboard;
use gibbet::runtime::{FixedTicker, GameEvent, Runner, TestEventSource};
use gibbet::session::{Outcome, Session};

fn key(c: char) -> GameEvent {
    GameEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
}

// Headless integration using the internal runtime + Session without a TTY.
// Mirrors what the event loop does with letter keys: check the button,
// mutate the session, disable the button, check the outcome.
fn play_letters(word: &str, letters: &[char]) -> (Session, Keyboard) {
    let mut session = Session::new(word.to_string());
    let mut keyboard = Keyboard::new();

    let (tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(5));
    let runner = Runner::new(es, ticker);

    for &c in letters {
        tx.send(key(c)).unwrap();
    }

    for _ in 0..200u32 {
        match runner.step() {
            GameEvent::Tick | GameEvent::Resize => {}
            GameEvent::Key(key) => {
                if let KeyCode::Char(c) = key.code {
                    if keyboard.is_enabled(c) {
                        session.guess(c);
                        keyboard.disable(c);
                    }
                    if session.outcome() != Outcome::Playing {
                        keyboard.disable_all();
                        break;
                    }
                }
            }
        }
    }

    (session, keyboard)
}

#[test]
fn headless_won_game() {
    let (session, keyboard) = play_letters("cat", &['c', 'a', 't']);

    assert_eq!(session.outcome(), Outcome::Won);
    assert_eq!(session.incorrect_count(), 0);
    assert_eq!(session.masked_word(), "C A T");
    assert!(!keyboard.is_enabled('z'), "win should disable every key");
}

#[test]
fn headless_lost_game() {
    let (session, keyboard) = play_letters("cat", &['x', 'y', 'z', 'q', 'w', 'e']);

    assert_eq!(session.outcome(), Outcome::Lost);
    assert_eq!(session.incorrect_count(), 6);
    assert_eq!(session.masked_word(), "_ _ _");
    assert!(!keyboard.is_enabled('a'), "loss should disable every key");
}

#[test]
fn headless_repeated_keys_do_not_double_count() {
    // The second 'x' hits a disabled button and must not advance the round
    let (session, _) = play_letters("cat", &['x', 'x', 'x', 'a']);

    assert_eq!(session.outcome(), Outcome::Playing);
    assert_eq!(session.incorrect_count(), 1);
    assert_eq!(session.masked_word(), "_ A _");
}

#[test]
fn headless_celebration_expires_on_ticks() {
    // With no queued events every step times out into a Tick, which is
    // what advances the confetti in the real loop
    let mut celebration = gibbet::celebration::CelebrationAnimation::new();
    celebration.start(80, 24);

    let (_tx, rx) = mpsc::channel();
    let es = TestEventSource::new(rx);
    let ticker = FixedTicker::new(Duration::from_millis(1));
    let runner = Runner::new(es, ticker);

    for _ in 0..100u32 {
        if let GameEvent::Tick = runner.step() {
            celebration.update();
        }
        if !celebration.is_active {
            break;
        }
    }

    assert!(!celebration.is_active, "confetti should burn out");
    assert!(celebration.particles.is_empty());
}
