// Rule-level integration tests for the game session, exercised through
// the public library surface.

use assert_matches::assert_matches;

use gibbet::session::{Outcome, Session, MAX_INCORRECT};
use gibbet::words::WordList;

#[test]
fn incorrect_count_equals_misses_for_any_sequence() {
    let sequences: [&[char]; 4] = [
        &['c', 'a', 't'],
        &['x', 'c', 'y', 'a', 'z', 't'],
        &['q', 'w', 'e', 'r', 't', 'y'],
        &['a', 'a', 'b', 'b', 'c', 'c'],
    ];

    for letters in sequences {
        let mut session = Session::new("cat".to_string());
        for &c in letters {
            session.guess(c);
        }

        let misses = session
            .guessed_letters()
            .filter(|c| !session.secret_word().contains(*c))
            .count();
        assert_eq!(session.incorrect_count(), misses, "sequence {:?}", letters);
    }
}

#[test]
fn won_iff_guessed_covers_word() {
    let mut session = Session::new("hangman".to_string());

    // guessing every letter but one never wins
    for c in ['h', 'a', 'n', 'g'] {
        session.guess(c);
        assert!(!session.is_won());
    }

    session.guess('m');
    assert!(session.is_won());
    assert_matches!(session.outcome(), Outcome::Won);
}

#[test]
fn lost_exactly_at_six_misses_never_before() {
    let mut session = Session::new("cat".to_string());

    for (i, c) in ['b', 'd', 'f', 'g', 'h', 'i'].into_iter().enumerate() {
        assert!(!session.is_lost(), "lost after only {} misses", i);
        session.guess(c);
    }

    assert!(session.is_lost());
    assert_eq!(session.incorrect_count(), MAX_INCORRECT);

    // hits along the way do not bring the loss closer
    let mut session = Session::new("cat".to_string());
    for c in ['c', 'b', 'a', 'd', 't', 'f', 'g', 'h'] {
        session.guess(c);
        assert!(!session.is_lost());
    }
    assert_eq!(session.incorrect_count(), 5);
}

#[test]
fn restart_resets_from_any_state() {
    // from mid-round
    let mut session = Session::new("cat".to_string());
    session.guess('c');
    session.guess('x');
    session.restart("dog".to_string());
    assert_eq!(session.incorrect_count(), 0);
    assert_eq!(session.guessed_letters().count(), 0);
    assert_matches!(session.outcome(), Outcome::Playing);

    // from a won round
    let mut session = Session::new("cat".to_string());
    for c in ['c', 'a', 't'] {
        session.guess(c);
    }
    assert_matches!(session.outcome(), Outcome::Won);
    session.restart("dog".to_string());
    assert_matches!(session.outcome(), Outcome::Playing);

    // from a lost round
    let mut session = Session::new("cat".to_string());
    for c in ['x', 'y', 'z', 'q', 'w', 'e'] {
        session.guess(c);
    }
    assert_matches!(session.outcome(), Outcome::Lost);
    session.restart("dog".to_string());
    assert_matches!(session.outcome(), Outcome::Playing);
    assert_eq!(session.masked_word(), "_ _ _");
}

#[test]
fn round_won_in_three_guesses() {
    let mut session = Session::new("cat".to_string());

    for c in ['a', 't', 'c'] {
        session.guess(c);
    }

    assert!(session.is_won());
    assert_eq!(session.incorrect_count(), 0);
}

#[test]
fn round_lost_after_six_misses() {
    let mut session = Session::new("cat".to_string());

    for c in ['x', 'y', 'z', 'q', 'w', 'e'] {
        session.guess(c);
    }

    assert!(session.is_lost());
    assert_eq!(session.incorrect_count(), 6);
}

#[test]
fn every_shipped_word_is_guessable() {
    // a full alphabet sweep wins any round before the alphabet runs out
    for name in ["classic", "english"] {
        let list = WordList::new(name.to_string());
        for word in &list.words {
            let mut session = Session::new(word.clone());
            for c in word.chars() {
                session.guess(c);
            }
            assert!(session.is_won(), "word {:?} not winnable", word);
            assert_eq!(session.incorrect_count(), 0);
        }
    }
}
