use std::collections::BTreeSet;

/// A round ends after this many distinct wrong letters.
pub const MAX_INCORRECT: usize = 6;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum Outcome {
    Playing,
    Won,
    Lost,
}

/// represents one round of the game: the secret word, the letters tried so
/// far, and how many of those missed
#[derive(Debug, Clone)]
pub struct Session {
    secret_word: String,
    guessed: BTreeSet<char>,
    incorrect: usize,
}

impl Session {
    pub fn new(secret_word: String) -> Self {
        Self {
            secret_word: secret_word.to_ascii_lowercase(),
            guessed: BTreeSet::new(),
            incorrect: 0,
        }
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    /// Records a guess and returns whether the letter is in the word.
    /// Repeated guesses and non-letters leave the session untouched.
    pub fn guess(&mut self, letter: char) -> bool {
        let letter = letter.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return false;
        }

        let hit = self.secret_word.contains(letter);
        if self.guessed.insert(letter) && !hit {
            self.incorrect += 1;
        }

        hit
    }

    pub fn is_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter.to_ascii_lowercase())
    }

    /// Letters tried so far, in alphabetical order.
    pub fn guessed_letters(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    pub fn incorrect_count(&self) -> usize {
        self.incorrect
    }

    pub fn is_won(&self) -> bool {
        self.secret_word.chars().all(|c| self.guessed.contains(&c))
    }

    pub fn is_lost(&self) -> bool {
        self.incorrect >= MAX_INCORRECT
    }

    pub fn outcome(&self) -> Outcome {
        if self.is_won() {
            Outcome::Won
        } else if self.is_lost() {
            Outcome::Lost
        } else {
            Outcome::Playing
        }
    }

    /// The word as shown while guessing: guessed letters uppercase, the
    /// rest blanks, space-separated.
    pub fn masked_word(&self) -> String {
        let cells: Vec<String> = self
            .secret_word
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    c.to_ascii_uppercase().to_string()
                } else {
                    "_".to_string()
                }
            })
            .collect();

        cells.join(" ")
    }

    /// Starts a fresh round with `new_word`. Picking the word is the
    /// caller's job.
    pub fn restart(&mut self, new_word: String) {
        self.secret_word = new_word.to_ascii_lowercase();
        self.guessed.clear();
        self.incorrect = 0;
    }
}
