/// Keys per row on the rendered grid.
pub const ROW_WIDTH: usize = 9;

const KEY_COUNT: usize = 26;

#[derive(Clone, Debug, Copy, PartialEq, Eq)]
pub enum KeyState {
    Enabled,
    Disabled,
}

/// The on-screen letter keys A-Z. Keys gray out once guessed; arrow keys
/// move a cursor over the grid so the highlighted key can be "clicked"
/// with Enter.
#[derive(Debug, Clone)]
pub struct Keyboard {
    keys: [KeyState; KEY_COUNT],
    cursor: usize,
}

impl Keyboard {
    pub fn new() -> Self {
        Self {
            keys: [KeyState::Enabled; KEY_COUNT],
            cursor: 0,
        }
    }

    pub fn letter_at(index: usize) -> char {
        (b'a' + index as u8) as char
    }

    fn index_of(letter: char) -> Option<usize> {
        let letter = letter.to_ascii_lowercase();
        letter
            .is_ascii_lowercase()
            .then(|| (letter as u8 - b'a') as usize)
    }

    pub fn is_enabled(&self, letter: char) -> bool {
        Self::index_of(letter)
            .map(|i| self.keys[i] == KeyState::Enabled)
            .unwrap_or(false)
    }

    pub fn disable(&mut self, letter: char) {
        if let Some(i) = Self::index_of(letter) {
            self.keys[i] = KeyState::Disabled;
        }
    }

    /// Terminal state: no more guessing.
    pub fn disable_all(&mut self) {
        self.keys = [KeyState::Disabled; KEY_COUNT];
    }

    pub fn reset(&mut self) {
        self.keys = [KeyState::Enabled; KEY_COUNT];
        self.cursor = 0;
    }

    pub fn cursor_letter(&self) -> char {
        Self::letter_at(self.cursor)
    }

    pub fn move_left(&mut self) {
        self.cursor = (self.cursor + KEY_COUNT - 1) % KEY_COUNT;
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1) % KEY_COUNT;
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(ROW_WIDTH);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + ROW_WIDTH).min(KEY_COUNT - 1);
    }

    /// Rows of (letter, state) pairs for rendering, `ROW_WIDTH` keys each.
    pub fn rows(&self) -> Vec<Vec<(char, KeyState)>> {
        self.keys
            .chunks(ROW_WIDTH)
            .enumerate()
            .map(|(row, states)| {
                states
                    .iter()
                    .enumerate()
                    .map(|(col, state)| (Self::letter_at(row * ROW_WIDTH + col), *state))
                    .collect()
            })
            .collect()
    }
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}
