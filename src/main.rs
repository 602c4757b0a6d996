pub mod celebration;
pub mod gallows;
pub mod keyboard;
pub mod runtime;
pub mod session;
pub mod ui;
pub mod words;

use crate::{
    celebration::CelebrationAnimation,
    keyboard::Keyboard,
    runtime::{CrosstermEventSource, FixedTicker, GameEvent, Runner},
    session::{Outcome, Session},
    words::WordList,
};
use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Frame, Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

const TICK_RATE_MS: u64 = 100;

/// cozy hangman tui with an on-screen keyboard and a hand-drawn gallows
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A cozy hangman TUI: guess the hidden word letter by letter before the gallows drawing is finished. Letters can be typed directly or picked from the on-screen keyboard with the arrow keys and Enter."
)]
pub struct Cli {
    /// secret word to use instead of a random pick
    #[clap(short = 'w', long)]
    word: Option<String>,

    /// word list to draw the secret word from
    #[clap(short = 'l', long, value_enum, default_value_t = SupportedWordList::English)]
    word_list: SupportedWordList,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum SupportedWordList {
    Classic,
    English,
}

impl SupportedWordList {
    fn as_word_list(&self) -> WordList {
        WordList::new(self.to_string().to_lowercase())
    }
}

impl Cli {
    /// Secret word for the next round: the override if given, otherwise a
    /// random pick from the configured list.
    fn pick_word(&self) -> String {
        match &self.word {
            Some(word) => word.clone(),
            None => self.word_list.as_word_list().random_word(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    Playing,
    Won,
    Lost,
}

#[derive(Debug)]
pub struct App {
    pub cli: Option<Cli>,
    pub session: Session,
    pub keyboard: Keyboard,
    pub state: AppState,
    pub celebration: CelebrationAnimation,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        let word = cli.pick_word();

        Self {
            cli: Some(cli),
            session: Session::new(word),
            keyboard: Keyboard::new(),
            state: AppState::Playing,
            celebration: CelebrationAnimation::new(),
        }
    }

    /// The one handler behind every letter button. Raw letter keys and the
    /// cursor-activated key both land here; disabled keys are no-ops.
    pub fn guess(&mut self, letter: char) {
        if self.state != AppState::Playing || !self.keyboard.is_enabled(letter) {
            return;
        }

        self.session.guess(letter);
        self.keyboard.disable(letter);

        match self.session.outcome() {
            Outcome::Won => {
                self.state = AppState::Won;
                self.keyboard.disable_all();
            }
            Outcome::Lost => {
                self.state = AppState::Lost;
                self.keyboard.disable_all();
            }
            Outcome::Playing => {}
        }
    }

    pub fn guess_at_cursor(&mut self) {
        self.guess(self.keyboard.cursor_letter());
    }

    pub fn reset(&mut self) {
        let cli = self.cli.clone().unwrap();
        self.session.restart(cli.pick_word());
        self.keyboard.reset();
        self.state = AppState::Playing;
        self.celebration.stop();
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(word) = &cli.word {
        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            let mut cmd = Cli::command();
            cmd.error(
                ErrorKind::ValueValidation,
                "the secret word must contain only letters a-z",
            )
            .exit();
        }
    }

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(cli);
    start_tui(&mut terminal, &mut app)?;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    Ok(())
}

#[derive(Debug)]
enum ExitType {
    Restart,
    Quit,
}

fn start_tui<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        FixedTicker::new(Duration::from_millis(TICK_RATE_MS)),
    );

    loop {
        let mut exit_type: ExitType = ExitType::Quit;
        terminal.draw(|f| ui(app, f))?;

        loop {
            match runner.step() {
                GameEvent::Tick => {
                    // Only the confetti needs ticking; everything else
                    // redraws on input
                    if app.celebration.is_active {
                        app.celebration.update();
                        terminal.draw(|f| ui(app, f))?;
                    }
                }
                GameEvent::Resize => {
                    terminal.draw(|f| ui(app, f))?;
                }
                GameEvent::Key(key) => {
                    match key.code {
                        KeyCode::Esc => {
                            break;
                        }
                        KeyCode::Left => {
                            if app.state == AppState::Playing {
                                app.keyboard.move_left();
                            }
                        }
                        KeyCode::Right => {
                            if app.state == AppState::Playing {
                                app.keyboard.move_right();
                            }
                        }
                        KeyCode::Up => {
                            if app.state == AppState::Playing {
                                app.keyboard.move_up();
                            }
                        }
                        KeyCode::Down => {
                            if app.state == AppState::Playing {
                                app.keyboard.move_down();
                            }
                        }
                        KeyCode::Enter => match app.state {
                            AppState::Playing => {
                                app.guess_at_cursor();
                                if app.state == AppState::Won {
                                    let size = terminal.size().unwrap_or_default();
                                    app.celebration.start(size.width, size.height);
                                }
                            }
                            AppState::Won | AppState::Lost => {
                                exit_type = ExitType::Restart;
                                break;
                            }
                        },
                        KeyCode::Char(c) => {
                            if key.modifiers.contains(KeyModifiers::CONTROL)
                                && key.code == KeyCode::Char('c')
                            // ctrl+c to quit
                            {
                                break;
                            }

                            match app.state {
                                AppState::Playing => {
                                    if c.is_ascii_alphabetic() {
                                        app.guess(c);
                                        if app.state == AppState::Won {
                                            let size = terminal.size().unwrap_or_default();
                                            app.celebration.start(size.width, size.height);
                                        }
                                    }
                                }
                                AppState::Won | AppState::Lost => {
                                    if key.code == KeyCode::Char('r') {
                                        exit_type = ExitType::Restart;
                                        break;
                                    }
                                }
                            }
                        }
                        _ => {}
                    }
                    terminal.draw(|f| ui(app, f))?;
                }
            }
        }

        match exit_type {
            ExitType::Restart => {
                app.reset();
            }
            ExitType::Quit => {
                break;
            }
        }
    }

    Ok(())
}

fn ui(app: &mut App, f: &mut Frame) {
    f.render_widget(&*app, f.area());
}
