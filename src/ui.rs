use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{canvas::Canvas, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{
    celebration::CelebrationAnimation,
    gallows::{self, CANVAS_SIZE},
    keyboard::KeyState,
    session::MAX_INCORRECT,
    App, AppState,
};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

/// Background wash for the won screen
const SUCCESS_BG: Color = Color::Rgb(18, 56, 26);

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // styles
        let bold_style = Style::default().add_modifier(Modifier::BOLD);

        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);

        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);

        if self.state == AppState::Won {
            buf.set_style(area, Style::default().bg(SUCCESS_BG));
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Min(8),    // gallows drawing
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // masked word
                    Constraint::Length(1), // guessed letters
                    Constraint::Length(1), // padding
                    Constraint::Length(3), // keyboard grid
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // result message
                    Constraint::Length(1), // legend
                ]
                .as_ref(),
            )
            .split(area);

        render_gallows(self, chunks[0], buf);

        let masked = Paragraph::new(Span::styled(self.session.masked_word(), bold_style))
            .alignment(Alignment::Center);
        masked.render(chunks[2], buf);

        let guessed = self
            .session
            .guessed_letters()
            .map(|c| c.to_ascii_uppercase())
            .join(" ");
        let guessed_line = if guessed.is_empty() {
            String::new()
        } else {
            format!("Guessed: {}", guessed)
        };
        let guessed_widget = Paragraph::new(Span::styled(guessed_line, dim_style))
            .alignment(Alignment::Center);
        guessed_widget.render(chunks[3], buf);

        render_keyboard(self, chunks[5], buf);

        let message = match self.state {
            AppState::Playing => Span::styled(
                format!(
                    "{} of {} wrong guesses",
                    self.session.incorrect_count(),
                    MAX_INCORRECT
                ),
                Style::default().patch(dim_style).patch(italic_style),
            ),
            AppState::Won => Span::styled("You guessed the word!", green_bold_style),
            AppState::Lost => Span::styled(
                format!(
                    "You lost! The word was: {}",
                    self.session.secret_word().to_ascii_uppercase()
                ),
                red_bold_style,
            ),
        };
        let message_widget = Paragraph::new(message).alignment(Alignment::Center);
        message_widget.render(chunks[7], buf);

        let legend_text = match self.state {
            AppState::Playing => "(a-z) guess / (arrows) move / (enter) press key / (esc)ape",
            AppState::Won | AppState::Lost => "(r)etry / (esc)ape",
        };
        // Narrow terminals get the short form
        let legend_text = if legend_text.width() as u16 > chunks[8].width {
            match self.state {
                AppState::Playing => "(a-z) guess / (esc)ape",
                AppState::Won | AppState::Lost => "(r)etry / (esc)ape",
            }
        } else {
            legend_text
        };
        let legend = Paragraph::new(Span::styled(legend_text, italic_style))
            .alignment(Alignment::Center);
        legend.render(chunks[8], buf);

        if self.celebration.is_active {
            render_confetti(&self.celebration, area, buf);
        }
    }
}

/// Scaffold plus one body part per wrong guess, drawn in braille dots.
fn render_gallows(app: &App, area: Rect, buf: &mut Buffer) {
    let incorrect = app.session.incorrect_count();
    let figure_color = if app.state == AppState::Lost {
        Color::Red
    } else {
        Color::White
    };

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, CANVAS_SIZE])
        .y_bounds([0.0, CANVAS_SIZE])
        .paint(|ctx| {
            for segment in gallows::SCAFFOLD.iter() {
                segment.paint(ctx, Color::Gray);
            }
            for segment in gallows::visible_parts(incorrect) {
                segment.paint(ctx, figure_color);
            }
        });

    canvas.render(area, buf);
}

fn render_keyboard(app: &App, area: Rect, buf: &mut Buffer) {
    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let disabled_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    let cursor_style = Style::default()
        .patch(bold_style)
        .add_modifier(Modifier::REVERSED);

    let cursor_letter = app.keyboard.cursor_letter();
    let show_cursor = app.state == AppState::Playing;

    let lines: Vec<Line> = app
        .keyboard
        .rows()
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            for (letter, state) in row {
                let style = if show_cursor && letter == cursor_letter {
                    cursor_style
                } else if state == KeyState::Disabled {
                    disabled_style
                } else {
                    bold_style
                };
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    style,
                ));
            }
            Line::from(spans)
        })
        .collect();

    let widget = Paragraph::new(lines).alignment(Alignment::Center);
    widget.render(area, buf);
}

/// Confetti overlay on top of the won screen
fn render_confetti(celebration: &CelebrationAnimation, area: Rect, buf: &mut Buffer) {
    let colors = [
        Color::Yellow,
        Color::Magenta,
        Color::Cyan,
        Color::Green,
        Color::Red,
        Color::Blue,
        Color::LightYellow,
    ];

    for particle in &celebration.particles {
        let x = particle.x as u16;
        let y = particle.y as u16;

        if x < area.width && y < area.height {
            let color = colors[particle.color_index % colors.len()];

            // Fade with age
            let alpha = 1.0 - (particle.age / particle.max_age);
            let style = if alpha > 0.5 {
                Style::default().fg(color).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color).add_modifier(Modifier::DIM)
            };

            if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                cell.set_symbol(&particle.symbol.to_string());
                cell.set_style(style);
            }
        }
    }
}
