//! Ratatui-based terminal UI.
//!
//! The TUI is the interactive form: personal and professional inputs on the
//! left, the prediction box, profile summary, and career tips on the right.
//! Logs still go to stderr, so redirect it (`2>salary.log`) when raising
//! `SALARY_LOG` while the form is open.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::domain::{Prediction, Profile, SalaryBracket};
use crate::error::AppError;
use crate::report::{bracket_copy, fmt_percent, format_career_tips, profile_summary};

mod form;

use form::{Field, Form};

/// Start the TUI with the form seeded from `seed`.
pub fn run(seed: Profile) -> Result<(), AppError> {
    let _guard = TerminalGuard::new()?;

    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal =
        Terminal::new(backend).map_err(|e| AppError::runtime(format!("Failed to initialize terminal: {e}")))?;

    let mut app = App::new(Form::from_profile(&seed));
    app.event_loop(&mut terminal)
}

/// Ensures the terminal is restored (raw mode, alternate screen) on exit.
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Result<Self, AppError> {
        enable_raw_mode().map_err(|e| AppError::runtime(format!("Failed to enable raw mode: {e}")))?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(AppError::runtime(format!("Failed to enter alternate screen: {e}")));
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

struct App {
    form: Form,
    selected: usize,
    editing_custom: bool,
    show_tips: bool,
    prediction: Option<Prediction>,
    status: String,
}

impl App {
    fn new(form: Form) -> Self {
        let unlisted = form.unlisted_fields();
        let status = if unlisted.is_empty() {
            "Fill in your details, then select Predict.".to_string()
        } else {
            let names: Vec<&str> = unlisted.iter().map(|f| f.label()).collect();
            format!("Unlisted {} scored as typed; change to pick from the list.", names.join(", "))
        };
        Self {
            form,
            selected: 0,
            editing_custom: false,
            show_tips: false,
            prediction: None,
            status,
        }
    }

    fn selected_field(&self) -> Field {
        let fields = self.form.visible_fields();
        fields[self.selected.min(fields.len() - 1)]
    }

    fn event_loop<B: ratatui::backend::Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<(), AppError> {
        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                terminal
                    .draw(|f| self.draw(f))
                    .map_err(|e| AppError::runtime(format!("Terminal draw error: {e}")))?;
                needs_redraw = false;
            }

            if !event::poll(Duration::from_millis(100))
                .map_err(|e| AppError::runtime(format!("Event poll error: {e}")))?
            {
                continue;
            }

            match event::read().map_err(|e| AppError::runtime(format!("Event read error: {e}")))? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if self.handle_key(key.code) {
                        break;
                    }
                    needs_redraw = true;
                }
                Event::Resize(_, _) => {
                    needs_redraw = true;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Returns `true` when the user asked to quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.editing_custom {
            self.handle_custom_edit(code);
            return false;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                let last = self.form.visible_fields().len() - 1;
                if self.selected < last {
                    self.selected += 1;
                }
            }
            KeyCode::Left => self.adjust(-1),
            KeyCode::Right => self.adjust(1),
            KeyCode::PageDown => self.adjust(5),
            KeyCode::PageUp => self.adjust(-5),
            KeyCode::Enter => match self.selected_field() {
                Field::Predict => self.predict(),
                Field::CustomProfession => {
                    self.editing_custom = true;
                    self.status = "Typing profession. Enter to save, Esc to stop.".to_string();
                }
                _ => {}
            },
            KeyCode::Char('p') => self.predict(),
            KeyCode::Char('t') => {
                self.show_tips = !self.show_tips;
            }
            _ => {}
        }
        false
    }

    fn handle_custom_edit(&mut self, code: KeyCode) {
        match code {
            KeyCode::Enter | KeyCode::Esc => {
                self.editing_custom = false;
                self.status = if self.form.custom_profession.is_empty() {
                    "No profession entered.".to_string()
                } else {
                    format!("Recorded: {}", self.form.custom_profession)
                };
            }
            KeyCode::Backspace => self.form.pop_custom_char(),
            KeyCode::Char(c) => self.form.push_custom_char(c),
            _ => {}
        }
    }

    fn adjust(&mut self, delta: i32) {
        let field = self.selected_field();
        if self.form.adjust(field, delta) {
            // A changed input invalidates the last result, as on the web page.
            self.prediction = None;
            self.status = format!("{}: {}", field.label(), self.form.value(field));
            let last = self.form.visible_fields().len() - 1;
            self.selected = self.selected.min(last);
        }
    }

    fn predict(&mut self) {
        let prediction = self.form.to_profile().predict();
        self.status = format!(
            "Predicted {} (confidence {})",
            prediction.bracket,
            fmt_percent(prediction.confidence)
        );
        self.prediction = Some(prediction);
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let size = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        self.draw_header(frame, chunks[0]);
        self.draw_body(frame, chunks[1]);
        self.draw_footer(frame, chunks[2]);
    }

    fn draw_header(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                "Indian Employee Salary Prediction System",
                Style::default().fg(Color::Rgb(255, 153, 51)).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Heuristic salary classification for the Indian job market",
                Style::default().fg(Color::Gray),
            )),
        ];
        let p = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_body(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        self.draw_form(frame, columns[0]);

        let right_constraints = if self.show_tips {
            [Constraint::Length(7), Constraint::Length(8), Constraint::Min(0)]
        } else {
            [Constraint::Length(7), Constraint::Min(0), Constraint::Length(0)]
        };
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints(right_constraints)
            .split(columns[1]);

        self.draw_prediction(frame, right[0]);
        self.draw_summary(frame, right[1]);
        if self.show_tips {
            self.draw_tips(frame, right[2]);
        }
    }

    fn draw_form(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let fields = self.form.visible_fields();
        let mut items = Vec::new();
        let mut selected_row = 0usize;
        let mut section = "";

        for (idx, &field) in fields.iter().enumerate() {
            if field.section() != section {
                section = field.section();
                items.push(ListItem::new(Line::from(Span::styled(
                    section,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ))));
            }
            if idx == self.selected {
                selected_row = items.len();
            }
            let line = if field == Field::Predict {
                Line::from(Span::styled(field.label(), Style::default().add_modifier(Modifier::BOLD)))
            } else {
                let editing = self.editing_custom && field == Field::CustomProfession;
                let value_style = if editing {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::raw(format!("{:<21}", field.label())),
                    Span::styled(self.form.value(field), value_style),
                ])
            };
            items.push(ListItem::new(line));
        }

        let list = List::new(items)
            .block(Block::default().title("Your Details").borders(Borders::ALL))
            .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
            .highlight_symbol("» ");

        let mut state = ListState::default();
        state.select(Some(selected_row));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn draw_prediction(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let block = Block::default().title("Salary Prediction").borders(Borders::ALL);

        let Some(prediction) = &self.prediction else {
            let msg = Paragraph::new("Select Predict (or press p) to estimate your bracket.")
                .style(Style::default().fg(Color::Gray))
                .block(block);
            frame.render_widget(msg, area);
            return;
        };

        let (headline, tagline) = bracket_copy(prediction.bracket);
        let color = match prediction.bracket {
            SalaryBracket::Higher => Color::Green,
            SalaryBracket::Standard => Color::Rgb(255, 152, 0),
        };
        let lines = vec![
            Line::from(Span::styled(headline, Style::default().fg(color).add_modifier(Modifier::BOLD))),
            Line::from(format!("Predicted: {}", prediction.bracket.range_label())),
            Line::from(format!("Confidence: {}", fmt_percent(prediction.confidence))),
            Line::from(Span::styled(tagline, Style::default().fg(color))),
        ];
        let p = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(p, area);
    }

    fn draw_summary(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let profile = self.form.to_profile();
        let lines: Vec<Line> = profile_summary(&profile)
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<12}"), Style::default().fg(Color::Gray)),
                    Span::raw(value),
                ])
            })
            .collect();
        let p = Paragraph::new(Text::from(lines))
            .block(Block::default().title("Your Profile Summary").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_tips(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let tips = format_career_tips(&self.form.to_profile());
        let p = Paragraph::new(tips)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Career Growth Tips").borders(Borders::ALL));
        frame.render_widget(p, area);
    }

    fn draw_footer(&self, frame: &mut ratatui::Frame<'_>, area: Rect) {
        let help = "↑/↓ select  ←/→ adjust  PgUp/PgDn ±5  Enter predict/edit  t tips  q quit";
        let line = Line::from(vec![
            Span::styled(help, Style::default().fg(Color::Gray)),
            Span::raw(" | "),
            Span::styled(&self.status, Style::default().fg(Color::Yellow)),
        ]);
        let p = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(p, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Occupation;
    use ratatui::backend::TestBackend;

    fn select(app: &mut App, field: Field) {
        app.selected = app.form.visible_fields().iter().position(|f| *f == field).unwrap();
    }

    #[test]
    fn predict_then_change_clears_result() {
        let mut app = App::new(Form::default());
        select(&mut app, Field::Predict);
        assert!(!app.handle_key(KeyCode::Enter));
        let pred = app.prediction.unwrap();
        assert_eq!(pred.bracket, SalaryBracket::Higher);
        assert_eq!(pred.score, 123);

        select(&mut app, Field::Experience);
        app.handle_key(KeyCode::Left);
        assert!(app.prediction.is_none());
    }

    #[test]
    fn seeded_unlisted_labels_predict_as_typed() {
        let seed = Profile {
            education: "Self-taught".to_string(),
            occupation: "Digital Marketing".to_string(),
            ..Profile::default()
        };
        let mut app = App::new(Form::from_profile(&seed));
        assert!(app.status.starts_with("Unlisted Education Level, Primary Occupation"));
        app.predict();
        assert_eq!(app.prediction, Some(seed.predict()));
    }

    #[test]
    fn custom_profession_editing_captures_keys() {
        let mut form = Form::default();
        form.occupation = Occupation::OtherServices;
        let mut app = App::new(form);
        select(&mut app, Field::CustomProfession);
        app.handle_key(KeyCode::Enter);
        assert!(app.editing_custom);
        // 'q' is text while editing, not quit.
        assert!(!app.handle_key(KeyCode::Char('q')));
        app.handle_key(KeyCode::Char('A'));
        app.handle_key(KeyCode::Enter);
        assert!(!app.editing_custom);
        assert_eq!(app.form.custom_profession, "qA");
        assert_eq!(app.status, "Recorded: qA");
    }

    #[test]
    fn quit_keys() {
        let mut app = App::new(Form::default());
        assert!(app.handle_key(KeyCode::Char('q')));
        assert!(app.handle_key(KeyCode::Esc));
    }

    #[test]
    fn renders_on_test_backend() {
        let mut app = App::new(Form::default());
        app.show_tips = true;
        app.predict();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| app.draw(f)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Higher Salary Range"));
        assert!(text.contains("Your Profile Summary"));
    }
}
