//! TUI (Terminal User Interface) frontend for Hangman
//!
//! This module provides a full-screen terminal interface using Ratatui.
//!
//! # Architecture
//! - `TuiModel`: terminal-free UI state and key handling
//! - `TuiInterface`: owns the terminal, draws the model and implements `GameInterface`
//!
//! # State Machine
//! - `EnteringSecret` → `Guessing` → `GameOver`
//! - Esc leaves from any state

use crate::art;
use crate::game_state::{GameInterface, Progress, SecretWord};
use crate::{debug_log, info_log};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use itertools::Itertools;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io;
use std::time::Duration;

const EVENT_POLL_TIMEOUT_MS: u64 = 100;
const MAX_SECRET_INPUT: usize = 32;

const HEADER_STYLE: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const ERROR_STYLE: Style = Style::new().fg(Color::Red);
const SUCCESS_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);
const WORD_STYLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
const MESSAGE_STYLE: Style = Style::new().fg(Color::Cyan);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TuiState {
    EnteringSecret,
    Guessing,
    /// Game decided; waiting for any key before returning to the caller.
    GameOver,
}

/// Input the model hands back to the game loop.
#[derive(Debug, Clone, PartialEq, Eq)]
enum UserAction {
    Submit(String),
    Exit,
}

/// Everything drawn on screen, independent of the terminal.
#[derive(Debug)]
struct TuiModel {
    state: TuiState,
    secret_input: String,
    progress: Option<Progress>,
    stage: String,
    message: String,
    error_message: String,
    status: String,
}

impl TuiModel {
    fn new() -> Self {
        Self {
            state: TuiState::EnteringSecret,
            secret_input: String::new(),
            progress: None,
            stage: art::stage(0).to_string(),
            message: String::new(),
            error_message: String::new(),
            status: "Ready to start".to_string(),
        }
    }

    fn has_modifier_keys(key: &KeyEvent) -> bool {
        key.modifiers.contains(KeyModifiers::ALT) || key.modifiers.contains(KeyModifiers::CONTROL)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            info_log!("handle_key() - quit requested");
            return Some(UserAction::Exit);
        }
        match self.state {
            TuiState::EnteringSecret => self.handle_secret_key(key),
            TuiState::Guessing => self.handle_guess_key(key),
            TuiState::GameOver => Some(UserAction::Exit),
        }
    }

    fn handle_secret_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char(c) if !Self::has_modifier_keys(&key) => {
                if self.secret_input.chars().count() < MAX_SECRET_INPUT {
                    self.secret_input.push(c);
                    self.error_message.clear();
                }
                None
            }
            KeyCode::Backspace => {
                self.secret_input.pop();
                None
            }
            KeyCode::Enter => Some(UserAction::Submit(std::mem::take(&mut self.secret_input))),
            _ => {
                debug_log!("handle_secret_key() - ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn handle_guess_key(&mut self, key: KeyEvent) -> Option<UserAction> {
        match key.code {
            KeyCode::Char(c) if !Self::has_modifier_keys(&key) => {
                Some(UserAction::Submit(c.to_string()))
            }
            _ => {
                debug_log!("handle_guess_key() - ignoring key: {:?}", key.code);
                None
            }
        }
    }

    fn finish(&mut self, secret: &SecretWord, message: String) {
        self.state = TuiState::GameOver;
        if let Some(progress) = self.progress.as_mut() {
            progress.revealed = secret.as_str().chars().join(" ");
        }
        self.message = message;
        self.error_message.clear();
        self.status = "Press any key to exit".to_string();
    }

    fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Title
                Constraint::Min(10),    // Gallows and word
                Constraint::Length(4),  // Messages
                Constraint::Length(3),  // Status line
                Constraint::Length(3),  // Instructions
            ])
            .split(f.area());

        Self::render_title(f, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(24), Constraint::Min(20)])
            .split(chunks[1]);
        self.render_stage(f, body[0]);
        self.render_board(f, body[1]);

        self.render_messages(f, chunks[2]);
        self.render_status(f, chunks[3]);
        self.render_instructions(f, chunks[4]);
    }

    fn render_title(f: &mut Frame, area: Rect) {
        let title = Paragraph::new(art::WELCOME.to_uppercase())
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(title, area);
    }

    fn render_stage(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self.stage.lines().map(Line::from).collect();
        let paragraph =
            Paragraph::new(lines).block(Block::default().title("Gallows").borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    fn render_board(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();

        match (&self.state, &self.progress) {
            (TuiState::EnteringSecret, _) => {
                lines.push(Line::from(vec![Span::styled("Secret word:", HEADER_STYLE)]));
                lines.push(Line::from(format!(
                    "  {}",
                    "*".repeat(self.secret_input.chars().count())
                )));
            }
            (_, Some(progress)) => {
                lines.push(Line::from(vec![Span::styled("Word:", HEADER_STYLE)]));
                lines.push(Line::from(vec![Span::styled(
                    format!("  {}", progress.revealed),
                    WORD_STYLE,
                )]));
                lines.push(Line::from(""));
                lines.push(Line::from(vec![Span::styled("Guessed:", HEADER_STYLE)]));
                lines.push(Line::from(format!("  {}", progress.trail)));
                lines.push(Line::from(""));
                lines.push(Line::from(format!("Tries left: {}", progress.tries_left())));
            }
            (_, None) => {}
        }

        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Hangman").borders(Borders::ALL))
            .wrap(Wrap { trim: false });
        f.render_widget(paragraph, area);
    }

    fn render_messages(&self, f: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        if !self.message.is_empty() {
            let style = if self.state == TuiState::GameOver {
                SUCCESS_STYLE
            } else {
                MESSAGE_STYLE
            };
            lines.push(Line::from(vec![Span::styled(self.message.as_str(), style)]));
        }
        if !self.error_message.is_empty() {
            lines.push(Line::from(vec![Span::styled(
                self.error_message.as_str(),
                ERROR_STYLE,
            )]));
        }
        let paragraph = Paragraph::new(lines)
            .block(Block::default().title("Information").borders(Borders::ALL))
            .wrap(Wrap { trim: true });
        f.render_widget(paragraph, area);
    }

    fn render_status(&self, f: &mut Frame, area: Rect) {
        let status_text = if self.status.is_empty() {
            "Ready"
        } else {
            self.status.as_str()
        };
        let paragraph = Paragraph::new(status_text)
            .style(HEADER_STYLE)
            .block(Block::default().borders(Borders::ALL).title("Status"));
        f.render_widget(paragraph, area);
    }

    fn render_instructions(&self, f: &mut Frame, area: Rect) {
        let text = match self.state {
            TuiState::EnteringSecret => "Type the secret word | ENTER: Submit | ESC: Quit",
            TuiState::Guessing => "Press a letter to guess | ESC: Quit",
            TuiState::GameOver => "Press any key to exit",
        };
        let paragraph = Paragraph::new(text)
            .style(Style::default().fg(Color::Gray))
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }
}

/// Full-screen terminal implementation of [`GameInterface`].
pub struct TuiInterface {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    model: TuiModel,
}

impl TuiInterface {
    pub fn new() -> Result<Self, io::Error> {
        info_log!("TuiInterface::new() - Initializing TUI");
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        info_log!("Terminal setup complete");

        Ok(Self {
            terminal,
            model: TuiModel::new(),
        })
    }

    pub fn cleanup(&mut self) -> Result<(), io::Error> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        )?;
        Ok(())
    }

    fn draw(&mut self) -> Result<(), io::Error> {
        let model = &self.model;
        self.terminal.draw(|f| model.render(f))?;
        Ok(())
    }

    fn draw_or_log(&mut self) {
        if let Err(e) = self.draw() {
            debug_log!("Draw error: {}", e);
        }
    }

    /// Next key press, or `None` if the poll timed out or the event was not a press.
    fn next_key() -> Result<Option<KeyEvent>, io::Error> {
        if !event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT_MS))? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(Some(key)),
            other => {
                debug_log!("next_key() - ignoring event: {:?}", other);
                Ok(None)
            }
        }
    }

    /// Draws and handles input until the model produces an action.
    fn read_action(&mut self) -> UserAction {
        loop {
            if self.draw().is_err() {
                info_log!("read_action() - Draw failed, returning Exit");
                return UserAction::Exit;
            }
            match Self::next_key() {
                Ok(Some(key)) => {
                    if let Some(action) = self.model.handle_key(key) {
                        info_log!("read_action() - Action received: {:?}", action);
                        return action;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    info_log!("read_action() - Input error {}, returning Exit", e);
                    return UserAction::Exit;
                }
            }
        }
    }

    fn submitted(action: UserAction) -> Option<String> {
        match action {
            UserAction::Submit(text) => Some(text),
            UserAction::Exit => None,
        }
    }
}

impl GameInterface for TuiInterface {
    fn display_banner(&mut self) {
        self.model.message = art::WELCOME.to_string();
        self.draw_or_log();
    }

    fn read_secret_word(&mut self) -> Option<String> {
        self.model.state = TuiState::EnteringSecret;
        self.model.status = "Enter the secret word".to_string();
        let action = self.read_action();
        Self::submitted(action)
    }

    fn display_empty_secret_word(&mut self) {
        self.model.error_message = "The secret word cannot be empty.".to_string();
        self.draw_or_log();
    }

    fn display_word_selected(&mut self, unique_words: usize) {
        self.model.status = format!("Secret word chosen from {unique_words} unique words");
    }

    fn display_secret_accepted(&mut self, secret: &SecretWord) {
        self.model.state = TuiState::Guessing;
        self.model.message = format!("Secret word set: {} letters", secret.len());
        self.model.error_message.clear();
        self.draw_or_log();
    }

    fn display_progress(&mut self, progress: &Progress) {
        self.model.stage = art::stage(progress.mistakes).to_string();
        self.model.progress = Some(progress.clone());
        self.model.status = format!("Mistakes: {}/{}", progress.mistakes, progress.max_mistakes);
        self.draw_or_log();
    }

    fn read_guess(&mut self) -> Option<String> {
        self.model.state = TuiState::Guessing;
        let action = self.read_action();
        Self::submitted(action)
    }

    fn display_invalid_guess(&mut self, trail: &str) {
        self.model.message.clear();
        self.model.error_message = if trail.is_empty() {
            "Invalid input or letter already guessed.".to_string()
        } else {
            format!("Invalid input or letter already guessed. ({trail})")
        };
    }

    fn display_good_guess(&mut self) {
        self.model.error_message.clear();
        self.model.message = "Good guess!".to_string();
    }

    fn display_wrong_guess(&mut self, tries_left: usize, stage: &str) {
        self.model.error_message.clear();
        self.model.message = format!("Wrong guess! You have {tries_left} tries left.");
        self.model.stage = stage.to_string();
    }

    fn display_win(&mut self, secret: &SecretWord) {
        self.model
            .finish(secret, format!("Congratulations! You guessed the word: {secret}"));
        self.read_action();
    }

    fn display_loss(&mut self, secret: &SecretWord) {
        self.model.stage = art::stage(art::max_mistakes()).to_string();
        if let Some(progress) = self.model.progress.as_mut() {
            progress.mistakes = progress.max_mistakes;
        }
        self.model
            .finish(secret, format!("Game over! The word was: {secret}"));
        self.read_action();
    }

    fn display_exit_message(&mut self) {
        self.model.message = "Exiting...".to_string();
        self.model.status = "Exiting application...".to_string();
        self.draw_or_log();
    }
}

impl Drop for TuiInterface {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
