//! Modal Dialog State and Event Loop
//!
//! This module turns the session's prompts and notices into full-screen
//! terminal dialogs. It manages:
//!
//! - `DialogState`: what the open dialog shows and the text typed so far
//! - Key handling for editing, submitting, dismissing and cancelling
//! - `TuiDialog`: the `Dialog` front end that owns the terminal and blocks in
//!   an event loop until the open dialog is answered

use crate::session::{Dialog, Notice, NoticeKind, Prompt};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::debug;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Question,
    Info,
    Error,
}

impl From<NoticeKind> for DialogKind {
    fn from(kind: NoticeKind) -> Self {
        match kind {
            NoticeKind::Info => DialogKind::Info,
            NoticeKind::Error => DialogKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Submitted(String),
    Dismissed,
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct DialogState {
    pub title: String,
    pub body: String,
    pub kind: DialogKind,
    pub input: String,
}

impl DialogState {
    pub fn for_prompt(prompt: &Prompt) -> Self {
        Self {
            title: prompt.title.clone(),
            body: prompt.body.clone(),
            kind: DialogKind::Question,
            input: String::new(),
        }
    }

    pub fn for_notice(notice: &Notice) -> Self {
        Self {
            title: notice.title.clone(),
            body: notice.body.clone(),
            kind: notice.kind.into(),
            input: String::new(),
        }
    }

    pub fn accepts_input(&self) -> bool {
        self.kind == DialogKind::Question
    }

    pub fn handle_char(&mut self, c: char) {
        if self.accepts_input() {
            self.input.push(c);
        }
    }

    pub fn handle_backspace(&mut self) {
        if self.accepts_input() {
            self.input.pop();
        }
    }

    /// Apply one key press. Returns `Some` once the dialog is answered.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Outcome> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Ctrl+C backs out of whatever is open
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(self.back_out());
        }

        match key.code {
            KeyCode::Enter => Some(if self.accepts_input() {
                Outcome::Submitted(self.input.clone())
            } else {
                Outcome::Dismissed
            }),
            KeyCode::Esc => Some(self.back_out()),
            KeyCode::Char(' ') if !self.accepts_input() => Some(Outcome::Dismissed),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.handle_char(c);
                None
            }
            KeyCode::Backspace => {
                self.handle_backspace();
                None
            }
            _ => None,
        }
    }

    fn back_out(&self) -> Outcome {
        if self.accepts_input() {
            Outcome::Cancelled
        } else {
            Outcome::Dismissed
        }
    }
}

/// Terminal front end. Raw mode and the alternate screen are set up by the
/// caller; this only draws and reads keys.
pub struct TuiDialog<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TuiDialog<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        Self { terminal }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    fn run_dialog(&mut self, mut state: DialogState) -> Result<Outcome> {
        loop {
            self.terminal
                .draw(|f| super::views::draw(f, &state))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if let Some(outcome) = state.handle_key(key) {
                        debug!("Dialog '{}' answered: {:?}", state.title, outcome);
                        return Ok(outcome);
                    }
                }
            }
        }
    }
}

impl<B: Backend> Dialog for TuiDialog<B> {
    fn prompt_text(&mut self, prompt: &Prompt) -> Result<Option<String>> {
        match self.run_dialog(DialogState::for_prompt(prompt))? {
            Outcome::Submitted(text) => Ok(Some(text)),
            Outcome::Cancelled | Outcome::Dismissed => Ok(None),
        }
    }

    fn show_message(&mut self, notice: &Notice) -> Result<()> {
        self.run_dialog(DialogState::for_notice(notice))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn prompt_state() -> DialogState {
        DialogState::for_prompt(&Prompt::new("Add Grade", "Enter a grade (0-100):"))
    }

    fn type_text(state: &mut DialogState, text: &str) {
        for c in text.chars() {
            assert_eq!(state.handle_key(press(KeyCode::Char(c))), None);
        }
    }

    #[test]
    fn test_prompt_typing_and_submit() {
        let mut state = prompt_state();
        type_text(&mut state, "55.55");
        assert_eq!(state.handle_key(press(KeyCode::Backspace)), None);
        assert_eq!(state.input, "55.5");
        assert_eq!(
            state.handle_key(press(KeyCode::Enter)),
            Some(Outcome::Submitted("55.5".to_string()))
        );
    }

    #[test]
    fn test_empty_submit_is_not_cancel() {
        let mut state = prompt_state();
        assert_eq!(
            state.handle_key(press(KeyCode::Enter)),
            Some(Outcome::Submitted(String::new()))
        );
    }

    #[test]
    fn test_prompt_cancel_keys() {
        let mut state = prompt_state();
        type_text(&mut state, "12");
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Some(Outcome::Cancelled));
        assert_eq!(state.handle_key(ctrl('c')), Some(Outcome::Cancelled));
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut state = prompt_state();
        assert_eq!(state.handle_key(ctrl('u')), None);
        assert!(state.input.is_empty());
    }

    #[test]
    fn test_notice_ignores_typing_and_dismisses() {
        let mut state = DialogState::for_notice(&Notice::error("Invalid Input", "Please enter a valid number."));
        assert_eq!(state.kind, DialogKind::Error);
        assert_eq!(state.handle_key(press(KeyCode::Char('x'))), None);
        assert!(state.input.is_empty());
        assert_eq!(state.handle_key(press(KeyCode::Enter)), Some(Outcome::Dismissed));
        assert_eq!(state.handle_key(press(KeyCode::Esc)), Some(Outcome::Dismissed));
        assert_eq!(state.handle_key(press(KeyCode::Char(' '))), Some(Outcome::Dismissed));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = prompt_state();
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(state.handle_key(key), None);
    }
}
