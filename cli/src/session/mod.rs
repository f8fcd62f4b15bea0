//! Interaction Loop
//!
//! This module drives one grade-calculator session:
//!
//! - `Dialog`: the two operations a front end must provide (prompt and notice)
//! - `Session`: the menu state machine, borrowing the `GradeStore` it feeds
//! - `input`: parsing and range checks for menu choices and grades
//!
//! Every invalid entry is answered with a notice and a fresh prompt. The only
//! errors `run` returns come from the front end itself (a broken terminal).

mod input;

pub use input::{parse_choice, parse_grade, InputError, MenuChoice};

use crate::grades::{format_score, GradeStore};
use anyhow::Result;
use log::{debug, info};

pub const APP_TITLE: &str = "Grade Calculator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn info(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
            kind: NoticeKind::Info,
        }
    }

    pub fn error(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
            kind: NoticeKind::Error,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub body: String,
}

impl Prompt {
    pub fn new(title: &str, body: impl Into<String>) -> Self {
        Self {
            title: title.to_string(),
            body: body.into(),
        }
    }
}

/// A blocking request/response front end.
pub trait Dialog {
    /// Ask for a line of text. `Ok(None)` means the user cancelled, which is
    /// not the same as submitting an empty line.
    fn prompt_text(&mut self, prompt: &Prompt) -> Result<Option<String>>;

    fn show_message(&mut self, notice: &Notice) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Menu,
    AddGrade,
    ViewAverage,
    ViewLetter,
    Exit,
}

impl From<MenuChoice> for State {
    fn from(choice: MenuChoice) -> Self {
        match choice {
            MenuChoice::AddGrade => State::AddGrade,
            MenuChoice::ViewAverage => State::ViewAverage,
            MenuChoice::ViewLetterGrade => State::ViewLetter,
            MenuChoice::Exit => State::Exit,
        }
    }
}

const NO_GRADES: &str = "No grades entered yet.";
const NOT_A_NUMBER: &str = "Please enter a valid number.";

pub fn welcome_notice() -> Notice {
    Notice::info(
        APP_TITLE,
        "Welcome to the Grade Calculator System!\n\n\
         This program will help you track your grades\n\
         and calculate your current average.",
    )
}

pub fn menu_prompt() -> Prompt {
    let mut body = String::from("Grade Calculator Menu\n=====================\n\n");
    for choice in MenuChoice::all() {
        body.push_str(&format!("{}. {}\n", choice.number(), choice.label()));
    }
    body.push_str("\nPlease enter your choice (1-4):");
    Prompt::new("Grade Calculator Menu", body)
}

pub fn grade_prompt() -> Prompt {
    Prompt::new("Add Grade", "Enter a grade (0-100):")
}

pub fn goodbye_notice(store: &GradeStore) -> Notice {
    let mut body = String::from("Thank you for using Grade Calculator!");
    if let Some(summary) = store.summary() {
        body.push_str(&format!(
            "\n\nFinal Statistics:\nTotal Grades: {}\nFinal Average: {}%\nLetter Grade: {}",
            summary.count,
            format_score(summary.average),
            summary.letter
        ));
    }
    Notice::info("Goodbye", body)
}

pub struct Session<'a, D: Dialog> {
    dialog: &'a mut D,
    store: &'a mut GradeStore,
    state: State,
}

impl<'a, D: Dialog> Session<'a, D> {
    pub fn new(dialog: &'a mut D, store: &'a mut GradeStore) -> Self {
        Self {
            dialog,
            store,
            state: State::Menu,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Welcome, loop over the menu until Exit, then show the goodbye summary.
    pub fn run(mut self) -> Result<()> {
        info!("Session started");
        self.dialog.show_message(&welcome_notice())?;

        while self.state() != State::Exit {
            self.step()?;
        }

        self.dialog.show_message(&goodbye_notice(self.store))?;
        info!("Session ended with {} grade(s)", self.store.len());
        Ok(())
    }

    /// Run the current state to completion and move to the next one.
    pub fn step(&mut self) -> Result<()> {
        let next = match self.state {
            State::Menu => State::from(self.read_menu_choice()?),
            State::AddGrade => {
                self.add_grade()?;
                State::Menu
            }
            State::ViewAverage => {
                self.view_average()?;
                State::Menu
            }
            State::ViewLetter => {
                self.view_letter_grade()?;
                State::Menu
            }
            State::Exit => State::Exit,
        };
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
        Ok(())
    }

    fn read_menu_choice(&mut self) -> Result<MenuChoice> {
        let prompt = menu_prompt();
        loop {
            let Some(raw) = self.dialog.prompt_text(&prompt)? else {
                debug!("Menu prompt cancelled, exiting");
                return Ok(MenuChoice::Exit);
            };
            match parse_choice(&raw) {
                Ok(choice) => return Ok(choice),
                Err(err @ InputError::Parse(_)) => {
                    debug!("Rejected menu input: {}", err);
                    self.dialog
                        .show_message(&Notice::error("Invalid Input", NOT_A_NUMBER))?;
                }
                Err(err @ InputError::Range { .. }) => {
                    debug!("Rejected menu input: {}", err);
                    self.dialog.show_message(&Notice::error(
                        "Invalid Choice",
                        "Please enter a number between 1 and 4.",
                    ))?;
                }
            }
        }
    }

    fn add_grade(&mut self) -> Result<()> {
        let prompt = grade_prompt();
        loop {
            let Some(raw) = self.dialog.prompt_text(&prompt)? else {
                debug!("Grade entry cancelled");
                return Ok(());
            };
            match parse_grade(&raw) {
                Ok(grade) => {
                    self.store.add(grade);
                    info!("Added grade {} ({} total)", grade, self.store.len());
                    return self.dialog.show_message(&Notice::info(
                        "Grade Added",
                        format!("Grade {} added successfully.", grade),
                    ));
                }
                Err(err @ InputError::Parse(_)) => {
                    debug!("Rejected grade input: {}", err);
                    self.dialog
                        .show_message(&Notice::error("Invalid Input", NOT_A_NUMBER))?;
                }
                Err(err @ InputError::Range { .. }) => {
                    debug!("Rejected grade input: {}", err);
                    self.dialog.show_message(&Notice::error(
                        "Invalid Grade",
                        "Grade must be between 0 and 100.",
                    ))?;
                }
            }
        }
    }

    fn view_average(&mut self) -> Result<()> {
        let body = match self.store.average() {
            Ok(avg) => format!("Current Average: {}%", format_score(avg)),
            Err(_) => NO_GRADES.to_string(),
        };
        self.dialog
            .show_message(&Notice::info("Current Average", body))
    }

    fn view_letter_grade(&mut self) -> Result<()> {
        let body = match self.store.summary() {
            Some(summary) => format!(
                "Average: {}%\nLetter Grade: {}",
                format_score(summary.average),
                summary.letter
            ),
            None => NO_GRADES.to_string(),
        };
        self.dialog.show_message(&Notice::info("Letter Grade", body))
    }
}
