use crate::grades::{Grade, MAX_GRADE, MIN_GRADE};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum InputError {
    #[error("'{0}' is not a number")]
    Parse(String),
    #[error("{value} is outside {min}..={max}")]
    Range { value: f64, min: f64, max: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddGrade,
    ViewAverage,
    ViewLetterGrade,
    Exit,
}

impl MenuChoice {
    pub fn all() -> [MenuChoice; 4] {
        [
            MenuChoice::AddGrade,
            MenuChoice::ViewAverage,
            MenuChoice::ViewLetterGrade,
            MenuChoice::Exit,
        ]
    }

    pub fn number(&self) -> i64 {
        match self {
            MenuChoice::AddGrade => 1,
            MenuChoice::ViewAverage => 2,
            MenuChoice::ViewLetterGrade => 3,
            MenuChoice::Exit => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddGrade => "Add a Grade",
            MenuChoice::ViewAverage => "View Current Average",
            MenuChoice::ViewLetterGrade => "View Letter Grade",
            MenuChoice::Exit => "Exit",
        }
    }

    fn from_number(n: i64) -> Option<Self> {
        Self::all().into_iter().find(|c| c.number() == n)
    }
}

pub fn parse_choice(raw: &str) -> Result<MenuChoice, InputError> {
    let text = raw.trim();
    let n: i64 = text
        .parse()
        .map_err(|_| InputError::Parse(text.to_string()))?;
    MenuChoice::from_number(n).ok_or(InputError::Range {
        value: n as f64,
        min: 1.0,
        max: 4.0,
    })
}

pub fn parse_grade(raw: &str) -> Result<Grade, InputError> {
    let text = raw.trim();
    let value: f64 = text
        .parse()
        .map_err(|_| InputError::Parse(text.to_string()))?;
    Grade::new(value).ok_or(InputError::Range {
        value,
        min: MIN_GRADE,
        max: MAX_GRADE,
    })
}
