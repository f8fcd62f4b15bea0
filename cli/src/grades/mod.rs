//! Grade Store Module
//!
//! This module holds the numeric side of the calculator:
//!
//! - `Grade`: a score guaranteed to lie in `[0, 100]`
//! - `GradeStore`: the ordered, append-only list of grades for one session
//! - `LetterGrade`: the A-F band an average falls into
//! - `Summary`: count, average and letter taken together
//!
//! The store knows nothing about prompting or display. Formatting a score for
//! the user lives here as well so every message rounds the same way.

use std::fmt;
use thiserror::Error;

pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 100.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no grades have been recorded")]
pub struct EmptyStoreError;

/// A single score. Only constructible through [`Grade::new`], which rejects
/// anything outside `[0, 100]` (NaN included).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Grade(f64);

impl Grade {
    pub fn new(value: f64) -> Option<Self> {
        if (MIN_GRADE..=MAX_GRADE).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_score(self.0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterGrade {
    A,
    B,
    C,
    D,
    F,
}

impl LetterGrade {
    /// Bands are checked highest first; each lower bound is inclusive.
    pub fn from_average(average: f64) -> Self {
        if average >= 90.0 {
            LetterGrade::A
        } else if average >= 80.0 {
            LetterGrade::B
        } else if average >= 70.0 {
            LetterGrade::C
        } else if average >= 60.0 {
            LetterGrade::D
        } else {
            LetterGrade::F
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LetterGrade::A => "A",
            LetterGrade::B => "B",
            LetterGrade::C => "C",
            LetterGrade::D => "D",
            LetterGrade::F => "F",
        }
    }
}

impl fmt::Display for LetterGrade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub average: f64,
    pub letter: LetterGrade,
}

#[derive(Debug, Default, Clone)]
pub struct GradeStore {
    grades: Vec<Grade>,
}

impl GradeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, grade: Grade) {
        self.grades.push(grade);
    }

    pub fn is_empty(&self) -> bool {
        self.grades.is_empty()
    }

    pub fn len(&self) -> usize {
        self.grades.len()
    }

    #[cfg(test)]
    pub fn grades(&self) -> &[Grade] {
        &self.grades
    }

    pub fn average(&self) -> Result<f64, EmptyStoreError> {
        if self.grades.is_empty() {
            return Err(EmptyStoreError);
        }
        let total: f64 = self.grades.iter().map(|g| g.value()).sum();
        Ok(total / self.grades.len() as f64)
    }

    pub fn summary(&self) -> Option<Summary> {
        let average = self.average().ok()?;
        Some(Summary {
            count: self.grades.len(),
            average,
            letter: LetterGrade::from_average(average),
        })
    }
}

/// Render a score with at most two fractional digits, dropping trailing
/// zeros and a dangling decimal point (`80.0` -> `80`, `55.50` -> `55.5`).
pub fn format_score(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
