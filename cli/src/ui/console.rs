//! Line-oriented front end for terminals without TUI support, pipes and
//! scripted input. End of input counts as cancelling the prompt.

use crate::session::{Dialog, Notice, NoticeKind, Prompt};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};

pub struct ConsoleDialog<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> ConsoleDialog<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    #[cfg(test)]
    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<R: BufRead, W: Write> Dialog for ConsoleDialog<R, W> {
    fn prompt_text(&mut self, prompt: &Prompt) -> Result<Option<String>> {
        writeln!(self.writer, "[{}]", prompt.title)?;
        writeln!(self.writer, "{}", prompt.body)?;
        write!(self.writer, "> ")?;
        self.writer.flush()?;

        // Raw bytes so a non-UTF-8 line becomes unparseable text, not an I/O error
        let mut buf = Vec::new();
        let read = self
            .reader
            .read_until(b'\n', &mut buf)
            .context("Failed to read from stdin")?;
        if read == 0 {
            writeln!(self.writer)?;
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }

    fn show_message(&mut self, notice: &Notice) -> Result<()> {
        let marker = match notice.kind {
            NoticeKind::Info => "",
            NoticeKind::Error => "! ",
        };
        writeln!(self.writer, "{}[{}]", marker, notice.title)?;
        writeln!(self.writer, "{}", notice.body)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grades::GradeStore;
    use crate::session::Session;
    use std::io::Cursor;

    fn console(input: &str) -> ConsoleDialog<Cursor<Vec<u8>>, Vec<u8>> {
        ConsoleDialog::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_line_is_returned_without_newline() {
        let mut dialog = console("  72.5 \r\n");
        let answer = dialog.prompt_text(&Prompt::new("Add Grade", "Enter a grade (0-100):")).unwrap();
        assert_eq!(answer.as_deref(), Some("  72.5 "));
    }

    #[test]
    fn test_empty_line_is_not_cancellation() {
        let mut dialog = console("\n");
        let answer = dialog.prompt_text(&Prompt::new("Add Grade", "")).unwrap();
        assert_eq!(answer.as_deref(), Some(""));
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut dialog = console("");
        let answer = dialog.prompt_text(&Prompt::new("Add Grade", "")).unwrap();
        assert_eq!(answer, None);
    }

    #[test]
    fn test_invalid_utf8_line_is_returned_as_text() {
        let mut dialog = ConsoleDialog::new(Cursor::new(vec![0xff, 0xfe, b'\n']), Vec::new());
        let answer = dialog.prompt_text(&Prompt::new("Add Grade", "")).unwrap();
        assert_eq!(answer.as_deref(), Some("\u{fffd}\u{fffd}"));
    }

    #[test]
    fn test_invalid_utf8_grade_is_reprompted() {
        let mut input = b"1\n".to_vec();
        input.extend_from_slice(&[0xff, 0xfe, b'\n']);
        input.extend_from_slice(b"90\n4\n");
        let mut dialog = ConsoleDialog::new(Cursor::new(input), Vec::new());
        let mut store = GradeStore::new();
        Session::new(&mut dialog, &mut store).run().unwrap();
        assert_eq!(store.len(), 1);

        let out = String::from_utf8(dialog.into_writer()).unwrap();
        assert!(out.contains("! [Invalid Input]\nPlease enter a valid number."));
        assert!(out.contains("Grade 90 added successfully."));
        assert!(out.contains("Total Grades: 1"));
    }

    #[test]
    fn test_error_notice_is_marked() {
        let mut dialog = console("");
        dialog
            .show_message(&Notice::error("Invalid Grade", "Grade must be between 0 and 100."))
            .unwrap();
        let out = String::from_utf8(dialog.into_writer()).unwrap();
        assert_eq!(out, "! [Invalid Grade]\nGrade must be between 0 and 100.\n\n");
    }

    #[test]
    fn test_full_session_over_console() {
        let mut dialog = console("1\n90\n1\n80\n1\n70\n2\n3\n");
        let mut store = GradeStore::new();
        Session::new(&mut dialog, &mut store).run().unwrap();
        assert_eq!(store.len(), 3);

        let out = String::from_utf8(dialog.into_writer()).unwrap();
        assert!(out.contains("Welcome to the Grade Calculator System!"));
        assert!(out.contains("Grade 70 added successfully."));
        assert!(out.contains("Current Average: 80%"));
        assert!(out.contains("Letter Grade: B"));
        // input ran out at the menu, which exits with the summary
        assert!(out.contains("Total Grades: 3\nFinal Average: 80%\nLetter Grade: B"));
    }
}
