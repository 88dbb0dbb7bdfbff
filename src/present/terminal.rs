use crate::compare::Report;
use crate::present::Presenter;
use crate::slots::SlotView;
use std::io::Write;

const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Presenter that writes plain text, optionally with ANSI colors
pub struct TerminalPresenter<W: Write> {
    out: W,
    color: bool,
    list_slots: bool,
    show_errors: bool,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            list_slots: false,
            show_errors: true,
        }
    }

    /// Leave error reporting to the caller
    pub fn without_errors(mut self) -> Self {
        self.show_errors = false;
        self
    }

    /// Also print the slot list every time the form changes
    pub fn with_slot_listing(mut self) -> Self {
        self.list_slots = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.color {
            format!("{}{}{}", code, text, RESET)
        } else {
            text.to_string()
        }
    }

    fn write_line(&mut self, line: &str) {
        if let Err(e) = writeln!(self.out, "{}", line) {
            tracing::warn!("failed to write output: {}", e);
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn render(&mut self, slots: &[SlotView]) {
        if !self.list_slots {
            return;
        }
        for slot in slots {
            let suffix = if slot.removable { " (removable)" } else { "" };
            self.write_line(&format!("[{}] {}{}", slot.id, slot.title, suffix));
        }
    }

    fn show_error(&mut self, message: &str) {
        if !self.show_errors {
            return;
        }
        let line = self.paint(&format!("error: {}", message), RED);
        self.write_line(&line);
    }

    fn show_result(&mut self, report: &Report) {
        self.write_line(&format!("Best option: {}", report.winner));
        self.write_line(&report.heading);
        for line in &report.lines {
            let text = if line.is_winner {
                self.paint(&format!("* {}", line), GREEN)
            } else {
                self.paint(&format!("  {}", line), RED)
            };
            self.write_line(&text);
        }
    }
}
