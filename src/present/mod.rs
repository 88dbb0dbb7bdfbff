pub mod terminal;

pub use terminal::*;

use crate::compare::Report;
use crate::slots::SlotView;

/// The surface a front end draws the form on
pub trait Presenter {
    fn render(&mut self, slots: &[SlotView]);
    fn show_error(&mut self, message: &str);
    fn show_result(&mut self, report: &Report);
}
