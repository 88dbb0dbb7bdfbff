use crate::compare::{compare_with_limits, CompareError, Comparison, RawEntry, Report};
use crate::config::Config;
use crate::numeric::{format_price_field, sanitize_price_keystroke, NumberInput};
use crate::present::Presenter;
use crate::slots::SlotList;

/// Controller that owns the slot list and the field values behind it,
/// and forwards everything visible to a `Presenter`.
pub struct Form<P: Presenter> {
    slots: SlotList,
    entries: Vec<RawEntry>,
    config: Config,
    presenter: P,
}

impl<P: Presenter> Form<P> {
    pub fn new(config: Config, presenter: P) -> Self {
        let slots = SlotList::new(config.limits);
        let entries = slots.ids().iter().map(|&id| blank(id)).collect();

        let mut form = Self {
            slots,
            entries,
            config,
            presenter,
        };
        form.refresh();
        form
    }

    /// Start from entries read elsewhere (a file or the command line).
    /// The count must already fit the configured limits.
    pub fn with_entries(
        config: Config,
        presenter: P,
        entries: Vec<RawEntry>,
    ) -> Result<Self, CompareError> {
        config.limits.check(entries.len())?;

        let mut form = Self::new(config, presenter);
        while form.entries.len() < entries.len() {
            if form.add_product().is_none() {
                break;
            }
        }
        for (slot, entry) in form.entries.iter_mut().zip(entries) {
            *slot = RawEntry { id: slot.id, ..entry };
        }
        Ok(form)
    }

    pub fn slots(&self) -> &SlotList {
        &self.slots
    }

    pub fn entries(&self) -> &[RawEntry] {
        &self.entries
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub fn entry_mut(&mut self, id: usize) -> Option<&mut RawEntry> {
        self.entries.get_mut(id)
    }

    pub fn add_product(&mut self) -> Option<usize> {
        match self.slots.add() {
            Ok(id) => {
                self.entries.push(blank(id));
                self.refresh();
                Some(id)
            }
            Err(e) => {
                self.presenter.show_error(&e.to_string());
                None
            }
        }
    }

    pub fn remove_product(&mut self, id: usize) -> bool {
        if !self.slots.remove(id) {
            return false;
        }

        self.entries.remove(id);
        for (index, entry) in self.entries.iter_mut().enumerate() {
            entry.id = index;
        }
        self.refresh();
        true
    }

    /// Keystroke in a price field
    pub fn type_price(&mut self, id: usize, text: &str) {
        if let Some(entry) = self.entries.get_mut(id) {
            entry.price = sanitize_price_keystroke(text).into();
        }
    }

    /// Price field lost focus
    pub fn blur_price(&mut self, id: usize) {
        if let Some(entry) = self.entries.get_mut(id) {
            let formatted = match &entry.price {
                NumberInput::Text(text) => format_price_field(text),
                NumberInput::Number(_) => return,
            };
            entry.price = formatted.into();
        }
    }

    /// Run the comparison over every present slot and show the outcome.
    /// A refusal is shown through the presenter and also returned.
    pub fn compare(&mut self) -> Result<Comparison, CompareError> {
        match compare_with_limits(&self.entries, &self.config.limits) {
            Ok(comparison) => {
                let report = Report::new(&comparison, &self.config.currency);
                self.presenter.show_result(&report);
                Ok(comparison)
            }
            Err(e) => {
                self.presenter.show_error(&e.to_string());
                Err(e)
            }
        }
    }

    fn refresh(&mut self) {
        self.presenter.render(&self.slots.views());
    }
}

fn blank(id: usize) -> RawEntry {
    RawEntry {
        id,
        ..RawEntry::default()
    }
}
