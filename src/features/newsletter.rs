use crate::dom::FormControl;
use crate::markup::EMAIL_INPUT;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty email: nothing changes on the page.
    Ignored,
    /// The form was swapped for the success message; a reset is due.
    Accepted,
}

/// Local-only newsletter signup. Nothing is ever sent anywhere.
pub struct Newsletter<F> {
    form: F,
    success: Option<F>,
}

impl<F: FormControl> Newsletter<F> {
    pub fn new(form: F, success: Option<F>) -> Self {
        Newsletter { form, success }
    }

    pub fn submit(&self) -> SubmitOutcome {
        let email = self.form.field_value(EMAIL_INPUT).unwrap_or_default();
        if email.is_empty() {
            return SubmitOutcome::Ignored;
        }
        self.form.set_style("display", "none");
        if let Some(success) = &self.success {
            success.set_style("display", "block");
        }
        SubmitOutcome::Accepted
    }

    /// Puts the empty form back. Skipped if the form has left the page.
    pub fn restore(&self) -> bool {
        if !self.form.is_connected() {
            return false;
        }
        self.form.reset();
        self.form.set_style("display", "block");
        if let Some(success) = self.success.as_ref().filter(|s| s.is_connected()) {
            success.set_style("display", "none");
        }
        true
    }
}
