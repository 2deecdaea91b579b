use contracts::domain::contact::aggregate::{
    validate_field, ContactField, ContactFields, FieldErrors,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Simulated round-trip latency for a submission.
const SUBMIT_LATENCY_MS: u32 = 1400;
/// How long the success banner stays up.
const SUCCESS_BANNER_MS: u32 = 6000;

/// ViewModel for the contact form.
///
/// State machine: editing → (validate) → submitting → succeeded → editing.
/// Errors are recorded per field; the only paths that set one are blur and
/// submit, while edits clear a recorded error as soon as the field
/// validates again.
#[derive(Clone, Copy)]
pub struct ContactFormViewModel {
    pub fields: RwSignal<ContactFields>,
    pub errors: RwSignal<FieldErrors>,
    pub submitting: RwSignal<bool>,
    pub success_visible: RwSignal<bool>,
}

impl ContactFormViewModel {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(ContactFields::default()),
            errors: RwSignal::new(FieldErrors::default()),
            submitting: RwSignal::new(false),
            success_visible: RwSignal::new(false),
        }
    }

    /// Reactive value of one field.
    pub fn field(&self, field: ContactField) -> Signal<String> {
        let fields = self.fields;
        Signal::derive(move || fields.with(|f| f.get(field).to_string()))
    }

    /// Reactive error flag of one field.
    pub fn has_error(&self, field: ContactField) -> Signal<bool> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field)))
    }

    /// Keystroke path: update the value, and clear a recorded error as soon
    /// as the field validates again. Errors are never set here.
    pub fn set_field(&self, field: ContactField, value: String) {
        let revalidated = validate_field(field, &value);
        self.fields.update(|f| f.set(field, value));
        if revalidated && self.errors.with_untracked(|e| e.get(field)) {
            self.errors.update(|e| e.set(field, false));
        }
    }

    /// Blur path: recompute and record the field's error state. This is the
    /// only place a single field's error gets set.
    pub fn blur_field(&self, field: ContactField, value: &str) {
        let failed = !validate_field(field, value);
        self.errors.update(|e| e.set(field, failed));
    }

    /// Validate everything and run the simulated submission. A submit while
    /// one is already in flight is ignored; the button is disabled as well.
    pub fn submit(&self) {
        if self.submitting.get_untracked() {
            return;
        }

        let errors = self.fields.with_untracked(FieldErrors::validate_all);
        self.errors.set(errors);
        if errors.any() {
            return;
        }

        self.submitting.set(true);
        let this = *self;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(SUBMIT_LATENCY_MS).await;
            // The signals die with the form; a timer that outlives it must
            // not write into disposed state.
            if this.submitting.try_set(false).is_some() {
                return;
            }
            this.fields.set(ContactFields::default());
            this.success_visible.set(true);

            TimeoutFuture::new(SUCCESS_BANNER_MS).await;
            let _ = this.success_visible.try_set(false);
        });
    }
}

impl Default for ContactFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}
