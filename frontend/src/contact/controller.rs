use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use log::{error, info, warn};

use super::error::{SubmissionError, SubmitRejected};
use super::model::{Ack, ContactFormInput, Field, SubmissionState};
use super::transport::{send_contact, FormTransport};
use crate::config;

/// Contact form state: the typed values, where the submission stands, and
/// which of its overlays are showing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    input: ContactFormInput,
    state: SubmissionState,
    confirmation_open: bool,
    error_notice: Option<String>,
    invalid_field: Option<Field>,
}

/// Held by the page and by its in-flight request, so the submit guard reads
/// the live state instead of whatever the last render saw.
pub type SharedForm = Rc<RefCell<ContactForm>>;

pub fn failure_notice() -> String {
    format!(
        "Sorry, there was an error sending your message. Please try again or email me directly at {}!",
        config::CONTACT_EMAIL
    )
}

impl ContactForm {
    pub fn input(&self) -> &ContactFormInput {
        &self.input
    }

    /// Fields and the submit button are disabled while this is true.
    pub fn is_locked(&self) -> bool {
        self.state.is_submitting()
    }

    pub fn confirmation_open(&self) -> bool {
        self.confirmation_open
    }

    pub fn error_notice(&self) -> Option<&str> {
        self.error_notice.as_deref()
    }

    pub fn invalid_field(&self) -> Option<Field> {
        self.invalid_field
    }

    pub fn edit(&mut self, field: Field, value: String) {
        if self.is_locked() {
            return;
        }
        self.input.set(field, value);
        if self.invalid_field == Some(field) {
            self.invalid_field = None;
        }
    }

    /// The input that a submit right now would send, or why it would be refused.
    pub fn ready_input(&self) -> Result<ContactFormInput, SubmitRejected> {
        if self.is_locked() {
            return Err(SubmitRejected::InFlight);
        }
        self.input.validate().map_err(SubmitRejected::Invalid)?;
        Ok(self.input.clone())
    }

    pub fn begin_submit(&mut self) -> Result<ContactFormInput, SubmitRejected> {
        let input = match self.ready_input() {
            Ok(input) => input,
            Err(rejected) => {
                if let SubmitRejected::Invalid(field) = rejected {
                    self.invalid_field = Some(field);
                }
                return Err(rejected);
            }
        };
        self.state = SubmissionState::Submitting;
        self.confirmation_open = false;
        self.error_notice = None;
        self.invalid_field = None;
        Ok(input)
    }

    /// Applies the outcome of the request started by [`begin_submit`](Self::begin_submit).
    /// Always leaves the submitting state.
    pub fn finish(&mut self, outcome: Result<Ack, SubmissionError>) {
        if !self.is_locked() {
            warn!("Ignoring submission outcome with no submission in flight");
            return;
        }
        match outcome {
            Ok(ack) => {
                info!("Contact form submitted (ack: {:?})", ack);
                self.input.clear();
                self.state = SubmissionState::Succeeded;
                self.confirmation_open = true;
            }
            Err(e) => {
                error!("Form submission error: {}", e);
                self.state = SubmissionState::Failed;
                self.error_notice = Some(failure_notice());
            }
        }
    }

    pub fn dismiss_confirmation(&mut self) {
        self.confirmation_open = false;
        if self.state == SubmissionState::Succeeded {
            self.state = SubmissionState::Idle;
        }
    }

    pub fn dismiss_error(&mut self) {
        self.error_notice = None;
        if self.state == SubmissionState::Failed {
            self.state = SubmissionState::Idle;
        }
    }
}

/// Starts one attempt on the shared form.
///
/// The guard runs and the form locks before this returns, so any further call
/// made before the request settles is refused without sending. The returned
/// future performs the single request and records its outcome on the form.
pub fn submit<'a, T>(
    form: &SharedForm,
    transport: &'a T,
    endpoint: &'a str,
) -> Result<impl Future<Output = Result<Ack, SubmissionError>> + 'a, SubmitRejected>
where
    T: FormTransport + ?Sized + 'a,
{
    let input = form.borrow_mut().begin_submit().map_err(|rejected| {
        warn!("Submit refused: {}", rejected);
        rejected
    })?;
    let form = Rc::clone(form);

    Ok(async move {
        let outcome = send_contact(transport, endpoint, &input).await;
        form.borrow_mut().finish(outcome.clone());
        outcome
    })
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::contact::transport::fake::FakeTransport;

    const ENDPOINT: &str = "https://forms.test/f/abc";

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".into());
        form.edit(Field::Email, "ada@example.com".into());
        form.edit(Field::Message, "Hi".into());
        form
    }

    fn shared(form: ContactForm) -> SharedForm {
        Rc::new(RefCell::new(form))
    }

    fn ada() -> ContactFormInput {
        ContactFormInput::new("Ada", "ada@example.com", "Hi")
    }

    fn started<F>(attempt: Result<F, SubmitRejected>) -> F {
        match attempt {
            Ok(pending) => pending,
            Err(rejected) => panic!("submit was refused: {rejected}"),
        }
    }

    fn run(form: &SharedForm, transport: &FakeTransport) -> Result<Ack, SubmissionError> {
        block_on(started(submit(form, transport, ENDPOINT)))
    }

    #[test]
    fn begin_locks_the_form() {
        let mut form = filled();
        assert!(!form.is_locked());

        let input = form.begin_submit().unwrap();

        assert_eq!(input, ada());
        assert_eq!(form.state, SubmissionState::Submitting);
        assert!(form.is_locked());
    }

    #[test]
    fn second_begin_is_refused() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::InFlight));
        assert_eq!(form.state, SubmissionState::Submitting);
    }

    #[test]
    fn edits_are_ignored_while_locked() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.edit(Field::Name, "Grace".into());
        assert_eq!(form.input().name, "Ada");
    }

    #[test]
    fn invalid_input_is_flagged_and_not_sent() {
        let mut form = filled();
        form.edit(Field::Email, "not-an-email".into());
        let form = shared(form);
        let transport = FakeTransport::status(200, "{}");

        let refused = submit(&form, &transport, ENDPOINT).err();

        assert_eq!(refused, Some(SubmitRejected::Invalid(Field::Email)));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.borrow().state, SubmissionState::Idle);
        assert_eq!(form.borrow().invalid_field(), Some(Field::Email));

        form.borrow_mut().edit(Field::Email, "ada@example.com".into());
        assert_eq!(form.borrow().invalid_field(), None);
    }

    #[test]
    fn form_locks_before_the_request_runs() {
        let form = shared(filled());
        let transport = FakeTransport::status(200, "{}");

        let pending = started(submit(&form, &transport, ENDPOINT));

        assert!(form.borrow().is_locked());
        assert_eq!(transport.calls.get(), 0);
        block_on(pending).unwrap();
        assert!(!form.borrow().is_locked());
    }

    #[test]
    fn ok_response_clears_and_confirms() {
        let form = shared(filled());
        let transport = FakeTransport::status(200, r#"{"ok":true}"#);

        let outcome = run(&form, &transport);

        assert!(outcome.is_ok());
        assert_eq!(transport.calls.get(), 1);
        let form = form.borrow();
        assert_eq!(form.state, SubmissionState::Succeeded);
        assert_eq!(form.input(), &ContactFormInput::default());
        assert!(form.confirmation_open());
        assert!(form.error_notice().is_none());
        assert!(!form.is_locked());
    }

    #[test]
    fn server_error_keeps_values_and_shows_notice() {
        let form = shared(filled());

        let outcome = run(&form, &FakeTransport::status(500, ""));

        assert_eq!(outcome, Err(SubmissionError::Rejected { status: 500 }));
        let form = form.borrow();
        assert_eq!(form.state, SubmissionState::Failed);
        assert_eq!(form.input(), &ada());
        assert!(!form.confirmation_open());
        let notice = form.error_notice().unwrap();
        assert!(notice.contains(config::CONTACT_EMAIL));
        assert!(!form.is_locked());
    }

    #[test]
    fn network_failure_matches_server_error() {
        let rejected = shared(filled());
        run(&rejected, &FakeTransport::status(500, "")).unwrap_err();

        let offline = shared(filled());
        let outcome = run(&offline, &FakeTransport::network_down());

        assert!(matches!(outcome, Err(SubmissionError::Transport(_))));
        assert_eq!(*offline.borrow(), *rejected.borrow());
    }

    #[test]
    fn second_submit_before_rerender_sends_once() {
        let form = shared(filled());
        let transport = FakeTransport::status(200, "{}");

        // Both clicks land before the locked form is rendered.
        let first = started(submit(&form, &transport, ENDPOINT));
        let second = submit(&form, &transport, ENDPOINT).err();

        assert_eq!(second, Some(SubmitRejected::InFlight));
        block_on(first).unwrap();
        assert_eq!(transport.calls.get(), 1);
        assert_eq!(form.borrow().state, SubmissionState::Succeeded);
    }

    #[test]
    fn submit_while_in_flight_sends_nothing() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let form = shared(form);
        let transport = FakeTransport::status(200, "{}");

        assert_eq!(submit(&form, &transport, ENDPOINT).err(), Some(SubmitRejected::InFlight));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(form.borrow().state, SubmissionState::Submitting);
    }

    #[test]
    fn retry_after_failure_is_allowed() {
        let form = shared(filled());
        run(&form, &FakeTransport::network_down()).unwrap_err();
        assert_eq!(form.borrow().state, SubmissionState::Failed);

        assert!(run(&form, &FakeTransport::status(201, "")).is_ok());
        assert_eq!(form.borrow().state, SubmissionState::Succeeded);
    }

    #[test]
    fn dismissals_return_to_idle() {
        let form = shared(filled());
        run(&form, &FakeTransport::status(200, "")).unwrap();
        form.borrow_mut().dismiss_confirmation();
        assert_eq!(form.borrow().state, SubmissionState::Idle);
        assert!(!form.borrow().confirmation_open());

        let form = shared(filled());
        run(&form, &FakeTransport::status(503, "")).unwrap_err();
        form.borrow_mut().dismiss_error();
        let form = form.borrow();
        assert_eq!(form.state, SubmissionState::Idle);
        assert!(form.error_notice().is_none());
        assert_eq!(form.input(), &ada());
    }

    #[test]
    fn stray_outcome_is_ignored() {
        let mut form = filled();
        form.finish(Ok(Ack::default()));
        assert_eq!(form.state, SubmissionState::Idle);
        assert_eq!(form.input(), &ada());
    }
}
