//! Contact form controller
//!
//! Inline validation on blur, error clearing on input, and an async
//! submission driven by a local executor that the site ticks every frame.

use std::fmt;

use smol::{LocalExecutor, Task};
use terro_dom::{Document, NodeId};
use terro_runtime::{Dispatch, Event, EventKind, Page};

use super::submit::{Ack, SubmitError, Submission, Submitter};
use super::validation::{validate, FieldError};
use crate::behavior::{Behavior, Binding};
use crate::config::FormConfig;
use crate::SiteResult;

/// Ids of the validated controls, in validation order
pub const FIELD_IDS: [&str; 6] = ["name", "email", "company", "phone", "inquiry-type", "message"];

const ERROR: &str = "error";
const SUCCESS: &str = "success";
const HIDDEN: &str = "hidden";
const FIRST_ERROR: &str = ".form-input.error, .form-textarea.error, .form-select.error";
const GLOBAL_ERROR_STYLE: &str = "background: rgba(239, 68, 68, 0.1); \
    border: 1px solid var(--color-error); \
    border-radius: var(--radius-lg); \
    padding: var(--space-4); \
    margin-bottom: var(--space-4); \
    color: var(--color-error); \
    text-align: center;";

type SubmitResult = Result<Ack, SubmitError>;

pub struct ContactForm {
    form: NodeId,
    fields: Vec<NodeId>,
    submit_button: Option<NodeId>,
    success_panel: Option<NodeId>,
    config: FormConfig,
    submitter: Box<dyn Submitter>,
    executor: LocalExecutor<'static>,
    in_flight: Option<Task<SubmitResult>>,
}

impl fmt::Debug for ContactForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactForm")
            .field("form", &self.form)
            .field("fields", &self.fields)
            .field("submit_button", &self.submit_button)
            .field("success_panel", &self.success_panel)
            .field("submitting", &self.in_flight.is_some())
            .finish_non_exhaustive()
    }
}

impl ContactForm {
    pub fn bind(
        page: &mut Page,
        config: &FormConfig,
        submitter: Box<dyn Submitter>,
    ) -> SiteResult<Binding<Self>> {
        let doc = page.document();
        let Some(form) = doc.get_element_by_id("contact-form") else {
            return Ok(Binding::Skipped("no #contact-form"));
        };

        let mut fields = Vec::new();
        for id in FIELD_IDS {
            if let Some(field) = doc.query_selector_in(form, &format!("#{id}"))? {
                fields.push(field);
            }
        }

        Ok(Binding::Bound(Self {
            form,
            fields,
            submit_button: doc.query_selector_in(form, r#"button[type="submit"]"#)?,
            success_panel: doc.query_selector(".form-success-message")?,
            config: config.clone(),
            submitter,
            executor: LocalExecutor::new(),
            in_flight: None,
        }))
    }

    pub fn form(&self) -> NodeId {
        self.form
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Validate one field and show the outcome on it
    pub fn validate_field(&self, page: &mut Page, field: NodeId) -> Result<(), FieldError> {
        let doc = page.document_mut();
        let result = {
            let key = field_key(doc, field);
            let value = doc.value(field).unwrap_or_default();
            validate(key, value, doc.has_attribute(field, "required"))
        };

        clear_field_error(doc, field);
        match &result {
            Ok(()) => doc.add_class(field, SUCCESS),
            Err(err) => show_field_error(doc, field, &err.to_string()),
        }
        result
    }

    /// Validate every field; the first failing field, if any
    pub fn validate_all(&self, page: &mut Page) -> Option<NodeId> {
        let mut first_invalid = None;
        for &field in &self.fields {
            if self.validate_field(page, field).is_err() && first_invalid.is_none() {
                first_invalid = Some(field);
            }
        }
        first_invalid
    }

    fn submit(&mut self, page: &mut Page) -> SiteResult<()> {
        if self.in_flight.is_some() {
            tracing::debug!("submit ignored, submission in flight");
            return Ok(());
        }

        if let Some(first_invalid) = self.validate_all(page) {
            let focus = page
                .document()
                .query_selector_in(self.form, FIRST_ERROR)?
                .unwrap_or(first_invalid);
            page.focus(focus);
            return Ok(());
        }

        self.set_loading(page, true);
        let submission = self.collect(page.document());
        let task = self.executor.spawn(self.submitter.submit(submission));
        self.in_flight = Some(task);
        self.poll(page);
        Ok(())
    }

    fn collect(&self, doc: &Document) -> Submission {
        let mut submission = Submission::default();
        for &field in &self.fields {
            let value = doc.value(field).unwrap_or_default().to_string();
            submission.fields.insert(field_key(doc, field).to_string(), value);
        }
        submission
    }

    /// Run the executor and settle a finished submission
    fn poll(&mut self, page: &mut Page) {
        while self.executor.try_tick() {}

        let finished = self.in_flight.as_ref().is_some_and(Task::is_finished);
        if !finished {
            return;
        }
        if let Some(task) = self.in_flight.take() {
            let result = smol::block_on(task);
            self.finish(page, result);
        }
    }

    fn finish(&mut self, page: &mut Page, result: SubmitResult) {
        match result {
            Ok(Ack) => {
                tracing::info!("contact form submitted");
                let doc = page.document_mut();
                doc.add_class(self.form, HIDDEN);
                if let Some(panel) = self.success_panel {
                    doc.remove_class(panel, HIDDEN);
                }
                doc.reset_form(self.form);
            }
            Err(err) => {
                tracing::warn!(%err, "contact form submission failed");
                self.show_form_error(page.document_mut());
            }
        }
        self.set_loading(page, false);
    }

    fn set_loading(&self, page: &mut Page, loading: bool) {
        let Some(button) = self.submit_button else {
            return;
        };
        let doc = page.document_mut();
        doc.set_disabled(button, loading);
        if loading {
            let label = doc.text_content(button);
            doc.set_attribute(button, "data-original-text", &label);
            doc.set_text_content(button, &self.config.loading_label);
        } else if let Some(original) = doc
            .get_attribute(button, "data-original-text")
            .filter(|t| !t.is_empty())
            .map(str::to_string)
        {
            doc.set_text_content(button, &original);
        }
    }

    /// Form-level banner, created once as the form's first child
    fn show_form_error(&self, doc: &mut Document) {
        let banner = match doc.query_selector_in(self.form, ".form-error-global") {
            Ok(Some(banner)) => banner,
            _ => {
                let banner = doc.create_element("div", "form-error-global");
                doc.set_attribute(banner, "style", GLOBAL_ERROR_STYLE);
                let first = doc.tree.first_child(self.form);
                doc.tree.insert_before(self.form, banner, first);
                banner
            }
        };
        doc.set_text_content(banner, &self.config.failure_message);
    }
}

impl Behavior for ContactForm {
    fn name(&self) -> &'static str {
        "contact form"
    }

    fn handle_event(&mut self, page: &mut Page, event: &Event) -> Dispatch {
        match event.kind {
            EventKind::Submit if event.reaches(page.document(), self.form) => {
                if let Err(err) = self.submit(page) {
                    tracing::warn!(%err, "contact form submit failed");
                }
                Dispatch::PreventDefault
            }
            EventKind::Input | EventKind::Blur => {
                let target = self
                    .fields
                    .iter()
                    .copied()
                    .find(|f| event.reaches(page.document(), *f));
                if let Some(field) = target {
                    if event.kind == EventKind::Input {
                        clear_field_error(page.document_mut(), field);
                    } else {
                        let _ = self.validate_field(page, field);
                    }
                }
                Dispatch::Continue
            }
            _ => Dispatch::Continue,
        }
    }

    fn on_frame(&mut self, page: &mut Page) {
        if self.in_flight.is_some() {
            self.poll(page);
        }
    }
}

/// `name` attribute, falling back to the id
fn field_key(doc: &Document, field: NodeId) -> &str {
    doc.get_attribute(field, "name")
        .filter(|n| !n.is_empty())
        .or_else(|| doc.get_attribute(field, "id"))
        .unwrap_or_default()
}

fn existing_message(doc: &Document, field: NodeId) -> Option<NodeId> {
    let parent = doc.parent_element(field)?;
    doc.query_selector_in(parent, ".form-error").ok().flatten()
}

fn show_field_error(doc: &mut Document, field: NodeId, message: &str) {
    doc.remove_class(field, SUCCESS);
    doc.add_class(field, ERROR);

    if let Some(old) = existing_message(doc, field) {
        doc.remove(old);
    }
    let Some(parent) = doc.parent_element(field) else {
        return;
    };
    let note = doc.create_element("p", "form-error");
    doc.set_text_content(note, message);
    doc.tree.append_child(parent, note);
}

fn clear_field_error(doc: &mut Document, field: NodeId) {
    doc.remove_class(field, ERROR);
    doc.remove_class(field, SUCCESS);
    if let Some(old) = existing_message(doc, field) {
        doc.remove(old);
    }
}
