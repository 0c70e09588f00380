//! Contact page tests: inline validation, submission and failure handling

use std::time::Duration;

use anyhow::{Context, Result};
use smol::future::{BoxedLocal, FutureExt};
use terro_dom::NodeId;
use terro_site::forms::{Ack, SubmitError, Submission, Submitter};
use terro_site::{Dispatch, Event, Page, Site, SiteConfig};

const CONTACT: &str = include_str!("fixtures/contact.html");

fn contact_page() -> Result<Page> {
    Ok(terro_site::load_page(
        CONTACT,
        "https://terro.ai/pages/contact.html",
        1280.0,
        800.0,
    )?)
}

fn field(page: &Page, id: &str) -> Result<NodeId> {
    page.document()
        .get_element_by_id(id)
        .with_context(|| format!("no #{id}"))
}

fn fill(page: &mut Page, values: &[(&str, &str)]) -> Result<()> {
    for (id, value) in values {
        let node = field(page, id)?;
        page.document_mut().set_value(node, value);
    }
    Ok(())
}

fn fill_valid(page: &mut Page) -> Result<()> {
    fill(
        page,
        &[
            ("name", "Ada Lovelace"),
            ("email", "ada@terro.ai"),
            ("phone", "+44 (20) 7946-0958"),
            ("inquiry-type", "sales"),
            ("message", "We would like a demo of the platform."),
        ],
    )
}

/// Text of the inline message under a field, if any
fn field_message(page: &Page, id: &str) -> Result<Option<String>> {
    let doc = page.document();
    let node = field(page, id)?;
    let group = doc.parent_element(node).context("field has no parent")?;
    Ok(doc
        .query_selector_in(group, ".form-error")?
        .map(|note| doc.text_content(note)))
}

fn blur(site: &mut Site, page: &mut Page, id: &str) -> Result<()> {
    let node = field(page, id)?;
    site.dispatch(page, &Event::blur(node));
    Ok(())
}

struct FailingSubmitter;

impl Submitter for FailingSubmitter {
    fn submit(&self, _submission: Submission) -> BoxedLocal<Result<Ack, SubmitError>> {
        std::future::ready(Err(SubmitError::Unavailable)).boxed_local()
    }
}

#[test]
fn test_successful_submission_flow() -> Result<()> {
    let mut page = contact_page()?;
    let mut site = Site::with_simulated_submission(&mut page, &SiteConfig::default())?;
    assert!(site.is_bound("contact form"));

    let form = field(&page, "contact-form")?;
    let button = page.document().query_selector(r#"button[type="submit"]"#)?.context("no button")?;
    let success = page.document().query_selector(".form-success-message")?.context("no panel")?;
    fill_valid(&mut page)?;

    assert_eq!(site.dispatch(&mut page, &Event::submit(form)), Dispatch::PreventDefault);
    assert!(page.document().is_disabled(button));
    assert_eq!(page.document().text_content(button), "Sending...");

    site.tick(&mut page, Duration::from_millis(1000));
    assert!(!page.document().has_class(form, "hidden"));

    site.tick(&mut page, Duration::from_millis(1500));
    let doc = page.document();
    assert!(doc.has_class(form, "hidden"));
    assert!(!doc.has_class(success, "hidden"));
    assert!(!doc.is_disabled(button));
    assert_eq!(doc.text_content(button), "Send Message");

    // Controls are back to their markup defaults
    assert_eq!(doc.value(field(&page, "name")?), Some(""));
    assert_eq!(doc.value(field(&page, "company")?), Some("Acme"));
    assert_eq!(doc.value(field(&page, "inquiry-type")?), Some(""));
    Ok(())
}

#[test]
fn test_failed_submission_shows_banner_once() -> Result<()> {
    let mut page = contact_page()?;
    let mut site = Site::init(&mut page, &SiteConfig::default(), Box::new(FailingSubmitter))?;
    let form = field(&page, "contact-form")?;
    fill_valid(&mut page)?;

    site.dispatch(&mut page, &Event::submit(form));
    site.tick(&mut page, Duration::from_millis(16));
    site.dispatch(&mut page, &Event::submit(form));
    site.tick(&mut page, Duration::from_millis(32));

    let doc = page.document();
    let banners = doc.query_selector_all(".form-error-global")?;
    assert_eq!(banners.len(), 1);
    assert_eq!(doc.tree().first_child(form), Some(banners[0]));
    assert_eq!(doc.text_content(banners[0]), "Something went wrong. Please try again.");
    assert!(doc
        .style(banners[0])
        .and_then(|s| s.get_property_value("text-align"))
        .is_some_and(|v| v == "center"));

    assert!(!doc.has_class(form, "hidden"));
    let button = doc.query_selector("button")?.context("no button")?;
    assert!(!doc.is_disabled(button));
    Ok(())
}

#[test]
fn test_empty_submit_reports_required_fields() -> Result<()> {
    let mut page = contact_page()?;
    let mut site = Site::with_simulated_submission(&mut page, &SiteConfig::default())?;
    let form = field(&page, "contact-form")?;

    site.dispatch(&mut page, &Event::submit(form));

    assert_eq!(field_message(&page, "name")?.as_deref(), Some("Name is required"));
    assert_eq!(field_message(&page, "email")?.as_deref(), Some("Email is required"));
    assert_eq!(
        field_message(&page, "inquiry-type")?.as_deref(),
        Some("Inquiry Type is required")
    );
    assert_eq!(field_message(&page, "message")?.as_deref(), Some("Message is required"));
    assert_eq!(field_message(&page, "company")?, None);
    assert_eq!(field_message(&page, "phone")?, None);

    let company = field(&page, "company")?;
    assert!(page.document().has_class(company, "success"));
    assert_eq!(page.focused(), Some(field(&page, "name")?));
    assert_eq!(page.clock().pending_sleepers(), 0);
    Ok(())
}

#[test]
fn test_email_and_message_rules_on_blur() -> Result<()> {
    let mut page = contact_page()?;
    let mut site = Site::with_simulated_submission(&mut page, &SiteConfig::default())?;

    fill(&mut page, &[("email", "a@b")])?;
    blur(&mut site, &mut page, "email")?;
    assert_eq!(
        field_message(&page, "email")?.as_deref(),
        Some("Please enter a valid email address")
    );

    fill(&mut page, &[("email", "a@b.com")])?;
    blur(&mut site, &mut page, "email")?;
    assert_eq!(field_message(&page, "email")?, None);
    assert!(page.document().has_class(field(&page, "email")?, "success"));

    fill(&mut page, &[("message", "123456789")])?;
    blur(&mut site, &mut page, "message")?;
    assert_eq!(
        field_message(&page, "message")?.as_deref(),
        Some("Message must be at least 10 characters")
    );

    fill(&mut page, &[("message", "1234567890")])?;
    blur(&mut site, &mut page, "message")?;
    assert_eq!(field_message(&page, "message")?, None);

    fill(&mut page, &[("phone", "call me")])?;
    blur(&mut site, &mut page, "phone")?;
    assert_eq!(
        field_message(&page, "phone")?.as_deref(),
        Some("Please enter a valid phone number")
    );

    // Typing clears the message and both state classes
    let phone = field(&page, "phone")?;
    site.dispatch(&mut page, &Event::input(phone));
    assert_eq!(field_message(&page, "phone")?, None);
    assert!(!page.document().has_class(phone, "error"));
    assert!(!page.document().has_class(phone, "success"));
    Ok(())
}
