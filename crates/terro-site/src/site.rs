//! Site orchestrator
//!
//! Binds every behavior against a loaded page, routes host events to them
//! and drives the per-frame work.

use std::time::Duration;

use terro_runtime::{Dispatch, Event, Page};

use crate::animation::Animations;
use crate::behavior::{Behavior, Binding};
use crate::config::SiteConfig;
use crate::forms::{ContactForm, SimulatedSubmitter, Submitter};
use crate::navigation::Navigation;
use crate::widgets::{Accordions, UseCaseCards};
use crate::SiteResult;

/// The bound behaviors of one page, in bind order
pub struct Site {
    behaviors: Vec<Box<dyn Behavior>>,
}

impl std::fmt::Debug for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Site")
            .field("behaviors", &self.behavior_names())
            .finish()
    }
}

impl Site {
    /// Bind navigation, animations, the contact form, accordions and
    /// use-case cards, skipping whatever the page has no markup for
    pub fn init(
        page: &mut Page,
        config: &SiteConfig,
        submitter: Box<dyn Submitter>,
    ) -> SiteResult<Self> {
        let mut site = Self { behaviors: Vec::new() };

        site.push(Navigation::bind(page, config)?);
        site.push(Animations::bind(page, config)?);
        site.push(ContactForm::bind(page, &config.form, submitter)?);
        site.push(Accordions::bind(page)?);
        site.push(UseCaseCards::bind(page)?);

        tracing::info!(behaviors = ?site.behavior_names(), "Terro AI website initialized");
        Ok(site)
    }

    /// Bind with submissions simulated on the page clock
    pub fn with_simulated_submission(page: &mut Page, config: &SiteConfig) -> SiteResult<Self> {
        let submitter = SimulatedSubmitter::new(page.clock().clone(), config.form.submit_delay());
        Self::init(page, config, Box::new(submitter))
    }

    fn push<B: Behavior + 'static>(&mut self, binding: Binding<B>) {
        match binding {
            Binding::Bound(behavior) => {
                tracing::debug!(behavior = behavior.name(), "bound");
                self.behaviors.push(Box::new(behavior));
            }
            Binding::Skipped(reason) => tracing::debug!(reason, "behavior skipped"),
        }
    }

    pub fn behavior_names(&self) -> Vec<&'static str> {
        self.behaviors.iter().map(|b| b.name()).collect()
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.behaviors.iter().any(|b| b.name() == name)
    }

    /// Deliver an event to every behavior; any of them may prevent the default
    pub fn dispatch(&mut self, page: &mut Page, event: &Event) -> Dispatch {
        self.behaviors
            .iter_mut()
            .fold(Dispatch::Continue, |acc, b| acc.merge(b.handle_event(page, event)))
    }

    /// Host scrolled the window
    pub fn scroll(&mut self, page: &mut Page, y: f64) -> Dispatch {
        page.set_scroll_y(y);
        self.dispatch(page, &Event::scroll())
    }

    /// Run one frame at time `now`
    pub fn tick(&mut self, page: &mut Page, now: Duration) {
        page.advance_to(now);
        if page.step_scroll() {
            self.dispatch(page, &Event::scroll());
        }
        for behavior in &mut self.behaviors {
            behavior.on_frame(page);
        }
    }
}
