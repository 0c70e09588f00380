//! Counting animation for `[data-count]` statistics

use std::time::Duration;

use terro_dom::{Document, NodeId};
use terro_runtime::{IntersectionObserver, IntersectionObserverOptions, Page};

use super::{format_number, parse_float, parse_int, to_fixed};
use crate::behavior::Binding;
use crate::config::CounterConfig;
use crate::SiteResult;

const SELECTOR: &str = "[data-count]";
const MAX_DECIMALS: usize = 100;

/// What a counter counts to and how it is printed
#[derive(Debug, Clone, PartialEq)]
pub struct CounterSpec {
    pub target: f64,
    pub prefix: String,
    pub suffix: String,
    pub duration: Duration,
    pub decimals: usize,
}

impl CounterSpec {
    /// Read the `data-*` attributes of a counter element
    pub fn from_element(doc: &Document, el: NodeId, default_duration: Duration) -> Self {
        let attr = |name: &str| doc.get_attribute(el, name).unwrap_or_default();

        let target = parse_float(attr("data-count"))
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0);
        let duration = match parse_int(attr("data-duration")) {
            Some(ms) if ms > 0 => Duration::from_millis(ms.unsigned_abs()),
            _ => default_duration,
        };
        let decimals = match parse_int(attr("data-decimals")) {
            Some(d) if d > 0 => (d.unsigned_abs() as usize).min(MAX_DECIMALS),
            _ => 0,
        };

        Self {
            target,
            prefix: attr("data-prefix").to_string(),
            suffix: attr("data-suffix").to_string(),
            duration,
            decimals,
        }
    }

    /// Text shown for an intermediate value
    pub fn format(&self, value: f64) -> String {
        let number = if self.decimals > 0 {
            to_fixed(value, self.decimals)
        } else {
            format_number(value.floor())
        };
        format!("{}{}{}", self.prefix, number, self.suffix)
    }
}

/// One running count-up
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    element: NodeId,
    spec: CounterSpec,
    start: Duration,
}

impl CounterAnimation {
    pub fn new(element: NodeId, spec: CounterSpec, start: Duration) -> Self {
        Self {
            element,
            spec,
            start,
        }
    }

    pub fn element(&self) -> NodeId {
        self.element
    }

    pub fn spec(&self) -> &CounterSpec {
        &self.spec
    }

    /// Linear progress in `0.0..=1.0`
    pub fn progress(&self, now: Duration) -> f64 {
        let elapsed = now.saturating_sub(self.start).as_secs_f64();
        (elapsed / self.spec.duration.as_secs_f64()).min(1.0)
    }

    /// Cubic ease-out of the target
    pub fn value_at(&self, now: Duration) -> f64 {
        let progress = self.progress(now);
        let eased = 1.0 - (1.0 - progress).powi(3);
        self.spec.target * eased
    }

    pub fn text_at(&self, now: Duration) -> String {
        self.spec.format(self.value_at(now))
    }

    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }
}

/// Counters waiting to scroll into view plus the ones already counting
#[derive(Debug)]
pub struct Counters {
    observer: IntersectionObserver,
    running: Vec<CounterAnimation>,
    default_duration: Duration,
}

impl Counters {
    pub fn bind(page: &mut Page, config: &CounterConfig) -> SiteResult<Binding<Self>> {
        let targets = page.document().query_selector_all(SELECTOR)?;
        if targets.is_empty() {
            return Ok(Binding::Skipped("no [data-count] elements"));
        }

        let options = IntersectionObserverOptions::new("0px", &[config.threshold])?;
        let mut observer = IntersectionObserver::new(options);
        for el in targets {
            observer.observe(el);
        }

        Ok(Binding::Bound(Self {
            observer,
            running: Vec::new(),
            default_duration: config.default_duration(),
        }))
    }

    pub fn running(&self) -> &[CounterAnimation] {
        &self.running
    }

    /// Counters not yet started
    pub fn waiting(&self) -> usize {
        self.observer.len()
    }

    /// Paint running counters, then start the ones that just became visible.
    /// A new counter shows its first value on the following frame.
    pub fn on_frame(&mut self, page: &mut Page) {
        let now = page.now();

        self.running.retain(|animation| {
            let text = animation.text_at(now);
            page.document_mut().set_text_content(animation.element, &text);
            !animation.is_finished(now)
        });

        for entry in self.observer.check(page) {
            if !entry.is_intersecting {
                continue;
            }
            let spec = CounterSpec::from_element(page.document(), entry.target, self.default_duration);
            tracing::debug!(node = ?entry.target, count = spec.target, "counter started");
            self.running.push(CounterAnimation::new(entry.target, spec, now));
            self.observer.unobserve(entry.target);
        }
    }
}
