//! Form submission capability

use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use serde::Serialize;
use smol::future::{BoxedLocal, FutureExt};
use terro_runtime::ManualClock;

/// Field values keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub fields: BTreeMap<String, String>,
}

impl Submission {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// JSON request body
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.fields)
    }
}

/// Acknowledgement from the receiving end
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ack;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),

    #[error("submission endpoint unavailable")]
    Unavailable,
}

/// Something that accepts contact-form submissions
pub trait Submitter {
    fn submit(&self, submission: Submission) -> BoxedLocal<Result<Ack, SubmitError>>;
}

/// Waits on the page clock and accepts everything
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    clock: Rc<ManualClock>,
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(clock: Rc<ManualClock>, delay: Duration) -> Self {
        Self { clock, delay }
    }
}

impl Submitter for SimulatedSubmitter {
    fn submit(&self, submission: Submission) -> BoxedLocal<Result<Ack, SubmitError>> {
        // The timer starts now, not on first poll
        let sleep = self.clock.sleep(self.delay);
        async move {
            sleep.await;
            tracing::debug!(fields = submission.fields.len(), "simulated submission accepted");
            Ok(Ack)
        }
        .boxed_local()
    }
}
