//! Contact form delivery.
//!
//! There is no backend yet: `SimulatedSubmitter` waits a fixed interval
//! and reports success.

use async_trait::async_trait;
use tracing::info;

use crate::contact::ContactFields;
use crate::error::SubmitError;

/// Source of the simulated network delay.
#[async_trait(?Send)]
pub trait Delay {
    async fn wait(&self, ms: u32);
}

#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError>;
}

pub struct SimulatedSubmitter<D> {
    delay: D,
    delay_ms: u32,
}

impl<D> SimulatedSubmitter<D>
where
    D: Delay,
{
    pub fn new(delay: D, delay_ms: u32) -> Self {
        Self { delay, delay_ms }
    }
}

#[async_trait(?Send)]
impl<D> Submitter for SimulatedSubmitter<D>
where
    D: Delay,
{
    async fn submit(&self, fields: &ContactFields) -> Result<(), SubmitError> {
        self.delay.wait(self.delay_ms).await;
        let payload = serde_json::to_string(fields).map_err(|e| SubmitError::new(e.to_string()))?;
        info!(%payload, "contact form submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingDelay {
        waits: Rc<RefCell<Vec<u32>>>,
    }

    #[async_trait(?Send)]
    impl Delay for RecordingDelay {
        async fn wait(&self, ms: u32) {
            self.waits.borrow_mut().push(ms);
        }
    }

    #[tokio::test]
    async fn simulated_submit_waits_then_succeeds() {
        let delay = RecordingDelay::default();
        let submitter = SimulatedSubmitter::new(delay.clone(), 1_000);
        let fields = ContactFields {
            name: "Pablo".into(),
            email: "pablo@ejemplo.com".into(),
            ..ContactFields::default()
        };

        assert_eq!(submitter.submit(&fields).await, Ok(()));
        assert_eq!(submitter.submit(&fields).await, Ok(()));
        assert_eq!(*delay.waits.borrow(), vec![1_000, 1_000]);
    }
}
