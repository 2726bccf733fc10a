use crate::domain::payment::Payment;
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe gateway that keeps every submitted payment in memory.
///
/// Clones share the same record, so a clone can be handed to a
/// `PaymentSubmitter` while the original is used to inspect what was sent.
#[derive(Default, Clone)]
pub struct InMemoryGateway {
    submitted: Arc<RwLock<Vec<Payment>>>,
}

impl InMemoryGateway {
    /// Creates a new gateway with no submissions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the submitted payments in submission order.
    pub async fn submitted(&self) -> Vec<Payment> {
        self.submitted.read().await.clone()
    }
}

#[async_trait]
impl PaymentGateway for InMemoryGateway {
    async fn submit(&self, payment: Payment) -> Result<()> {
        let mut submitted = self.submitted.write().await;
        submitted.push(payment);
        Ok(())
    }
}
