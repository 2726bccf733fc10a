use super::payment::Payment;
use crate::error::Result;
use async_trait::async_trait;

/// Hands a ready payment over to whatever talks to the provider.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn submit(&self, payment: Payment) -> Result<()>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
