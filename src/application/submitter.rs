use crate::domain::payment::Payment;
use crate::domain::ports::PaymentGatewayBox;
use crate::error::{PaymentError, Result};
use tracing::{debug, warn};

/// Gatekeeper in front of a payment gateway.
///
/// Payments that fail [`Payment::is_valid`] are refused before the gateway
/// sees them.
pub struct PaymentSubmitter {
    gateway: PaymentGatewayBox,
}

impl PaymentSubmitter {
    /// Creates a new `PaymentSubmitter` delivering to `gateway`.
    pub fn new(gateway: PaymentGatewayBox) -> Self {
        Self { gateway }
    }

    /// Submits a payment, or returns `PaymentError::NotReady` if it has no value yet.
    pub async fn submit(&self, payment: Payment) -> Result<()> {
        if !payment.is_valid() {
            warn!(key = payment.key().unwrap_or_default(), "payment refused: no value set");
            return Err(PaymentError::NotReady(
                "a payment needs a value before it can be submitted".to_string(),
            ));
        }

        debug!(
            key = payment.key().unwrap_or_default(),
            payment_type = %payment.payment_type(),
            "submitting payment"
        );
        self.gateway.submit(payment).await
    }
}
