//! Application layer orchestrating payment submission.
//!
//! `PaymentSubmitter` applies the readiness check to each payment before it
//! reaches a `PaymentGateway`.

pub mod submitter;
