//! Domain layer: the payment request and the value types it is built from.

pub mod amount;
pub mod customer_info;
pub mod max_date;
pub mod payment;
pub mod payment_type;
pub mod ports;
