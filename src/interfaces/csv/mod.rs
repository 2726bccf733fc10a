pub mod payment_reader;
