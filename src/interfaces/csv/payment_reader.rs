use crate::domain::payment::{Payment, PaymentRequest};
use crate::error::{PaymentError, Result};
use std::io::Read;

/// Reads payment requests from a CSV source.
///
/// Expected header: `value, key, type, max_date`. Whitespace is trimmed and
/// an empty cell leaves the corresponding field unset.
pub struct PaymentReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> PaymentReader<R> {
    /// Creates a new `PaymentReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates payments.
    ///
    /// A row that cannot be decoded or fails validation yields an `Err` and
    /// the following rows are still read.
    pub fn payments(self) -> impl Iterator<Item = Result<Payment>> {
        self.reader
            .into_deserialize::<PaymentRequest>()
            .map(|result| result.map_err(PaymentError::from).and_then(Payment::try_from))
    }
}
