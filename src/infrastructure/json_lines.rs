use crate::domain::payment::Payment;
use crate::domain::ports::PaymentGateway;
use crate::error::Result;
use async_trait::async_trait;
use std::io::Write;
use tokio::sync::Mutex;

/// Dry-run gateway: writes each payment's request body as one line of JSON.
///
/// Nothing is sent over the network. Useful for checking what would be
/// submitted, and as the output stage of the command-line tool.
pub struct JsonLinesGateway<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesGateway<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

#[async_trait]
impl<W: Write + Send> PaymentGateway for JsonLinesGateway<W> {
    async fn submit(&self, payment: Payment) -> Result<()> {
        let mut writer = self.writer.lock().await;
        serde_json::to_writer(&mut *writer, &payment)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}
