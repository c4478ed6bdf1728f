//! Intent sink forwarding widget intents to the event loop.
use table_widget_core::{IntentSink, TableIntent};
use tokio::sync::mpsc;

/// Sends each intent over an unbounded channel drained by the event loop.
pub struct ChannelSink {
    tx_intent: mpsc::UnboundedSender<TableIntent>,
}

impl ChannelSink {
    pub fn new(tx_intent: mpsc::UnboundedSender<TableIntent>) -> Self {
        Self { tx_intent }
    }
}

impl IntentSink for ChannelSink {
    fn emit(&mut self, intent: TableIntent) {
        if self.tx_intent.send(intent).is_err() {
            tracing::error!("Intent channel closed");
        }
    }
}
