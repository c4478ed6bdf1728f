//! Typed intents the widget sends up to its host.
//!
//! An intent is a request, not a command: the host decides whether to act on
//! it and answers by assigning data back down to the widget.
use serde::{Deserialize, Serialize};

use crate::model::ItemId;

/// Guest-initiated request emitted by the widget.
///
/// Serializes as `{"type": "<name>", ...payload}`, e.g.
/// `{"type":"place-order","itemIds":[1,2]}`.
#[derive(
    Clone, Debug, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::IntoStaticStr,
)]
#[serde(tag = "type", rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TableIntent {
    RequestMenu,
    PlaceOrder {
        /// Selected ids in the order they were ticked.
        #[serde(rename = "itemIds")]
        item_ids: Vec<ItemId>,
    },
    RequestBill,
    PayBill,
}

impl TableIntent {
    /// Wire name of the intent (`request-menu`, `place-order`, ...).
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Payload of a place-order intent; `None` for intents without one.
    pub fn item_ids(&self) -> Option<&[ItemId]> {
        match self {
            Self::PlaceOrder { item_ids } => Some(item_ids),
            _ => None,
        }
    }
}

/// Receiver of widget intents, implemented by hosts.
pub trait IntentSink {
    fn emit(&mut self, intent: TableIntent);
}

impl<F> IntentSink for F
where
    F: FnMut(TableIntent),
{
    fn emit(&mut self, intent: TableIntent) {
        self(intent)
    }
}

/// Recording sink, handy for hosts that drain intents in batches.
impl IntentSink for Vec<TableIntent> {
    fn emit(&mut self, intent: TableIntent) {
        self.push(intent);
    }
}
