//! Restaurant table ordering widget.
//!
//! Houses the widget that walks a table through its ordering lifecycle
//! (browse menu, select items, place order, request bill, pay) together with
//! the data model, typed intents and declarative view tree that terminal and
//! future graphical hosts render.
//!
//! # Architecture
//!
//! The widget talks to its host across two one-way channels:
//! - **Downward data**: the host assigns menu, order status and bill
//! - **Upward intents**: the widget emits [`TableIntent`]s through an [`IntentSink`]
//!
//! The widget never decides on its own that an order was placed or a bill is
//! ready. Its display state is inferred from whichever data fields are present.
pub mod config;
pub mod error;
pub mod format;
pub mod impact;
pub mod intent;
pub mod model;
pub mod selection;
pub mod state;
pub mod view;
pub mod widget;

pub use config::WidgetConfig;
pub use error::WidgetError;
pub use impact::RenderImpact;
pub use intent::{IntentSink, TableIntent};
pub use model::{Bill, BillLine, ItemId, Menu, MenuItem, OrderStatus};
pub use selection::SelectionSet;
pub use state::{TableState, can_place_order};
pub use view::{ActionButton, BillView, ChecklistRow, Control, TableView, Tone, ViewBody};
pub use widget::TableWidget;
