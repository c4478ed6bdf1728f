//! Errors raised when host data breaks a widget invariant.
//!
//! The widget trusts well-typed host data. The only rejections are the ones
//! that would leave it holding state it cannot render consistently.
use crate::model::ItemId;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum WidgetError {
    /// Two menu items share an id, so selection by id would be ambiguous.
    #[error("menu item id {0} appears more than once")]
    DuplicateItemId(ItemId),

    /// A bill was assigned while no order status is present.
    #[error("bill assigned before an order was placed")]
    BillWithoutOrder,
}
