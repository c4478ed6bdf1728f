//! The table widget: host data in, intents out, view re-rendered on change.
use crate::config::WidgetConfig;
use crate::error::WidgetError;
use crate::impact::RenderImpact;
use crate::intent::{IntentSink, TableIntent};
use crate::model::{Bill, ItemId, Menu, OrderStatus};
use crate::selection::SelectionSet;
use crate::state::{TableState, can_place_order};
use crate::view::{Control, TableView, ViewInput};

/// A restaurant table's ordering widget.
///
/// Owns the three host-assigned fields and the guest's selection. Every
/// mutation runs to completion and re-renders once before returning; the
/// returned [`RenderImpact`] tells the host whether the visible tree changed.
///
/// Intents go to the sink `S`, which the host supplies.
pub struct TableWidget<S> {
    menu: Option<Menu>,
    order_status: Option<OrderStatus>,
    bill: Option<Bill>,
    selection: SelectionSet,
    config: WidgetConfig,
    view: TableView,
    sink: S,
}

impl<S: IntentSink> TableWidget<S> {
    pub fn new(sink: S) -> Self {
        Self::with_config(WidgetConfig::default(), sink)
    }

    pub fn with_config(config: WidgetConfig, sink: S) -> Self {
        let selection = SelectionSet::new();
        let view = TableView::render(
            ViewInput {
                menu: None,
                order_status: None,
                bill: None,
                selection: &selection,
            },
            &config,
        );

        Self {
            menu: None,
            order_status: None,
            bill: None,
            selection,
            config,
            view,
            sink,
        }
    }

    pub fn menu(&self) -> Option<&Menu> {
        self.menu.as_ref()
    }

    pub fn order_status(&self) -> Option<&OrderStatus> {
        self.order_status.as_ref()
    }

    pub fn bill(&self) -> Option<&Bill> {
        self.bill.as_ref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    /// The tree produced by the most recent render.
    pub fn view(&self) -> &TableView {
        &self.view
    }

    pub fn state(&self) -> TableState {
        TableState::infer(
            self.menu.as_ref(),
            self.order_status.as_ref(),
            self.bill.as_ref(),
        )
    }

    pub fn can_place_order(&self) -> bool {
        can_place_order(
            self.menu.as_ref(),
            &self.selection,
            self.order_status.as_ref(),
        )
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Replaces the menu. The selection is left untouched.
    pub fn set_menu(&mut self, menu: Option<Menu>) -> RenderImpact {
        tracing::debug!(items = menu.as_ref().map(Menu::len), "menu assigned");
        self.menu = menu;
        self.render()
    }

    /// Replaces the order status.
    ///
    /// Clearing the status also drops any bill.
    pub fn set_order_status(&mut self, status: Option<OrderStatus>) -> RenderImpact {
        match &status {
            Some(status) => tracing::debug!(status = status.label(), "order status assigned"),
            None => {
                if self.bill.take().is_some() {
                    tracing::debug!("order status cleared, dropping bill");
                } else {
                    tracing::debug!("order status cleared");
                }
            }
        }
        self.order_status = status;
        self.render()
    }

    /// Replaces the bill.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::BillWithoutOrder`] when assigning a bill while
    /// no order status is present. The widget is left unchanged.
    pub fn set_bill(&mut self, bill: Option<Bill>) -> Result<RenderImpact, WidgetError> {
        if bill.is_some() && self.order_status.is_none() {
            tracing::warn!("rejecting bill: no order has been placed");
            return Err(WidgetError::BillWithoutOrder);
        }
        tracing::debug!(
            lines = bill.as_ref().map(|bill| bill.items.len()),
            "bill assigned"
        );
        self.bill = bill;
        Ok(self.render())
    }

    /// Flips `id` in the selection unless an order is active.
    ///
    /// Ids that are not on the menu are accepted; they never render as rows
    /// but do travel in the place-order payload.
    pub fn toggle_selection(&mut self, id: ItemId) -> RenderImpact {
        if self.order_status.is_some() {
            tracing::debug!(%id, "selection locked, ignoring toggle");
            return RenderImpact::none();
        }
        if !self.menu.as_ref().is_some_and(|menu| menu.contains(id)) {
            tracing::debug!(%id, "toggling id that is not on the menu");
        }
        let selected = self.selection.toggle(id);
        tracing::debug!(%id, selected, "selection toggled");
        self.render()
    }

    pub fn emit_request_menu(&mut self) {
        self.emit(TableIntent::RequestMenu);
    }

    /// Emits place-order with the current selection, regardless of state.
    ///
    /// The disabled button only guards activation through the view; hosts
    /// must validate the payload themselves.
    pub fn emit_place_order(&mut self) {
        self.emit(TableIntent::PlaceOrder {
            item_ids: self.selection.to_vec(),
        });
    }

    pub fn emit_request_bill(&mut self) {
        self.emit(TableIntent::RequestBill);
    }

    pub fn emit_pay_bill(&mut self) {
        self.emit(TableIntent::PayBill);
    }

    /// Clears menu, order status, bill and selection.
    pub fn reset(&mut self) -> RenderImpact {
        tracing::debug!("table reset");
        self.menu = None;
        self.order_status = None;
        self.bill = None;
        self.selection.clear();
        self.render()
    }

    /// Activates a control through the current view.
    ///
    /// Returns `None` when the control is absent from the view or disabled.
    /// Intent-emitting controls never change the view and report no redraw.
    pub fn activate(&mut self, control: Control) -> Option<RenderImpact> {
        if !self.view.is_enabled(control) {
            tracing::debug!(?control, "ignoring inactive control");
            return None;
        }

        let impact = match control {
            Control::ToggleItem(id) => self.toggle_selection(id),
            Control::RequestMenu => {
                self.emit_request_menu();
                RenderImpact::none()
            }
            Control::PlaceOrder => {
                self.emit_place_order();
                RenderImpact::none()
            }
            Control::RequestBill => {
                self.emit_request_bill();
                RenderImpact::none()
            }
            Control::PayBill => {
                self.emit_pay_bill();
                RenderImpact::none()
            }
        };
        Some(impact)
    }

    /// Re-renders the view, reporting whether the visible tree changed.
    pub fn render(&mut self) -> RenderImpact {
        let next = TableView::render(
            ViewInput {
                menu: self.menu.as_ref(),
                order_status: self.order_status.as_ref(),
                bill: self.bill.as_ref(),
                selection: &self.selection,
            },
            &self.config,
        );

        if next == self.view {
            return RenderImpact::none();
        }

        if next.state != self.view.state {
            tracing::info!(from = %self.view.state, to = %next.state, "table state changed");
        }
        self.view = next;
        RenderImpact::redraw()
    }

    fn emit(&mut self, intent: TableIntent) {
        tracing::info!(intent = intent.name(), "emitting intent");
        self.sink.emit(intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BillLine, MenuItem};
    use rust_decimal::Decimal;

    fn menu() -> Menu {
        Menu::new(vec![
            MenuItem::new(ItemId(1), "Soup", Decimal::from(5)),
            MenuItem::new(ItemId(2), "Bread", Decimal::from(2)),
        ])
        .unwrap()
    }

    fn bill() -> Bill {
        Bill::new(
            vec![BillLine::new("Soup", Decimal::from(5))],
            Decimal::from(5),
        )
    }

    fn widget() -> TableWidget<Vec<TableIntent>> {
        TableWidget::new(Vec::new())
    }

    #[test]
    fn starts_empty_in_no_menu() {
        let widget = widget();
        assert_eq!(widget.state(), TableState::NoMenu);
        assert!(widget.menu().is_none());
        assert!(widget.order_status().is_none());
        assert!(widget.bill().is_none());
        assert!(widget.selection().is_empty());
    }

    #[test]
    fn set_menu_keeps_selection() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));
        widget.toggle_selection(ItemId(1));

        let impact = widget.set_menu(Some(menu()));
        assert!(!impact.requires_redraw);
        assert!(widget.selection().contains(ItemId(1)));
    }

    #[test]
    fn toggle_is_noop_once_order_exists() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));
        widget.toggle_selection(ItemId(1));
        widget.set_order_status(Some(OrderStatus::confirmed()));

        let before = widget.selection().clone();
        for id in [ItemId(1), ItemId(2), ItemId(99)] {
            assert!(!widget.toggle_selection(id).requires_redraw);
        }
        assert_eq!(widget.selection(), &before);
    }

    #[test]
    fn unknown_ids_are_accepted() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));
        let impact = widget.toggle_selection(ItemId(42));

        assert!(widget.selection().contains(ItemId(42)));
        assert!(impact.requires_redraw, "item count label changes");
        assert_eq!(
            widget.view().primary_action().unwrap().label,
            "Place Order (1 items)"
        );
    }

    #[test]
    fn bill_requires_order() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));

        assert_eq!(
            widget.set_bill(Some(bill())),
            Err(WidgetError::BillWithoutOrder)
        );
        assert!(widget.bill().is_none());
        assert_eq!(widget.state(), TableState::Selecting);

        assert!(widget.set_bill(None).is_ok());
    }

    #[test]
    fn clearing_order_drops_bill() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));
        widget.set_order_status(Some(OrderStatus::confirmed()));
        widget.set_bill(Some(bill())).unwrap();
        assert_eq!(widget.state(), TableState::BillReady);

        widget.set_order_status(None);
        assert!(widget.bill().is_none());
        assert_eq!(widget.state(), TableState::Selecting);
    }

    #[test]
    fn direct_emission_bypasses_the_ui_guard() {
        let mut widget = widget();
        assert!(!widget.can_place_order());

        widget.emit_place_order();
        assert_eq!(
            widget.sink().as_slice(),
            [TableIntent::PlaceOrder { item_ids: vec![] }]
        );
    }

    #[test]
    fn activate_respects_disabled_controls() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));

        assert_eq!(widget.activate(Control::PlaceOrder), None);
        assert_eq!(widget.activate(Control::PayBill), None);
        assert!(widget.sink().is_empty());

        let impact = widget.activate(Control::ToggleItem(ItemId(2)));
        assert_eq!(impact, Some(RenderImpact::redraw()));

        assert_eq!(widget.activate(Control::PlaceOrder), Some(RenderImpact::none()));
        assert_eq!(
            widget.sink().as_slice(),
            [TableIntent::PlaceOrder {
                item_ids: vec![ItemId(2)]
            }]
        );
    }

    #[test]
    fn unchanged_render_needs_no_redraw() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));
        let view = widget.view().clone();
        assert!(!widget.render().requires_redraw);
        assert_eq!(widget.view(), &view);
    }

    #[test]
    fn reset_clears_everything() {
        let mut widget = widget();
        widget.set_menu(Some(menu()));
        widget.toggle_selection(ItemId(1));
        widget.set_order_status(Some(OrderStatus::confirmed()));
        widget.set_bill(Some(bill())).unwrap();

        assert!(widget.reset().requires_redraw);
        assert_eq!(widget.state(), TableState::NoMenu);
        assert!(widget.selection().is_empty());
        assert_eq!(widget.view(), TableWidget::new(Vec::<TableIntent>::new()).view());
    }
}
