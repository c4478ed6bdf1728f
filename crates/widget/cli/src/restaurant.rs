//! Demo restaurant acting as the widget's host application.
//!
//! The restaurant owns the business state the widget deliberately lacks: the
//! menu it serves, the order it accepted and the bill it issued. It answers
//! each [`TableIntent`] by validating it and assigning data back down.
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use table_widget_core::{
    Bill, BillLine, IntentSink, ItemId, Menu, MenuItem, OrderStatus, RenderImpact, TableIntent,
    TableWidget, WidgetError, format::format_amount,
};

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("failed to read menu file {path}: {source}")]
    ReadMenu {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid menu file {path}: {source}")]
    ParseMenu {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("order has no items")]
    EmptyOrder,

    #[error("item {0} is not on the menu")]
    UnknownItem(ItemId),

    #[error("order #{0} is already open")]
    OrderAlreadyOpen(u32),

    #[error("no order to bill")]
    NothingToBill,

    #[error("no bill has been issued")]
    NothingToPay,

    #[error("bill total for order #{0} is out of range")]
    TotalOverflow(u32),

    #[error(transparent)]
    Widget(#[from] WidgetError),
}

/// What the restaurant did in response to an intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostReply {
    pub message: String,
    pub impact: RenderImpact,
}

impl HostReply {
    fn new(message: impl Into<String>, impact: RenderImpact) -> Self {
        Self {
            message: message.into(),
            impact,
        }
    }
}

#[derive(Clone, Debug)]
struct OpenOrder {
    number: u32,
    items: Vec<ItemId>,
    billed: bool,
}

/// In-process restaurant serving a single table.
#[derive(Clone, Debug)]
pub struct DemoRestaurant {
    menu: Menu,
    open_order: Option<OpenOrder>,
    orders_taken: u32,
}

impl DemoRestaurant {
    pub fn new(menu: Menu) -> Self {
        Self {
            menu,
            open_order: None,
            orders_taken: 0,
        }
    }

    pub fn with_default_menu() -> Self {
        Self::new(default_menu())
    }

    /// Loads the menu from a JSON array of `{id, name, price}` objects.
    pub fn from_menu_file(path: &Path) -> Result<Self, HostError> {
        let raw = std::fs::read_to_string(path).map_err(|source| HostError::ReadMenu {
            path: path.to_path_buf(),
            source,
        })?;
        let menu: Menu = serde_json::from_str(&raw).map_err(|source| HostError::ParseMenu {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!("Loaded {} menu items from {}", menu.len(), path.display());
        Ok(Self::new(menu))
    }

    /// Uses the menu file when given, the built-in menu otherwise.
    pub fn load(menu_path: Option<&Path>) -> Result<Self, HostError> {
        match menu_path {
            Some(path) => Self::from_menu_file(path),
            None => Ok(Self::with_default_menu()),
        }
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    pub fn has_open_order(&self) -> bool {
        self.open_order.is_some()
    }

    /// Forgets the open order, e.g. when the table is reset locally.
    pub fn abandon_order(&mut self) {
        if let Some(order) = self.open_order.take() {
            tracing::info!("Order #{} abandoned", order.number);
        }
    }

    /// Answers one intent by assigning data to `widget`.
    ///
    /// # Errors
    ///
    /// Rejected intents leave both the restaurant and the widget unchanged.
    pub fn handle<S: IntentSink>(
        &mut self,
        intent: &TableIntent,
        widget: &mut TableWidget<S>,
    ) -> Result<HostReply, HostError> {
        match intent {
            TableIntent::RequestMenu => self.serve_menu(widget),
            TableIntent::PlaceOrder { item_ids } => self.take_order(item_ids, widget),
            TableIntent::RequestBill => self.issue_bill(widget),
            TableIntent::PayBill => self.settle(widget),
        }
    }

    fn serve_menu<S: IntentSink>(
        &mut self,
        widget: &mut TableWidget<S>,
    ) -> Result<HostReply, HostError> {
        let impact = widget.set_menu(Some(self.menu.clone()));
        Ok(HostReply::new(
            format!("Menu served ({} items)", self.menu.len()),
            impact,
        ))
    }

    fn take_order<S: IntentSink>(
        &mut self,
        item_ids: &[ItemId],
        widget: &mut TableWidget<S>,
    ) -> Result<HostReply, HostError> {
        if let Some(order) = &self.open_order {
            return Err(HostError::OrderAlreadyOpen(order.number));
        }
        if item_ids.is_empty() {
            return Err(HostError::EmptyOrder);
        }
        if let Some(unknown) = item_ids.iter().find(|id| !self.menu.contains(**id)) {
            return Err(HostError::UnknownItem(*unknown));
        }

        self.orders_taken += 1;
        let number = self.orders_taken;
        let names = item_ids
            .iter()
            .filter_map(|id| self.menu.get(*id))
            .map(|item| item.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        self.open_order = Some(OpenOrder {
            number,
            items: item_ids.to_vec(),
            billed: false,
        });
        let impact = widget.set_order_status(Some(OrderStatus::new(format!("order-{number}"))));
        tracing::info!("Order #{} confirmed: {}", number, names);

        Ok(HostReply::new(
            format!("Order #{number} confirmed: {names}"),
            impact,
        ))
    }

    fn issue_bill<S: IntentSink>(
        &mut self,
        widget: &mut TableWidget<S>,
    ) -> Result<HostReply, HostError> {
        let Some(order) = &mut self.open_order else {
            return Err(HostError::NothingToBill);
        };

        let lines: Vec<BillLine> = order
            .items
            .iter()
            .filter_map(|id| self.menu.get(*id))
            .map(|item| BillLine::new(item.name.clone(), item.price))
            .collect();
        let total = lines
            .iter()
            .try_fold(Decimal::ZERO, |sum, line| sum.checked_add(line.price))
            .ok_or(HostError::TotalOverflow(order.number))?;

        let impact = widget.set_bill(Some(Bill::new(lines, total)))?;
        order.billed = true;

        let amount = format_amount(total, &widget.config().currency_symbol);
        tracing::info!("Bill for order #{} issued: {}", order.number, amount);
        Ok(HostReply::new(
            format!("Bill for order #{} delivered: {amount}", order.number),
            impact,
        ))
    }

    fn settle<S: IntentSink>(
        &mut self,
        widget: &mut TableWidget<S>,
    ) -> Result<HostReply, HostError> {
        let number = match &self.open_order {
            Some(order) if order.billed => order.number,
            _ => return Err(HostError::NothingToPay),
        };

        self.open_order = None;
        let impact = widget.reset();
        tracing::info!("Order #{} paid, table cleared", number);
        Ok(HostReply::new(
            format!("Payment for order #{number} received, table cleared"),
            impact,
        ))
    }
}

fn default_menu() -> Menu {
    let items = vec![
        MenuItem::new(ItemId(1), "Tomato Soup", Decimal::new(550, 2)),
        MenuItem::new(ItemId(2), "Garlic Bread", Decimal::new(300, 2)),
        MenuItem::new(ItemId(3), "Caesar Salad", Decimal::new(850, 2)),
        MenuItem::new(ItemId(4), "Grilled Salmon", Decimal::new(1800, 2)),
        MenuItem::new(ItemId(5), "Mushroom Risotto", Decimal::new(1450, 2)),
        MenuItem::new(ItemId(6), "Lemonade", Decimal::new(350, 2)),
    ];
    Menu::new(items).unwrap_or_default()
}
