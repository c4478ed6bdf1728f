//! Declarative view tree rendered from widget data.
//!
//! A [`TableView`] is a plain value: hosts paint it however they like and bind
//! their input to the [`Control`]s it carries. Rendering the same data twice
//! yields equal trees, which lets the widget detect whether a mutation changed
//! anything visible.
use crate::config::WidgetConfig;
use crate::format::{format_amount, format_bill_line};
use crate::model::{Bill, ItemId, Menu, OrderStatus};
use crate::selection::SelectionSet;
use crate::state::{TableState, can_place_order};

/// Interactive element a host can activate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Control {
    RequestMenu,
    ToggleItem(ItemId),
    PlaceOrder,
    RequestBill,
    PayBill,
}

/// Emphasis of the status banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    pub text: String,
    pub tone: Tone,
}

/// One checkbox row in the menu list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChecklistRow {
    pub id: ItemId,
    pub label: String,
    pub checked: bool,
    /// Locked rows are shown but cannot be toggled.
    pub locked: bool,
}

impl ChecklistRow {
    pub fn control(&self) -> Option<Control> {
        (!self.locked).then_some(Control::ToggleItem(self.id))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillLineView {
    pub name: String,
    pub amount: String,
}

impl BillLineView {
    pub fn text(&self) -> String {
        format_bill_line(&self.name, &self.amount)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BillView {
    pub lines: Vec<BillLineView>,
    pub total: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewBody {
    /// Nothing beyond the status banner.
    Prompt,
    Checklist(Vec<ChecklistRow>),
    Bill(BillView),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActionButton {
    pub control: Control,
    pub label: String,
    pub enabled: bool,
}

impl ActionButton {
    fn new(control: Control, label: impl Into<String>, enabled: bool) -> Self {
        Self {
            control,
            label: label.into(),
            enabled,
        }
    }
}

/// Complete visible tree for one render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableView {
    pub title: String,
    pub state: TableState,
    pub status: StatusLine,
    pub body: ViewBody,
    pub actions: Vec<ActionButton>,
}

/// Borrowed inputs of a render.
#[derive(Clone, Copy, Debug)]
pub struct ViewInput<'a> {
    pub menu: Option<&'a Menu>,
    pub order_status: Option<&'a OrderStatus>,
    pub bill: Option<&'a Bill>,
    pub selection: &'a SelectionSet,
}

impl TableView {
    /// Renders the view for the given data.
    ///
    /// Pure: the output depends only on `input` and `config`.
    pub fn render(input: ViewInput<'_>, config: &WidgetConfig) -> Self {
        let state = TableState::infer(input.menu, input.order_status, input.bill);
        let (status, body, actions) = match state {
            TableState::NoMenu => (
                status("Ready to order!", Tone::Neutral),
                ViewBody::Prompt,
                vec![ActionButton::new(Control::RequestMenu, "Request Menu", true)],
            ),
            TableState::Selecting => {
                let rows = input
                    .menu
                    .map(|menu| selecting_rows(menu, input.selection))
                    .unwrap_or_default();
                let enabled = can_place_order(input.menu, input.selection, input.order_status);
                (
                    status("Select your items", Tone::Neutral),
                    ViewBody::Checklist(rows),
                    vec![ActionButton::new(
                        Control::PlaceOrder,
                        format!("Place Order ({} items)", input.selection.len()),
                        enabled,
                    )],
                )
            }
            TableState::OrderPlaced => {
                let rows = input
                    .menu
                    .map(|menu| locked_rows(menu, input.selection))
                    .unwrap_or_default();
                (
                    status("Order confirmed! ✓", Tone::Success),
                    ViewBody::Checklist(rows),
                    vec![ActionButton::new(Control::RequestBill, "Request Bill", true)],
                )
            }
            TableState::BillReady => {
                let bill = input
                    .bill
                    .map(|bill| bill_view(bill, &config.currency_symbol))
                    .unwrap_or_else(|| BillView {
                        lines: Vec::new(),
                        total: String::new(),
                    });
                (
                    status("Your bill is ready", Tone::Neutral),
                    ViewBody::Bill(bill),
                    vec![ActionButton::new(Control::PayBill, "Pay Bill", true)],
                )
            }
        };

        Self {
            title: config.title.clone(),
            state,
            status,
            body,
            actions,
        }
    }

    /// Checklist rows, empty when the body is not a checklist.
    pub fn rows(&self) -> &[ChecklistRow] {
        match &self.body {
            ViewBody::Checklist(rows) => rows,
            _ => &[],
        }
    }

    pub fn bill(&self) -> Option<&BillView> {
        match &self.body {
            ViewBody::Bill(bill) => Some(bill),
            _ => None,
        }
    }

    /// The state's main button: the only one each state renders.
    pub fn primary_action(&self) -> Option<&ActionButton> {
        self.actions.first()
    }

    /// Whether activating `control` through this view would do anything.
    pub fn is_enabled(&self, control: Control) -> bool {
        match control {
            Control::ToggleItem(_) => self
                .rows()
                .iter()
                .any(|row| row.control() == Some(control)),
            _ => self
                .actions
                .iter()
                .any(|action| action.control == control && action.enabled),
        }
    }
}

fn status(text: &str, tone: Tone) -> StatusLine {
    StatusLine {
        text: text.to_string(),
        tone,
    }
}

fn selecting_rows(menu: &Menu, selection: &SelectionSet) -> Vec<ChecklistRow> {
    menu.iter()
        .map(|item| ChecklistRow {
            id: item.id,
            label: item.name.clone(),
            checked: selection.contains(item.id),
            locked: false,
        })
        .collect()
}

fn locked_rows(menu: &Menu, selection: &SelectionSet) -> Vec<ChecklistRow> {
    menu.iter()
        .filter(|item| selection.contains(item.id))
        .map(|item| ChecklistRow {
            id: item.id,
            label: item.name.clone(),
            checked: true,
            locked: true,
        })
        .collect()
}

fn bill_view(bill: &Bill, currency_symbol: &str) -> BillView {
    BillView {
        lines: bill
            .items
            .iter()
            .map(|line| BillLineView {
                name: line.name.clone(),
                amount: format_amount(line.price, currency_symbol),
            })
            .collect(),
        total: format_amount(bill.total, currency_symbol),
    }
}
