//! Display state inferred from which host data fields are present.
use crate::model::{Bill, Menu, OrderStatus};
use crate::selection::SelectionSet;

/// The four mutually exclusive display states of a table.
///
/// Never stored: [`TableState::infer`] recomputes it from the data on every
/// render, so the host may assign fields in any order without the widget
/// drifting out of sync.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum TableState {
    /// No menu yet; the guest can ask for one.
    NoMenu,
    /// Menu on the table, no order placed.
    Selecting,
    /// Order accepted, waiting for the guest to ask for the bill.
    OrderPlaced,
    /// Bill delivered, waiting for payment.
    BillReady,
}

impl TableState {
    /// Infers the state with precedence bill, then order, then menu.
    ///
    /// An empty menu counts as no menu.
    pub fn infer(menu: Option<&Menu>, order: Option<&OrderStatus>, bill: Option<&Bill>) -> Self {
        if bill.is_some() {
            Self::BillReady
        } else if order.is_some() {
            Self::OrderPlaced
        } else if menu.is_some_and(|menu| !menu.is_empty()) {
            Self::Selecting
        } else {
            Self::NoMenu
        }
    }
}

/// Whether a place-order intent makes sense for the given data.
///
/// True iff the menu is non-empty, the selection is non-empty and no order
/// exists yet.
pub fn can_place_order(
    menu: Option<&Menu>,
    selection: &SelectionSet,
    order: Option<&OrderStatus>,
) -> bool {
    menu.is_some_and(|menu| !menu.is_empty()) && !selection.is_empty() && order.is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BillLine, ItemId, MenuItem};
    use rust_decimal::Decimal;

    fn menu() -> Menu {
        Menu::new(vec![MenuItem::new(ItemId(1), "Soup", Decimal::from(5))]).unwrap()
    }

    fn bill() -> Bill {
        Bill::new(
            vec![BillLine::new("Soup", Decimal::from(5))],
            Decimal::from(5),
        )
    }

    #[test]
    fn infers_each_lifecycle_stage() {
        let menu = menu();
        let order = OrderStatus::confirmed();
        let bill = bill();

        assert_eq!(TableState::infer(None, None, None), TableState::NoMenu);
        assert_eq!(TableState::infer(Some(&menu), None, None), TableState::Selecting);
        assert_eq!(
            TableState::infer(Some(&menu), Some(&order), None),
            TableState::OrderPlaced
        );
        assert_eq!(
            TableState::infer(Some(&menu), Some(&order), Some(&bill)),
            TableState::BillReady
        );
    }

    #[test]
    fn empty_menu_counts_as_absent() {
        let empty = Menu::default();
        assert_eq!(TableState::infer(Some(&empty), None, None), TableState::NoMenu);
    }

    #[test]
    fn order_without_menu_is_still_placed() {
        let order = OrderStatus::confirmed();
        assert_eq!(
            TableState::infer(None, Some(&order), None),
            TableState::OrderPlaced
        );
    }

    #[test]
    fn state_names_are_kebab_case() {
        assert_eq!(TableState::OrderPlaced.to_string(), "order-placed");
        let name: &'static str = TableState::NoMenu.into();
        assert_eq!(name, "no-menu");
    }

    #[test]
    fn place_order_requires_menu_selection_and_no_order() {
        let menu = menu();
        let empty_menu = Menu::default();
        let order = OrderStatus::confirmed();
        let picked: SelectionSet = [ItemId(1)].into_iter().collect();
        let none = SelectionSet::new();

        for (menu, selection, order, expected) in [
            (Some(&menu), &picked, None, true),
            (Some(&menu), &none, None, false),
            (Some(&menu), &picked, Some(&order), false),
            (Some(&empty_menu), &picked, None, false),
            (None, &picked, None, false),
        ] {
            assert_eq!(can_place_order(menu, selection, order), expected);
        }
    }
}
