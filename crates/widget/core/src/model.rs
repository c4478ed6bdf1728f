//! Data the host assigns to the widget: menu, order status and bill.
use std::collections::HashSet;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

/// Identifier of a menu item, unique within a [`Menu`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single orderable dish.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: ItemId,
    pub name: String,
    pub price: Decimal,
}

impl MenuItem {
    pub fn new(id: ItemId, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// Ordered list of menu items with unique ids.
///
/// Construction rejects duplicate ids, so every `Menu` the widget holds can be
/// addressed unambiguously by [`ItemId`]. Deserialization goes through the
/// same check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MenuItem>", into = "Vec<MenuItem>")]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Result<Self, WidgetError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(WidgetError::DuplicateItemId(item.id));
            }
        }
        Ok(Self { items })
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Returns the item at `index` in display order.
    pub fn nth(&self, index: usize) -> Option<&MenuItem> {
        self.items.get(index)
    }
}

impl TryFrom<Vec<MenuItem>> for Menu {
    type Error = WidgetError;

    fn try_from(items: Vec<MenuItem>) -> Result<Self, Self::Error> {
        Self::new(items)
    }
}

impl From<Menu> for Vec<MenuItem> {
    fn from(menu: Menu) -> Self {
        menu.items
    }
}

/// Opaque marker that an order was accepted by the host.
///
/// The widget only cares whether one is present; the label is shown back to
/// the host in logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn confirmed() -> Self {
        Self::new("confirmed")
    }

    pub fn label(&self) -> &str {
        &self.0
    }
}

/// One itemized line on a bill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillLine {
    pub name: String,
    pub price: Decimal,
}

impl BillLine {
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Itemized bill as computed by the host.
///
/// The widget renders `total` verbatim; it never recomputes it from the lines.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub items: Vec<BillLine>,
    pub total: Decimal,
}

impl Bill {
    pub fn new(items: Vec<BillLine>, total: Decimal) -> Self {
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, price: i64) -> MenuItem {
        MenuItem::new(ItemId(id), name, Decimal::from(price))
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = Menu::new(vec![item(1, "Soup", 5), item(1, "Stew", 7)]);
        assert_eq!(result, Err(WidgetError::DuplicateItemId(ItemId(1))));
    }

    #[test]
    fn keeps_host_order() {
        let menu = Menu::new(vec![item(3, "Tea", 2), item(1, "Soup", 5)]).unwrap();
        let names: Vec<_> = menu.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Tea", "Soup"]);
        assert_eq!(menu.nth(1).map(|i| i.id), Some(ItemId(1)));
        assert!(menu.contains(ItemId(3)));
        assert!(!menu.contains(ItemId(2)));
    }

    #[test]
    fn deserializes_host_json() {
        let json = r#"[
            {"id": 1, "name": "Soup", "price": 5},
            {"id": 2, "name": "Bread", "price": "2.50"}
        ]"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.get(ItemId(2)).unwrap().price, Decimal::new(250, 2));
    }

    #[test]
    fn accepts_negative_and_wide_ids() {
        let json = r#"[
            {"id": -1, "name": "Staff Meal", "price": 0},
            {"id": 5000000000, "name": "Tasting Menu", "price": 95}
        ]"#;
        let menu: Menu = serde_json::from_str(json).unwrap();
        assert!(menu.contains(ItemId(-1)));
        assert_eq!(menu.nth(1).map(|i| i.id), Some(ItemId(5_000_000_000)));
    }

    #[test]
    fn deserialization_rejects_duplicates() {
        let json = r#"[
            {"id": 4, "name": "Soup", "price": 5},
            {"id": 4, "name": "Bread", "price": 2}
        ]"#;
        let err = serde_json::from_str::<Menu>(json).unwrap_err();
        assert!(err.to_string().contains("appears more than once"));
    }

    #[test]
    fn bill_and_status_deserialize() {
        let bill: Bill =
            serde_json::from_str(r#"{"items":[{"name":"Soup","price":5}],"total":5}"#).unwrap();
        assert_eq!(bill.items.len(), 1);
        assert_eq!(bill.total, Decimal::from(5));

        let status: OrderStatus = serde_json::from_str(r#""confirmed""#).unwrap();
        assert_eq!(status, OrderStatus::confirmed());
    }
}
