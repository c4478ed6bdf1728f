use rust_decimal::Decimal;
use table_widget_core::{
    Bill, BillLine, Control, ItemId, Menu, MenuItem, OrderStatus, TableIntent, TableState,
    TableWidget, WidgetConfig,
};

fn soup_and_bread() -> Menu {
    Menu::new(vec![
        MenuItem::new(ItemId(1), "Soup", Decimal::from(5)),
        MenuItem::new(ItemId(2), "Bread", Decimal::from(2)),
    ])
    .expect("menu ids are unique")
}

fn soup_bill() -> Bill {
    Bill::new(
        vec![BillLine::new("Soup", Decimal::from(5))],
        Decimal::from(5),
    )
}

/// Full table visit driven the way a host would: data down, intents up.
#[test]
fn complete_table_visit() {
    let mut widget = TableWidget::new(Vec::<TableIntent>::new());

    // Guest sits down and asks for the menu.
    assert_eq!(widget.state(), TableState::NoMenu);
    assert!(widget.activate(Control::RequestMenu).is_some());
    widget.set_menu(Some(soup_and_bread()));
    assert_eq!(widget.state(), TableState::Selecting);

    // Picks soup and orders.
    widget.toggle_selection(ItemId(1));
    assert!(widget.can_place_order());
    widget.activate(Control::PlaceOrder);
    widget.set_order_status(Some(OrderStatus::confirmed()));
    assert_eq!(widget.state(), TableState::OrderPlaced);

    // Asks for the bill and pays.
    widget.activate(Control::RequestBill);
    widget.set_bill(Some(soup_bill())).expect("order exists");
    assert_eq!(widget.state(), TableState::BillReady);
    widget.activate(Control::PayBill);

    assert_eq!(
        widget.sink().as_slice(),
        [
            TableIntent::RequestMenu,
            TableIntent::PlaceOrder {
                item_ids: vec![ItemId(1)]
            },
            TableIntent::RequestBill,
            TableIntent::PayBill,
        ]
    );

    widget.reset();
    assert_eq!(widget.state(), TableState::NoMenu);
}

#[test]
fn locked_selection_does_not_leak_into_later_orders() {
    let mut widget = TableWidget::new(Vec::<TableIntent>::new());
    widget.set_menu(Some(soup_and_bread()));
    widget.toggle_selection(ItemId(1));
    widget.emit_place_order();

    widget.set_order_status(Some(OrderStatus::confirmed()));
    widget.toggle_selection(ItemId(2));
    assert!(widget.activate(Control::ToggleItem(ItemId(2))).is_none());
    assert!(widget.activate(Control::PlaceOrder).is_none());
    widget.emit_place_order();

    let payloads: Vec<_> = widget
        .sink()
        .iter()
        .filter_map(TableIntent::item_ids)
        .collect();
    assert_eq!(payloads, [[ItemId(1)].as_slice(), [ItemId(1)].as_slice()]);
}

#[test]
fn bill_renders_single_line_and_total() {
    let mut widget = TableWidget::new(Vec::<TableIntent>::new());
    widget.set_menu(Some(soup_and_bread()));
    widget.set_order_status(Some(OrderStatus::confirmed()));
    widget.set_bill(Some(soup_bill())).unwrap();

    let bill = widget.view().bill().expect("bill body");
    let lines: Vec<_> = bill.lines.iter().map(|line| line.text()).collect();
    assert_eq!(lines, ["Soup — $5.00"]);
    assert_eq!(bill.total, "$5.00");
}

#[test]
fn request_menu_emits_before_any_data() {
    let mut widget = TableWidget::new(Vec::<TableIntent>::new());
    widget.emit_request_menu();
    assert_eq!(widget.sink().as_slice(), [TableIntent::RequestMenu]);
    assert_eq!(
        serde_json::to_value(&widget.sink()[0]).unwrap(),
        serde_json::json!({"type": "request-menu"})
    );
}

#[test]
fn reset_restores_no_menu_view_from_every_state() {
    let pristine = TableWidget::new(Vec::<TableIntent>::new()).view().clone();

    type Step = fn(&mut TableWidget<Vec<TableIntent>>);
    let setups: [Step; 4] = [
        |_| {},
        |w| {
            w.set_menu(Some(soup_and_bread()));
            w.toggle_selection(ItemId(2));
        },
        |w| {
            w.set_menu(Some(soup_and_bread()));
            w.toggle_selection(ItemId(1));
            w.set_order_status(Some(OrderStatus::confirmed()));
        },
        |w| {
            w.set_menu(Some(soup_and_bread()));
            w.set_order_status(Some(OrderStatus::confirmed()));
            w.set_bill(Some(soup_bill())).unwrap();
        },
    ];

    for setup in setups {
        let mut widget = TableWidget::new(Vec::new());
        setup(&mut widget);
        widget.reset();
        widget.render();
        assert_eq!(widget.view(), &pristine);
        assert!(widget.selection().is_empty());
    }
}

#[test]
fn order_may_arrive_without_menu() {
    let mut widget = TableWidget::new(Vec::<TableIntent>::new());
    widget.set_order_status(Some(OrderStatus::new("walk-in")));
    assert_eq!(widget.state(), TableState::OrderPlaced);
    assert!(widget.view().rows().is_empty());
}

#[test]
fn closure_sink_and_custom_config() {
    let mut names = Vec::new();
    {
        let config = WidgetConfig::default()
            .with_title("Table 7")
            .with_currency_symbol("€");
        let mut widget =
            TableWidget::with_config(config, |intent: TableIntent| names.push(intent.name()));
        assert_eq!(widget.view().title, "Table 7");

        widget.set_order_status(Some(OrderStatus::confirmed()));
        widget.set_bill(Some(soup_bill())).unwrap();
        assert_eq!(widget.view().bill().unwrap().total, "€5.00");
        widget.emit_pay_bill();
    }
    assert_eq!(names, ["pay-bill"]);
}
