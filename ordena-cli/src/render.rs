//! Plain-text rendering of views and order details

use ordena_core::{Order, View};

pub fn format_currency(v: f64) -> String {
    format!("R$ {v:.2}")
}

/// First two item names, with an ellipsis when more exist
fn items_preview(order: &Order) -> String {
    let mut preview = order
        .items
        .iter()
        .take(2)
        .map(|i| i.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    if order.items.len() > 2 {
        preview.push('…');
    }
    preview
}

/// The orders table plus the stats header
pub fn table(view: &View) -> String {
    let mut out = format!(
        "{} orders | total {}\n",
        view.stats.count,
        format_currency(view.stats.total_value)
    );

    if view.visible.is_empty() {
        out.push_str("No orders found.\n");
        return out;
    }

    out.push_str(&format!(
        "{:<12} {:<24} {:<28} {:>12}  {:<10} {}\n",
        "ID", "SUPPLIER", "ITEMS", "TOTAL", "DATE", "STATUS"
    ));
    for order in &view.visible {
        out.push_str(&format!(
            "{:<12} {:<24} {:<28} {:>12}  {:<10} {}\n",
            order.id,
            order.supplier,
            items_preview(order),
            format_currency(order.total()),
            order.date,
            order.status.label(),
        ));
    }
    out
}

/// Detail panel for one order
pub fn detail(order: &Order) -> String {
    let mut out = format!(
        "{}\nSupplier: {}\nDate:     {}\nStatus:   {}\nItems:\n",
        order.id,
        order.supplier,
        order.date,
        order.status.label()
    );
    for item in &order.items {
        out.push_str(&format!(
            "  - {} — {} x {} = {}\n",
            item.name,
            item.qty,
            format_currency(item.price),
            format_currency(item.subtotal())
        ));
    }
    out.push_str(&format!("Total: {}\n", format_currency(order.total())));
    out
}
