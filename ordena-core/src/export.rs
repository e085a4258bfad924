//! CSV export
//!
//! Write-only artifact, never re-imported. Header
//! `id,supplier,date,status,items,total`, every field double-quoted with
//! embedded quotes doubled, rows joined by `\n`.

use crate::model::Order;

/// Render a number compactly: integral values lose the decimal point
/// (`15.0` -> `15`), fractional values keep it (`0.45`).
fn fmt_number(v: f64) -> String {
    // f64 Display already prints the shortest round-tripping form, which
    // drops a trailing `.0`.
    format!("{v}")
}

fn escape(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn items_column(order: &Order) -> String {
    order
        .items
        .iter()
        .map(|item| format!("{}({}x{})", item.name, fmt_number(item.qty), fmt_number(item.price)))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Serialize the whole collection to CSV
pub fn to_csv(orders: &[Order]) -> String {
    let mut rows = Vec::with_capacity(orders.len() + 1);
    rows.push(
        ["id", "supplier", "date", "status", "items", "total"]
            .map(escape)
            .join(","),
    );

    for order in orders {
        let fields = [
            order.id.clone(),
            order.supplier.clone(),
            order.date.clone(),
            order.status.as_str().to_string(),
            items_column(order),
            fmt_number(order.total()),
        ];
        rows.push(fields.map(|f| escape(&f)).join(","));
    }

    rows.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, OrderStatus};

    fn hdmi_order() -> Order {
        Order {
            id: "OC-abc1234".to_string(),
            supplier: "EletroMax".to_string(),
            date: "2024-03-01".to_string(),
            status: OrderStatus::InProgress,
            items: vec![LineItem::new("Cabo HDMI", 10.0, 15.0)],
        }
    }

    #[test]
    fn test_header_row() {
        let csv = to_csv(&[]);
        assert_eq!(csv, "\"id\",\"supplier\",\"date\",\"status\",\"items\",\"total\"");
    }

    #[test]
    fn test_row_rendering() {
        let csv = to_csv(&[hdmi_order()]);
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(
            row,
            "\"OC-abc1234\",\"EletroMax\",\"2024-03-01\",\"in_progress\",\"Cabo HDMI(10x15)\",\"150\""
        );
    }

    #[test]
    fn test_fractional_prices_keep_decimals() {
        let order = Order {
            id: "OC-xyz0001".to_string(),
            supplier: "Tecfornecedores Ltda".to_string(),
            date: "2024-01-01".to_string(),
            status: OrderStatus::Pending,
            items: vec![
                LineItem::new("Parafuso", 100.0, 0.45),
                LineItem::new("Porca", 50.0, 0.5),
            ],
        };

        let csv = to_csv(&[order]);
        assert!(csv.contains("\"Parafuso(100x0.45); Porca(50x0.5)\""));
        assert!(csv.contains("\"70\""));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut order = hdmi_order();
        order.supplier = "Acme \"Premium\" Ltda".to_string();

        let csv = to_csv(&[order]);
        assert!(csv.contains("\"Acme \"\"Premium\"\" Ltda\""));
    }

    #[test]
    fn test_one_row_per_order_no_trailing_newline() {
        let csv = to_csv(&[hdmi_order(), hdmi_order()]);
        assert_eq!(csv.lines().count(), 3);
        assert!(!csv.ends_with('\n'));
    }
}
