//! Order building: validation, totaling, and server-side stamping.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::DomainError;

/// One line of an order: a product id and how many of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: String,
    pub count: u32,
}

/// An order submission as the client sends it.
///
/// The line items arrive under the wire name `order`; everything the server
/// assigns (`id`, `totalPrice`, `createdAt`) is absent here by construction.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderDraft {
    pub fio: String,
    #[serde(default)]
    pub address: Option<String>,
    pub phone: String,
    pub email: String,
    pub delivery: bool,
    #[serde(rename = "order", default)]
    pub lines: Vec<OrderLine>,
}

/// An accepted order as recorded in the order log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub fio: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub phone: String,
    pub email: String,
    pub delivery: bool,
    pub goods: Vec<OrderLine>,
    #[serde(rename = "totalPrice")]
    pub total_price: Decimal,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Validate a draft against the catalog and stamp it into an [`Order`].
///
/// The total is `sum(count * price)` over the catalog prices; the id is a
/// short random numeric token and the timestamp is the current time in GMT.
///
/// # Errors
///
/// - [`DomainError::EmptyOrder`] if the draft has no line items.
/// - [`DomainError::UnknownProduct`] if a line item id is not in the catalog.
pub fn build_order(catalog: &Catalog, draft: OrderDraft) -> Result<Order, DomainError> {
    build_order_at(catalog, draft, new_order_id(), Utc::now())
}

/// [`build_order`] with the server-assigned parts injected.
fn build_order_at(
    catalog: &Catalog,
    draft: OrderDraft,
    id: String,
    created_at: DateTime<Utc>,
) -> Result<Order, DomainError> {
    if draft.lines.is_empty() {
        return Err(DomainError::EmptyOrder);
    }

    let mut total = Decimal::ZERO;
    for line in &draft.lines {
        let product = catalog
            .find(&line.id)
            .ok_or_else(|| DomainError::UnknownProduct(line.id.clone()))?;
        total += product.price * Decimal::from(line.count);
    }

    Ok(Order {
        id,
        fio: draft.fio,
        address: draft.address,
        phone: draft.phone,
        email: draft.email,
        delivery: draft.delivery,
        goods: draft.lines,
        total_price: total,
        created_at: gmt_timestamp(created_at),
    })
}

/// Six-digit random numeric token.
///
/// Not globally unique; collisions are possible and accepted for a log that
/// is never keyed by id.
fn new_order_id() -> String {
    format!("{:06}", rand::rng().random_range(0..1_000_000_u32))
}

/// Human-readable GMT stamp, e.g. `Mon, 25 Aug 2026 12:00:00 GMT`.
fn gmt_timestamp(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;
    use rust_decimal::Decimal;

    use super::*;
    use crate::catalog::Product;

    fn priced(id: &str, price: i64) -> Product {
        Product {
            id: id.to_owned(),
            title: format!("Item {id}"),
            price: Decimal::from(price),
            category: "shirts".to_owned(),
            kind: None,
            gender: None,
            top: false,
            description: String::new(),
            image: format!("img/{id}.jpg"),
            color: None,
            display: None,
        }
    }

    fn catalog() -> Catalog {
        Catalog {
            goods: vec![priced("a", 100), priced("b", 50)],
            categories: Vec::new(),
            colors: Vec::new(),
        }
    }

    fn draft(lines: Vec<OrderLine>) -> OrderDraft {
        OrderDraft {
            fio: "Ivanov Ivan".to_owned(),
            address: Some("Somewhere 1".to_owned()),
            phone: "+700000000".to_owned(),
            email: "ivan@example.com".to_owned(),
            delivery: true,
            lines,
        }
    }

    fn line(id: &str, count: u32) -> OrderLine {
        OrderLine {
            id: id.to_owned(),
            count,
        }
    }

    #[test]
    fn empty_order_rejected() {
        let err = build_order(&catalog(), draft(Vec::new())).unwrap_err();
        assert_eq!(err, DomainError::EmptyOrder);
    }

    #[test]
    fn total_is_sum_of_count_times_price() {
        // 2 x 100 + 1 x 50 = 250
        let order = build_order(&catalog(), draft(vec![line("a", 2), line("b", 1)])).unwrap();
        assert_eq!(order.total_price, Decimal::from(250));
        assert_eq!(order.goods.len(), 2);
    }

    #[test]
    fn unknown_product_id_rejected() {
        let err =
            build_order(&catalog(), draft(vec![line("a", 1), line("nope", 1)])).unwrap_err();
        assert_eq!(err, DomainError::UnknownProduct("nope".to_owned()));
    }

    #[test]
    fn id_is_six_digit_numeric_token() {
        let order = build_order(&catalog(), draft(vec![line("a", 1)])).unwrap();
        assert_eq!(order.id.len(), 6);
        assert!(order.id.bytes().all(|b| b.is_ascii_digit()));
    }

    #[test]
    fn created_at_uses_gmt_format() {
        let at = Utc.with_ymd_and_hms(2026, 8, 25, 12, 0, 0).unwrap();
        let order = build_order_at(
            &catalog(),
            draft(vec![line("b", 1)]),
            "123456".to_owned(),
            at,
        )
        .unwrap();
        assert_eq!(order.created_at, "Tue, 25 Aug 2026 12:00:00 GMT");
    }

    #[test]
    fn draft_deserializes_wire_shape() {
        let draft: OrderDraft = serde_json::from_str(
            r#"{
                "fio": "Ivanov Ivan",
                "phone": "+700000000",
                "email": "ivan@example.com",
                "delivery": false,
                "order": [{"id": "a", "count": 3}]
            }"#,
        )
        .unwrap();
        assert!(draft.address.is_none());
        assert_eq!(draft.lines, vec![line("a", 3)]);
    }

    #[test]
    fn order_serializes_wire_field_names() {
        let order = build_order(&catalog(), draft(vec![line("a", 1)])).unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert!(value.get("totalPrice").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value.get("total_price").is_none());
    }
}
