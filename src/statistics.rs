use log::debug;
use serde::Serialize;

use crate::{beverage::BeverageKind, money::Money, order::Order, shop::Shop};

#[derive(Serialize, Debug, PartialEq)]
pub struct OrderSummary {
    pub order_number: u32,
    pub customer_name: String,
    pub items: usize,
    pub total: Money,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        OrderSummary {
            order_number: order.order_number(),
            customer_name: order.customer().name().to_string(),
            items: order.item_count(),
            total: order.total_price(),
        }
    }
}

/// Resumen de las ventas acumuladas por la tienda
#[derive(Serialize, Debug, PartialEq)]
pub struct SalesReport {
    pub order_count: usize,
    pub monthly_total: Money,
    pub coffees: usize,
    pub alcoholic: usize,
    pub smoothies: usize,
    pub orders: Vec<OrderSummary>,
}

impl SalesReport {
    pub fn from_shop(shop: &Shop) -> SalesReport {
        let count = |kind| -> usize {
            shop.orders()
                .iter()
                .map(|order| order.count_of_kind(kind))
                .sum()
        };
        let report = SalesReport {
            order_count: shop.order_count(),
            monthly_total: shop.monthly_total(),
            coffees: count(BeverageKind::Coffee),
            alcoholic: count(BeverageKind::Alcoholic),
            smoothies: count(BeverageKind::Smoothie),
            orders: shop.orders().iter().map(OrderSummary::from).collect(),
        };
        debug!(
            "[STATISTICS] Orders processed={} | Total={}",
            report.order_count, report.monthly_total
        );
        report
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
