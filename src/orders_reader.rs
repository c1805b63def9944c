//! Lectura de un archivo de pedidos y carga de esos pedidos en la tienda.
use log::{debug, error, info};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::beverage::Size;
use crate::errors::ShopError;
use crate::order::Day;
use crate::shop::Shop;

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum JsonBeverage {
    Coffee {
        name: String,
        size: Size,
        #[serde(default)]
        extra_shot: bool,
        #[serde(default)]
        extra_syrup: bool,
    },
    Alcohol {
        name: String,
        size: Size,
    },
    Smoothie {
        name: String,
        size: Size,
        #[serde(default)]
        fruit_count: u32,
        #[serde(default)]
        protein: bool,
    },
}

#[derive(Deserialize, Debug)]
pub struct JsonOrder {
    time: u32,
    day: Day,
    customer_name: String,
    customer_age: u32,
    #[serde(default)]
    beverages: Vec<JsonBeverage>,
}

#[derive(Deserialize)]
struct OrdersConfiguration {
    orders: Vec<JsonOrder>,
}

fn read_orders_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<JsonOrder>, ShopError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let orders_config: OrdersConfiguration = serde_json::from_reader(reader)?;
    Ok(orders_config.orders)
}

pub fn parse_orders(content: &str) -> Result<Vec<JsonOrder>, ShopError> {
    let orders_config: OrdersConfiguration = serde_json::from_str(content)?;
    Ok(orders_config.orders)
}

/// Carga los pedidos en la tienda. Los pedidos y bebidas que no cumplen las reglas se saltean.
/// Devuelve la cantidad de pedidos aceptados.
pub fn add_orders_to_shop(json_orders: Vec<JsonOrder>, shop: &mut Shop) -> usize {
    let mut accepted = 0;
    for order in json_orders {
        if let Err(err) =
            shop.start_new_order_checked(order.time, order.day, &order.customer_name, order.customer_age)
        {
            info!("[READER] Skipped order of {}: {}", order.customer_name, err);
            continue;
        }
        accepted += 1;
        for beverage in order.beverages {
            if let Err(err) = add_beverage(shop, beverage) {
                info!("[READER] Skipped beverage for {}: {}", order.customer_name, err);
            }
        }
        debug!("[READER] Added order of {}", order.customer_name);
    }
    info!("[READER] No more orders left");
    accepted
}

fn add_beverage(shop: &mut Shop, beverage: JsonBeverage) -> Result<(), ShopError> {
    match beverage {
        JsonBeverage::Coffee {
            name,
            size,
            extra_shot,
            extra_syrup,
        } => shop.add_coffee(&name, size, extra_shot, extra_syrup),
        JsonBeverage::Alcohol { name, size } => shop.add_alcohol_checked(&name, size),
        JsonBeverage::Smoothie {
            name,
            size,
            fruit_count,
            protein,
        } => shop.add_smoothie_checked(&name, size, fruit_count, protein),
    }
}

pub fn read_and_add_orders<P: AsRef<Path>>(shop: &mut Shop, path: P) -> Result<usize, ShopError> {
    match read_orders_from_file(path) {
        Ok(json_orders) => Ok(add_orders_to_shop(json_orders, shop)),
        Err(err) => {
            error!("[READER] Error while reading the orders file");
            Err(err)
        }
    }
}
