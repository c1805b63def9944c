use std::env;

use log::{error, LevelFilter};
use simple_logger::SimpleLogger;

use bev_shop::{
    constants::DEFAULT_ORDERS_FILE, orders_reader::read_and_add_orders, shop::Shop,
    statistics::SalesReport,
};

fn main() {
    if let Err(err) = SimpleLogger::new().with_level(LevelFilter::Info).env().init() {
        eprintln!("Could not start the logger: {}", err);
    }

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ORDERS_FILE.to_string());

    let mut shop = Shop::new();
    if let Err(err) = read_and_add_orders(&mut shop, &path) {
        error!("[MAIN] {}: {}", path, err);
        return;
    }
    shop.sort_orders_by_number();
    println!("{}", shop);

    match SalesReport::from_shop(&shop).to_json() {
        Ok(report) => println!("{}", report),
        Err(err) => error!("[MAIN] Error serializing the report: {}", err),
    }
}
