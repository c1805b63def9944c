pub mod beverage;
pub mod constants;
pub mod customer;
pub mod errors;
pub mod money;
pub mod order;
pub mod orders_reader;
pub mod shop;
pub mod statistics;
