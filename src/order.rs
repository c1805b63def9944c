//! Representacion de un pedido y de las bebidas que lo componen
use std::{cmp::Ordering, fmt};

use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};

use crate::{
    beverage::{Beverage, BeverageKind, Size},
    constants::{ORDER_NUMBER_MAX, ORDER_NUMBER_MIN},
    customer::Customer,
    money::Money,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn is_weekend(&self) -> bool {
        matches!(self, Day::Saturday | Day::Sunday)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        write!(f, "{}", name)
    }
}

/// Genera un numero de orden al azar en [10000, 90000). No se garantiza que sea unico.
pub fn random_order_number() -> u32 {
    thread_rng().gen_range(ORDER_NUMBER_MIN, ORDER_NUMBER_MAX)
}

/// Pedido de un cliente. Las bebidas se mantienen en el orden en que se agregaron.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    order_number: u32,
    order_time: u32,
    order_day: Day,
    customer: Customer,
    items: Vec<Beverage>,
}

impl Order {
    pub fn new(order_time: u32, order_day: Day, customer_name: &str, customer_age: u32) -> Order {
        Order::with_number(
            random_order_number(),
            order_time,
            order_day,
            customer_name,
            customer_age,
        )
    }

    pub fn with_number(
        order_number: u32,
        order_time: u32,
        order_day: Day,
        customer_name: &str,
        customer_age: u32,
    ) -> Order {
        Order {
            order_number,
            order_time,
            order_day,
            customer: Customer::new(customer_name, customer_age),
            items: Vec::new(),
        }
    }

    pub fn is_weekend(&self) -> bool {
        self.order_day.is_weekend()
    }

    pub fn add_coffee(&mut self, name: &str, size: Size, extra_shot: bool, extra_syrup: bool) {
        self.items
            .push(Beverage::coffee(name, size, extra_shot, extra_syrup));
    }

    /// Agrega una bebida alcoholica. El recargo de fin de semana depende del dia del pedido.
    pub fn add_alcohol(&mut self, name: &str, size: Size) {
        let weekend = self.is_weekend();
        self.items.push(Beverage::alcohol(name, size, weekend));
    }

    pub fn add_smoothie(&mut self, name: &str, size: Size, add_protein: bool, fruit_count: u32) {
        self.items
            .push(Beverage::smoothie(name, size, add_protein, fruit_count));
    }

    pub fn total_price(&self) -> Money {
        self.items.iter().map(Beverage::calc_price).sum()
    }

    pub fn count_of_kind(&self, kind: BeverageKind) -> usize {
        self.items.iter().filter(|item| item.kind() == kind).count()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Devuelve la bebida en la posicion `index`.
    ///
    /// # Panics
    ///
    /// Si `index` esta fuera de rango.
    pub fn item_at(&self, index: usize) -> &Beverage {
        &self.items[index]
    }

    pub fn get_item(&self, index: usize) -> Option<&Beverage> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[Beverage] {
        &self.items
    }

    /// Compara dos pedidos solamente por su numero de orden
    pub fn compare(&self, other: &Order) -> Ordering {
        self.order_number.cmp(&other.order_number)
    }

    pub fn order_number(&self) -> u32 {
        self.order_number
    }

    pub fn order_time(&self) -> u32 {
        self.order_time
    }

    pub fn order_day(&self) -> Day {
        self.order_day
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn set_order_number(&mut self, order_number: u32) {
        self.order_number = order_number;
    }

    pub fn set_order_time(&mut self, order_time: u32) {
        self.order_time = order_time;
    }

    pub fn set_order_day(&mut self, order_day: Day) {
        self.order_day = order_day;
    }

    pub fn set_customer(&mut self, customer_name: &str, customer_age: u32) {
        self.customer = Customer::new(customer_name, customer_age);
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order Number: {}, Order Time: {}, Order Day: {}, {}, Beverages: ",
            self.order_number, self.order_time, self.order_day, self.customer
        )?;
        for item in &self.items {
            write!(f, "{}. ", item)?;
        }
        write!(f, "Order Total: {}", self.total_price())
    }
}
