//! Libro de pedidos de la tienda. Mantiene el pedido en curso y aplica las reglas del negocio.
use std::fmt;

use log::{debug, info};

use crate::{
    beverage::{BeverageKind, Size},
    constants::{MAX_ALCOHOL_PER_ORDER, MAX_FRUIT_COUNT, MAX_TIME, MIN_AGE_FOR_ALCOHOL, MIN_TIME},
    errors::ShopError,
    money::Money,
    order::{Day, Order},
};

/// Tienda de bebidas. Los pedidos se acumulan durante toda la vida de la tienda
/// y solo hay un pedido en curso a la vez.
///
/// `alcohol_item_count` cuenta las bebidas alcoholicas desde que se creo la tienda,
/// no se reinicia al empezar un pedido nuevo. La cantidad del pedido en curso esta en
/// [`Shop::current_order_alcohol_count`].
#[derive(Debug, Default)]
pub struct Shop {
    orders: Vec<Order>,
    current: Option<usize>,
    alcohol_item_count: u32,
}

impl Shop {
    pub fn new() -> Shop {
        Shop::default()
    }

    pub fn is_valid_time(&self, time: u32) -> bool {
        (MIN_TIME..=MAX_TIME).contains(&time)
    }

    /// Solo deja de ser elegible cuando el contador es exactamente el maximo.
    pub fn is_eligible_for_more_alcohol(&self) -> bool {
        self.alcohol_item_count != MAX_ALCOHOL_PER_ORDER
    }

    pub fn is_valid_age(&self, age: u32) -> bool {
        age >= MIN_AGE_FOR_ALCOHOL
    }

    pub fn is_fruit_count_at_max(&self, fruit_count: u32) -> bool {
        fruit_count >= MAX_FRUIT_COUNT
    }

    pub fn max_alcohol_per_order(&self) -> u32 {
        MAX_ALCOHOL_PER_ORDER
    }

    pub fn min_age_for_alcohol(&self) -> u32 {
        MIN_AGE_FOR_ALCOHOL
    }

    /// Empieza un pedido nuevo y lo deja como pedido en curso. El pedido anterior queda en el libro.
    pub fn start_new_order(&mut self, time: u32, day: Day, customer_name: &str, customer_age: u32) {
        let order = Order::new(time, day, customer_name, customer_age);
        debug!(
            "[SHOP] Started order {} for {} at {} on {}",
            order.order_number(),
            customer_name,
            time,
            day
        );
        self.orders.push(order);
        self.current = Some(self.orders.len() - 1);
    }

    /// Igual que [`Shop::start_new_order`] pero rechaza horarios fuera de rango.
    pub fn start_new_order_checked(
        &mut self,
        time: u32,
        day: Day,
        customer_name: &str,
        customer_age: u32,
    ) -> Result<(), ShopError> {
        if !self.is_valid_time(time) {
            info!("[SHOP] Rejected order at invalid time {}", time);
            return Err(ShopError::InvalidTime(time));
        }
        self.start_new_order(time, day, customer_name, customer_age);
        Ok(())
    }

    fn current_order_mut(&mut self) -> Result<&mut Order, ShopError> {
        let index = self.current.ok_or(ShopError::NoActiveOrder)?;
        self.orders
            .get_mut(index)
            .ok_or(ShopError::NoActiveOrder)
    }

    fn current_order(&self) -> Option<&Order> {
        self.current.and_then(|index| self.orders.get(index))
    }

    pub fn add_coffee(
        &mut self,
        name: &str,
        size: Size,
        extra_shot: bool,
        extra_syrup: bool,
    ) -> Result<(), ShopError> {
        let order = self.current_order_mut()?;
        order.add_coffee(name, size, extra_shot, extra_syrup);
        debug!("[SHOP] Added coffee {} to order {}", name, order.order_number());
        Ok(())
    }

    /// Agrega una bebida alcoholica sin verificar edad ni limite. Incrementa el contador de la tienda.
    pub fn add_alcohol(&mut self, name: &str, size: Size) -> Result<(), ShopError> {
        let order = self.current_order_mut()?;
        order.add_alcohol(name, size);
        debug!("[SHOP] Added alcohol {} to order {}", name, order.order_number());
        self.alcohol_item_count += 1;
        Ok(())
    }

    pub fn add_alcohol_checked(&mut self, name: &str, size: Size) -> Result<(), ShopError> {
        let age = self
            .current_order()
            .ok_or(ShopError::NoActiveOrder)?
            .customer()
            .age();
        if !self.is_valid_age(age) {
            info!("[SHOP] Rejected {}, customer aged {} is under age", name, age);
            return Err(ShopError::UnderAge(age));
        }
        if !self.is_eligible_for_more_alcohol() {
            info!("[SHOP] Rejected {}, alcohol limit reached", name);
            return Err(ShopError::AlcoholLimitReached);
        }
        self.add_alcohol(name, size)
    }

    pub fn add_smoothie(
        &mut self,
        name: &str,
        size: Size,
        fruit_count: u32,
        add_protein: bool,
    ) -> Result<(), ShopError> {
        let order = self.current_order_mut()?;
        order.add_smoothie(name, size, add_protein, fruit_count);
        debug!("[SHOP] Added smoothie {} to order {}", name, order.order_number());
        Ok(())
    }

    pub fn add_smoothie_checked(
        &mut self,
        name: &str,
        size: Size,
        fruit_count: u32,
        add_protein: bool,
    ) -> Result<(), ShopError> {
        if self.is_fruit_count_at_max(fruit_count) {
            info!("[SHOP] Rejected {} with {} fruits", name, fruit_count);
            return Err(ShopError::FruitCountAtMax(fruit_count));
        }
        self.add_smoothie(name, size, fruit_count, add_protein)
    }

    pub fn find_order_index(&self, order_number: u32) -> Option<usize> {
        self.orders
            .iter()
            .position(|order| order.order_number() == order_number)
    }

    pub fn order_by_number(&self, order_number: u32) -> Result<&Order, ShopError> {
        self.find_order_index(order_number)
            .map(|index| &self.orders[index])
            .ok_or(ShopError::OrderNotFound(order_number))
    }

    pub fn order_total(&self, order_number: u32) -> Option<Money> {
        self.order_by_number(order_number)
            .ok()
            .map(Order::total_price)
    }

    pub fn monthly_total(&self) -> Money {
        self.orders.iter().map(Order::total_price).sum()
    }

    /// Ordena los pedidos por numero de forma estable. El pedido en curso sigue siendo el mismo.
    pub fn sort_orders_by_number(&mut self) {
        let mut indexed: Vec<(usize, Order)> = self.orders.drain(..).enumerate().collect();
        indexed.sort_by(|(_, a), (_, b)| a.compare(b));
        let previous = self.current;
        self.current = None;
        for (position, (index, order)) in indexed.into_iter().enumerate() {
            if previous == Some(index) {
                self.current = Some(position);
            }
            self.orders.push(order);
        }
        debug!("[SHOP] Sorted {} orders", self.orders.len());
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Copia independiente del pedido en la posicion `index`.
    ///
    /// # Panics
    ///
    /// Si `index` esta fuera de rango.
    pub fn order_at(&self, index: usize) -> Order {
        self.orders[index].clone()
    }

    pub fn current_order_snapshot(&self) -> Option<Order> {
        self.current_order().cloned()
    }

    pub fn current_order_alcohol_count(&self) -> Option<usize> {
        self.current_order()
            .map(|order| order.count_of_kind(BeverageKind::Alcoholic))
    }

    pub fn shop_alcohol_count(&self) -> u32 {
        self.alcohol_item_count
    }
}

impl fmt::Display for Shop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Orders: ")?;
        for order in &self.orders {
            write!(f, "{}. ", order)?;
        }
        write!(f, "Orders Total: {}", self.monthly_total())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shop_with_numbers(numbers: &[u32]) -> Shop {
        let mut shop = Shop::new();
        for (i, number) in numbers.iter().enumerate() {
            shop.start_new_order(10, Day::Monday, &format!("Customer {}", i), 30);
            shop.current_order_mut().unwrap().set_order_number(*number);
        }
        shop
    }

    #[test]
    fn should_validate_time_range() {
        let shop = Shop::new();
        assert_eq!(false, shop.is_valid_time(MIN_TIME - 1));
        assert_eq!(true, shop.is_valid_time(MIN_TIME));
        assert_eq!(true, shop.is_valid_time(MAX_TIME));
        assert_eq!(false, shop.is_valid_time(MAX_TIME + 1));
    }

    #[test]
    fn should_validate_age() {
        let shop = Shop::new();
        assert_eq!(false, shop.is_valid_age(20));
        assert_eq!(true, shop.is_valid_age(21));
        assert_eq!(21, shop.min_age_for_alcohol());
    }

    #[test]
    fn should_check_fruit_count_at_max() {
        let shop = Shop::new();
        assert_eq!(false, shop.is_fruit_count_at_max(5));
        assert_eq!(true, shop.is_fruit_count_at_max(6));
        assert_eq!(true, shop.is_fruit_count_at_max(7));
    }

    #[test]
    fn should_be_ineligible_only_at_exactly_the_limit() {
        let mut shop = Shop::new();
        shop.start_new_order(10, Day::Monday, "Ana", 30);
        assert_eq!(3, shop.max_alcohol_per_order());
        for _ in 0..3 {
            assert_eq!(true, shop.is_eligible_for_more_alcohol());
            shop.add_alcohol("Beer", Size::Small).unwrap();
        }
        assert_eq!(false, shop.is_eligible_for_more_alcohol());
        shop.add_alcohol("Beer", Size::Small).unwrap();
        assert_eq!(4, shop.shop_alcohol_count());
        assert_eq!(true, shop.is_eligible_for_more_alcohol());
    }

    #[test]
    fn should_keep_alcohol_counter_across_orders() {
        let mut shop = Shop::new();
        shop.start_new_order(10, Day::Monday, "Ana", 30);
        shop.add_alcohol("Beer", Size::Small).unwrap();
        shop.add_alcohol("Beer", Size::Small).unwrap();
        shop.start_new_order(11, Day::Monday, "Bruno", 30);
        shop.add_alcohol("Wine", Size::Small).unwrap();

        assert_eq!(3, shop.shop_alcohol_count());
        assert_eq!(Some(1), shop.current_order_alcohol_count());
        assert_eq!(false, shop.is_eligible_for_more_alcohol());
    }

    #[test]
    fn should_price_weekend_alcohol_in_the_current_order() {
        let mut shop = Shop::new();
        shop.start_new_order(10, Day::Saturday, "Ana", 25);
        shop.add_alcohol("Mojito", Size::Medium).unwrap();

        let current = shop.current_order_snapshot().unwrap();
        assert_eq!(Money::from_cents(360), current.total_price());
        assert_eq!(Some(1), shop.current_order_alcohol_count());
    }

    #[test]
    fn should_fail_to_add_without_an_active_order() {
        let mut shop = Shop::new();
        assert_eq!(
            Err(ShopError::NoActiveOrder),
            shop.add_coffee("Latte", Size::Small, false, false)
        );
        assert_eq!(Err(ShopError::NoActiveOrder), shop.add_alcohol("Beer", Size::Small));
        assert_eq!(
            Err(ShopError::NoActiveOrder),
            shop.add_smoothie("Berry", Size::Small, 1, false)
        );
        assert_eq!(0, shop.shop_alcohol_count());
        assert_eq!(true, shop.current_order_snapshot().is_none());
        assert_eq!(None, shop.current_order_alcohol_count());
    }

    #[test]
    fn should_keep_previous_orders_when_starting_a_new_one() {
        let mut shop = Shop::new();
        shop.start_new_order(10, Day::Monday, "Ana", 25);
        shop.add_coffee("Latte", Size::Small, false, false).unwrap();
        shop.start_new_order(11, Day::Monday, "Bruno", 30);
        shop.add_smoothie("Berry", Size::Large, 2, true).unwrap();

        assert_eq!(2, shop.order_count());
        assert_eq!("Ana", shop.order_at(0).customer().name());
        assert_eq!(1, shop.order_at(0).item_count());
        assert_eq!("Bruno", shop.current_order_snapshot().unwrap().customer().name());
    }

    #[test]
    fn should_not_change_the_shop_through_a_snapshot() {
        let mut shop = Shop::new();
        shop.start_new_order(10, Day::Monday, "Ana", 25);
        let mut snapshot = shop.current_order_snapshot().unwrap();
        snapshot.add_coffee("Latte", Size::Small, false, false);
        snapshot.set_customer("Mallory", 99);

        let current = shop.current_order_snapshot().unwrap();
        assert_eq!(0, current.item_count());
        assert_eq!("Ana", current.customer().name());
    }

    #[test]
    fn should_not_find_orders_in_an_empty_shop() {
        let shop = Shop::new();
        for number in [0, 10000, 55555, 89999] {
            assert_eq!(None, shop.find_order_index(number));
            assert_eq!(None, shop.order_total(number));
        }
        assert_eq!(
            Err(ShopError::OrderNotFound(12345)),
            shop.order_by_number(12345).map(|_| ())
        );
    }

    #[test]
    fn should_find_orders_and_their_totals() {
        let mut shop = shop_with_numbers(&[500, 100]);
        shop.add_coffee("Latte", Size::Large, true, true).unwrap();
        assert_eq!(Some(0), shop.find_order_index(500));
        assert_eq!(Some(1), shop.find_order_index(100));
        assert_eq!(Some(Money::ZERO), shop.order_total(500));
        assert_eq!(Some(Money::from_cents(500)), shop.order_total(100));
    }

    #[test]
    fn should_sum_monthly_total() {
        let mut shop = Shop::new();
        assert_eq!(Money::ZERO, shop.monthly_total());

        shop.start_new_order(10, Day::Monday, "Ana", 25);
        shop.add_coffee("Latte", Size::Small, true, true).unwrap();
        shop.add_coffee("Espresso", Size::Small, false, false).unwrap();
        shop.start_new_order(11, Day::Monday, "Bruno", 30);
        shop.add_smoothie("Berry", Size::Small, 4, true).unwrap();
        shop.add_alcohol("Beer", Size::Small).unwrap();

        assert_eq!(Money::from_cents(500), shop.order_at(0).total_price());
        assert_eq!(Money::from_cents(750), shop.order_at(1).total_price());
        assert_eq!(Money::from_cents(1250), shop.monthly_total());
    }

    #[test]
    fn should_sort_orders_by_number() {
        let mut shop = shop_with_numbers(&[500, 100, 300]);
        shop.sort_orders_by_number();
        let numbers: Vec<u32> = shop.orders().iter().map(Order::order_number).collect();
        assert_eq!(vec![100, 300, 500], numbers);
    }

    #[test]
    fn should_sort_equal_numbers_stably() {
        let mut shop = shop_with_numbers(&[300, 100, 300, 100]);
        shop.sort_orders_by_number();
        let customers: Vec<&str> = shop
            .orders()
            .iter()
            .map(|order| order.customer().name())
            .collect();
        assert_eq!(
            vec!["Customer 1", "Customer 3", "Customer 0", "Customer 2"],
            customers
        );
    }

    #[test]
    fn should_keep_the_current_order_after_sorting() {
        let mut shop = shop_with_numbers(&[500, 300, 100]);
        shop.sort_orders_by_number();
        shop.add_coffee("Latte", Size::Small, false, false).unwrap();

        assert_eq!(100, shop.current_order_snapshot().unwrap().order_number());
        assert_eq!(Some(0), shop.find_order_index(100));
        assert_eq!(1, shop.order_at(0).item_count());
    }

    #[test]
    fn should_reject_invalid_time_when_checked() {
        let mut shop = Shop::new();
        assert_eq!(
            Err(ShopError::InvalidTime(MAX_TIME + 1)),
            shop.start_new_order_checked(MAX_TIME + 1, Day::Monday, "Ana", 25)
        );
        assert_eq!(0, shop.order_count());
        assert_eq!(Ok(()), shop.start_new_order_checked(MIN_TIME, Day::Monday, "Ana", 25));
        assert_eq!(1, shop.order_count());
    }

    #[test]
    fn should_enforce_alcohol_rules_when_checked() {
        let mut shop = Shop::new();
        shop.start_new_order(10, Day::Friday, "Teen", 20);
        assert_eq!(
            Err(ShopError::UnderAge(20)),
            shop.add_alcohol_checked("Beer", Size::Small)
        );

        shop.start_new_order(10, Day::Friday, "Ana", 21);
        for _ in 0..3 {
            assert_eq!(Ok(()), shop.add_alcohol_checked("Beer", Size::Small));
        }
        assert_eq!(
            Err(ShopError::AlcoholLimitReached),
            shop.add_alcohol_checked("Beer", Size::Small)
        );
        assert_eq!(Some(3), shop.current_order_alcohol_count());
    }

    #[test]
    fn should_reject_full_smoothies_when_checked() {
        let mut shop = Shop::new();
        shop.start_new_order(10, Day::Monday, "Ana", 25);
        assert_eq!(
            Err(ShopError::FruitCountAtMax(6)),
            shop.add_smoothie_checked("Berry", Size::Small, 6, false)
        );
        assert_eq!(Ok(()), shop.add_smoothie_checked("Berry", Size::Small, 5, false));
        assert_eq!(1, shop.current_order_snapshot().unwrap().item_count());
    }

    #[test]
    fn should_list_every_order_with_the_grand_total() {
        let mut shop = shop_with_numbers(&[12345]);
        shop.add_coffee("Latte", Size::Small, false, false).unwrap();
        let listing = shop.to_string();
        assert!(listing.starts_with("Orders: Order Number: 12345"));
        assert!(listing.ends_with("Orders Total: 2.00"));
    }
}
