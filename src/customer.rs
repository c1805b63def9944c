use std::fmt;

use serde::{Deserialize, Serialize};

/// Cliente al que pertenece un pedido. Cada pedido guarda su propia copia.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    name: String,
    age: u32,
}

impl Customer {
    pub fn new(name: &str, age: u32) -> Customer {
        Customer {
            name: name.to_string(),
            age,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customer Name: {}, Customer Age: {}", self.name, self.age)
    }
}
