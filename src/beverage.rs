//! Bebidas que se pueden pedir en la tienda y sus reglas de precio.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        EXTRA_SHOT_CENTS, EXTRA_SYRUP_CENTS, FRUIT_CENTS, LARGE_PRICE_CENTS, MEDIUM_PRICE_CENTS,
        PROTEIN_CENTS, SMALL_PRICE_CENTS, WEEKEND_CHARGE_CENTS,
    },
    money::Money,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Precio base segun el tamaño
    pub fn base_price(&self) -> Money {
        match self {
            Size::Small => Money::from_cents(SMALL_PRICE_CENTS),
            Size::Medium => Money::from_cents(MEDIUM_PRICE_CENTS),
            Size::Large => Money::from_cents(LARGE_PRICE_CENTS),
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        };
        write!(f, "{}", name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BeverageKind {
    Coffee,
    Alcoholic,
    Smoothie,
}

impl fmt::Display for BeverageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BeverageKind::Coffee => "Coffee",
            BeverageKind::Alcoholic => "Alcoholic",
            BeverageKind::Smoothie => "Smoothie",
        };
        write!(f, "{}", name)
    }
}

/// Opciones propias de cada tipo de bebida. El tipo queda fijo al construir la bebida.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recipe {
    Coffee { extra_shot: bool, extra_syrup: bool },
    Alcohol { weekend_availability: bool },
    Smoothie { protein: bool, fruit_count: u32 },
}

impl Recipe {
    pub fn kind(&self) -> BeverageKind {
        match self {
            Recipe::Coffee { .. } => BeverageKind::Coffee,
            Recipe::Alcohol { .. } => BeverageKind::Alcoholic,
            Recipe::Smoothie { .. } => BeverageKind::Smoothie,
        }
    }

    fn surcharge(&self) -> Money {
        match *self {
            Recipe::Coffee {
                extra_shot,
                extra_syrup,
            } => {
                let mut surcharge = Money::ZERO;
                if extra_shot {
                    surcharge += Money::from_cents(EXTRA_SHOT_CENTS);
                }
                if extra_syrup {
                    surcharge += Money::from_cents(EXTRA_SYRUP_CENTS);
                }
                surcharge
            }
            Recipe::Alcohol {
                weekend_availability,
            } => {
                if weekend_availability {
                    Money::from_cents(WEEKEND_CHARGE_CENTS)
                } else {
                    Money::ZERO
                }
            }
            Recipe::Smoothie {
                protein,
                fruit_count,
            } => {
                let fruits = Money::from_cents(FRUIT_CENTS) * fruit_count;
                if protein {
                    fruits + Money::from_cents(PROTEIN_CENTS)
                } else {
                    fruits
                }
            }
        }
    }
}

/// Una bebida de un pedido: nombre, tamaño y las opciones de su tipo.
/// Dos bebidas son iguales solo si son del mismo tipo y coinciden todos sus campos.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beverage {
    name: String,
    size: Size,
    recipe: Recipe,
}

impl Beverage {
    pub fn coffee(name: &str, size: Size, extra_shot: bool, extra_syrup: bool) -> Beverage {
        Beverage {
            name: name.to_string(),
            size,
            recipe: Recipe::Coffee {
                extra_shot,
                extra_syrup,
            },
        }
    }

    pub fn alcohol(name: &str, size: Size, weekend_availability: bool) -> Beverage {
        Beverage {
            name: name.to_string(),
            size,
            recipe: Recipe::Alcohol {
                weekend_availability,
            },
        }
    }

    pub fn smoothie(name: &str, size: Size, protein: bool, fruit_count: u32) -> Beverage {
        Beverage {
            name: name.to_string(),
            size,
            recipe: Recipe::Smoothie {
                protein,
                fruit_count,
            },
        }
    }

    /// Precio final: el precio base del tamaño mas los recargos del tipo de bebida
    pub fn calc_price(&self) -> Money {
        self.size.base_price() + self.recipe.surcharge()
    }

    /// Precio base de cualquier bebida, sin tener en cuenta el tamaño
    pub fn base_price(&self) -> Money {
        Money::from_cents(SMALL_PRICE_CENTS)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> BeverageKind {
        self.recipe.kind()
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    /// Acceso a las opciones para corregirlas. No se puede cambiar el tipo de bebida.
    pub fn recipe_mut(&mut self) -> RecipeMut<'_> {
        RecipeMut(&mut self.recipe)
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Corrige la disponibilidad de fin de semana. Devuelve `false` si la bebida no es alcoholica.
    pub fn set_weekend_availability(&mut self, availability: bool) -> bool {
        match &mut self.recipe {
            Recipe::Alcohol {
                weekend_availability,
            } => {
                *weekend_availability = availability;
                true
            }
            _ => false,
        }
    }
}

/// Vista mutable de las opciones que no permite reemplazar la variante.
pub struct RecipeMut<'a>(&'a mut Recipe);

impl RecipeMut<'_> {
    pub fn set_extra_shot(&mut self, value: bool) -> bool {
        if let Recipe::Coffee { extra_shot, .. } = &mut *self.0 {
            *extra_shot = value;
            return true;
        }
        false
    }

    pub fn set_extra_syrup(&mut self, value: bool) -> bool {
        if let Recipe::Coffee { extra_syrup, .. } = &mut *self.0 {
            *extra_syrup = value;
            return true;
        }
        false
    }

    pub fn set_protein(&mut self, value: bool) -> bool {
        if let Recipe::Smoothie { protein, .. } = &mut *self.0 {
            *protein = value;
            return true;
        }
        false
    }

    pub fn set_fruit_count(&mut self, value: u32) -> bool {
        if let Recipe::Smoothie { fruit_count, .. } = &mut *self.0 {
            *fruit_count = value;
            return true;
        }
        false
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for Beverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Beverage Name: {}, Type: {}, Size: {}, ",
            self.name,
            self.kind(),
            self.size
        )?;
        match &self.recipe {
            Recipe::Coffee {
                extra_shot,
                extra_syrup,
            } => write!(
                f,
                "Extra Shot: {}, Extra Syrup: {}",
                yes_no(*extra_shot),
                yes_no(*extra_syrup)
            )?,
            Recipe::Alcohol {
                weekend_availability,
            } => write!(f, "Weekend Availability: {}", yes_no(*weekend_availability))?,
            Recipe::Smoothie {
                protein,
                fruit_count,
            } => write!(f, "Protein: {}, Fruits: {}", yes_no(*protein), fruit_count)?,
        }
        write!(f, ", Price: {}", self.calc_price())
    }
}
