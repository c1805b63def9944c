use std::{error::Error, fmt};

#[derive(Debug, PartialEq, Eq)]
pub enum ShopError {
    NoActiveOrder,
    InvalidTime(u32),
    UnderAge(u32),
    AlcoholLimitReached,
    FruitCountAtMax(u32),
    OrderNotFound(u32),
    FileReaderError,
}

impl fmt::Display for ShopError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopError::NoActiveOrder => write!(f, "no order has been started"),
            ShopError::InvalidTime(time) => write!(f, "{} is not a valid order time", time),
            ShopError::UnderAge(age) => write!(f, "customer aged {} cannot order alcohol", age),
            ShopError::AlcoholLimitReached => write!(f, "alcohol limit reached"),
            ShopError::FruitCountAtMax(count) => {
                write!(f, "{} fruits is already at the maximum", count)
            }
            ShopError::OrderNotFound(number) => write!(f, "order {} not found", number),
            ShopError::FileReaderError => write!(f, "could not read the orders file"),
        }
    }
}

impl Error for ShopError {}

impl From<std::io::Error> for ShopError {
    fn from(_: std::io::Error) -> Self {
        ShopError::FileReaderError
    }
}

impl From<serde_json::Error> for ShopError {
    fn from(_: serde_json::Error) -> Self {
        ShopError::FileReaderError
    }
}
