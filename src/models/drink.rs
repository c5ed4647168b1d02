use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single drink offered by a venue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drink {
    pub name: String,
    pub price_minor: i64,
    pub drink_type: String,
}

impl Drink {
    /// Create a new drink; the price is given in minor currency units (cents)
    pub fn new(name: String, price_minor: i64, drink_type: String) -> Self {
        Self {
            name,
            price_minor,
            drink_type,
        }
    }

    /// Price as a major-currency decimal value (minor units divided by 100)
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_minor, 2)
    }
}
