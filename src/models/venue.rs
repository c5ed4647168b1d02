use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::Drink;

/// A venue serving drinks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub name: String,
    pub location: String,
    pub drinks: Vec<Drink>,
}

/// A cafe is a venue
pub type Cafe = Venue;

/// A bar is a venue
pub type Bar = Venue;

impl Venue {
    /// Create a new venue with an empty menu
    ///
    /// Every venue owns its own drink list; venues created without drinks
    /// never share one underlying sequence.
    pub fn new(name: String, location: String) -> Self {
        Self {
            name,
            location,
            drinks: Vec::new(),
        }
    }

    /// Create a new venue with an initial menu
    pub fn with_drinks(name: String, location: String, drinks: Vec<Drink>) -> Self {
        Self {
            name,
            location,
            drinks,
        }
    }

    /// Append a drink to the end of the menu
    ///
    /// Duplicates are permitted; adding an equal drink twice lists it twice.
    pub fn add_drink(&mut self, drink: Drink) {
        debug!(venue = %self.name, drink = %drink.name, "adding drink to menu");
        self.drinks.push(drink);
    }

    /// Get the number of drinks on the menu
    pub fn drink_count(&self) -> usize {
        self.drinks.len()
    }

    /// Check if the menu is empty
    pub fn is_empty(&self) -> bool {
        self.drinks.is_empty()
    }

    /// Get the total price of all drinks on the menu
    pub fn total_price(&self) -> Decimal {
        self.drinks.iter().map(Drink::price).sum()
    }

    /// Check if a drink with the given name is on the menu
    pub fn contains_drink(&self, name: &str) -> bool {
        self.drinks
            .iter()
            .any(|drink| drink.name.eq_ignore_ascii_case(name))
    }

    /// Get the first drink with the given name, in menu order
    pub fn get_drink(&self, name: &str) -> Option<&Drink> {
        self.drinks
            .iter()
            .find(|drink| drink.name.eq_ignore_ascii_case(name))
    }

    /// Get all drinks of the given type, in menu order
    pub fn drinks_by_type(&self, drink_type: &str) -> Vec<&Drink> {
        self.drinks
            .iter()
            .filter(|drink| drink.drink_type.eq_ignore_ascii_case(drink_type))
            .collect()
    }
}
