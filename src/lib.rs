pub mod models;

pub use models::{Bar, Cafe, Drink, Venue};
