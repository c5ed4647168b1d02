use cafebar_rs::models::{Drink, Venue};
use once_cell::sync::Lazy;
use tracing_subscriber::EnvFilter;

static TRACING: Lazy<()> = Lazy::new(|| {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cafebar_rs=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init()
        .ok();
});

/// Install the shared test subscriber once per test process
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

pub fn my_amazing_cafe() -> Venue {
    Venue::new("My Amazing Cafe".to_string(), "Edinburgh".to_string())
}

pub fn my_amazing_bar() -> Venue {
    Venue::new("My Amazing Bar".to_string(), "Edinburgh".to_string())
}

pub fn mojito() -> Drink {
    Drink::new("Mojito".to_string(), 450, "Cocktail".to_string())
}

pub fn mocha() -> Drink {
    Drink::new("Mocha".to_string(), 899, "Coffee".to_string())
}

pub fn screwdriver() -> Drink {
    Drink::new("Screwdriver".to_string(), 899, "Cocktail".to_string())
}
