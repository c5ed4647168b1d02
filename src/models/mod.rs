// Re-export all model types
pub use self::drink::*;
pub use self::venue::*;

mod drink;
mod venue;
