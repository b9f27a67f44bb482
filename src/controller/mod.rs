pub mod health;
pub mod roast;
