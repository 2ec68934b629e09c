//! SeaORM entities for heroes, powers and the hero/power association,
//! together with the field validators applied before every write.

pub mod errors;
pub mod db;
pub mod hero;
pub mod power;
pub mod hero_power;

#[cfg(test)]
mod tests;
