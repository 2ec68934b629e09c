//! Transactional operations over the SeaORM entities, one module per table.

pub mod hero_service;
pub mod power_service;
pub mod hero_power_service;
