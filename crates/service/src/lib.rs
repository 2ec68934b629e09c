//! Service layer providing the hero/power operations on top of models.
//! - Every write runs inside one transaction; validation failures roll it back.
//! - Reuses validation and entity definitions in `models` crate.
//! - `roster` exposes the operations behind a repository trait for the server.

pub mod errors;
pub mod db;
pub mod roster;
pub mod seed;
#[cfg(test)]
pub mod test_support;
