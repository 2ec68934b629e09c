//! Repository seam between the HTTP layer and storage.

pub mod repository;
pub mod service;

pub use repository::{RosterRepository, SeaOrmRosterRepository};
pub use service::RosterService;
