use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::roster::{RosterService, SeaOrmRosterRepository};

/// Shared handler state, built once at startup from an open pool.
#[derive(Clone)]
pub struct ServerState {
    pub roster: Arc<RosterService<SeaOrmRosterRepository>>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = SeaOrmRosterRepository::new(db);
        Self { roster: Arc::new(RosterService::new(Arc::new(repo))) }
    }
}
