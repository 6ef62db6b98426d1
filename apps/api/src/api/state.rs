use std::sync::Arc;

use crate::application::RosterService;
use crate::auth::admin::AdminAccount;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub roster: Arc<RosterService>,
    pub admin: Arc<AdminAccount>,
    pub jwt_secret: Arc<str>,
}

impl AppState {
    pub fn new(roster: RosterService, admin: AdminAccount, jwt_secret: &str) -> Self {
        Self {
            roster: Arc::new(roster),
            admin: Arc::new(admin),
            jwt_secret: Arc::from(jwt_secret),
        }
    }
}
