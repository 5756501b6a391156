use crate::auth::Credentials;
use crate::models::Roster;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
    pub credentials: Arc<Credentials>,
    pub roster: Arc<Mutex<Roster>>,
}

impl AppState {
    pub fn new(data_path: PathBuf, credentials: Credentials, roster: Roster) -> Self {
        Self {
            data_path,
            credentials: Arc::new(credentials),
            roster: Arc::new(Mutex::new(roster)),
        }
    }
}
