use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::upload::ImageStore;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub pool: PgPool,
    pub config: Config,
    pub images: Arc<dyn ImageStore>,
}
