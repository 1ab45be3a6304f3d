use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Router state: the core plus the service kind this process runs as.
pub type AppState = Arc<AxumContext>;
