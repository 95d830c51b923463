use crate::ProposalService;

use proposta_client::EmployeeFetcher;
use proposta_config::ValidationConfig;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state for REST handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub proposals: ProposalService,
    pub employees: Arc<dyn EmployeeFetcher>,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        validation: ValidationConfig,
        employees: Arc<dyn EmployeeFetcher>,
    ) -> Self {
        Self {
            proposals: ProposalService::new(pool.clone(), validation),
            pool,
            employees,
        }
    }
}
