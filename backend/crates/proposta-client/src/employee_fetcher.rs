use crate::ClientResult;

use proposta_core::Employee;

use async_trait::async_trait;

/// Read-only lookup of employees by id.
///
/// Implementations report an unknown id as [`crate::ClientError::NotFound`].
#[async_trait]
pub trait EmployeeFetcher: Send + Sync {
    async fn fetch_employee(&self, id: i64) -> ClientResult<Employee>;
}
