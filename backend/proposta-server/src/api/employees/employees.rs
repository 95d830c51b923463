use crate::{ApiResult, AppState};

use proposta_core::Employee;

use axum::{
    Json,
    extract::{Path, State},
};

/// GET /api/v1/propostas/funcionarios/{id}
///
/// Passes the employee record from the employee service through unchanged.
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Employee>> {
    let id: i64 = id.parse()?;
    let employee = state.employees.fetch_employee(id).await?;

    Ok(Json(employee))
}
