pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod service;

#[cfg(test)]
mod tests;

pub use api::{
    employees::employees::get_employee,
    error::ApiError,
    error::Result as ApiResult,
    error::{ApiErrorBody, ApiErrorResponse},
    extractors::api_json::ApiJson,
    proposals::{
        create_proposal_request::ProposalCreateRequest,
        proposal_dto::ProposalDto,
        proposals::{
            create_proposal, delete_proposal, get_proposal, list_proposals, update_proposal,
        },
        update_proposal_request::ProposalUpdateRequest,
    },
};
pub use app_state::AppState;
pub use error::{Result as ServerResult, ServerError};
pub use service::{
    error::{Result as ServiceResult, ServiceError},
    proposal_service::ProposalService,
};

pub use crate::routes::build_router;
