//! Proposal REST API handlers
//!
//! Thin translation between HTTP and [`ProposalService`](crate::ProposalService).

use crate::{
    ApiJson, ApiResult, AppState, ProposalCreateRequest, ProposalDto, ProposalUpdateRequest,
};

use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// POST /api/v1/propostas
///
/// Responds 201 with the submitted body and a `Location` naming the stored id.
pub async fn create_proposal(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<ProposalCreateRequest>,
) -> ApiResult<Response> {
    let proposal = state.proposals.create_proposal(&req).await?;
    let location = format!("/api/v1/propostas/{}", proposal.id);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(req)).into_response())
}

/// GET /api/v1/propostas
pub async fn list_proposals(State(state): State<AppState>) -> ApiResult<Json<Vec<ProposalDto>>> {
    let proposals = state.proposals.list_proposals().await?;

    Ok(Json(proposals.into_iter().map(ProposalDto::from).collect()))
}

/// GET /api/v1/propostas/{id}
pub async fn get_proposal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ProposalDto>> {
    let id: i64 = id.parse()?;
    let proposal = state.proposals.get_proposal(id).await?;

    Ok(Json(proposal.into()))
}

/// PUT /api/v1/propostas/{id}
///
/// Partial update; fields absent from the body keep their stored value.
pub async fn update_proposal(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<ProposalUpdateRequest>,
) -> ApiResult<Json<ProposalDto>> {
    let id: i64 = id.parse()?;
    let proposal = state.proposals.update_proposal(id, &req).await?;

    Ok(Json(proposal.into()))
}

/// DELETE /api/v1/propostas/{id}
pub async fn delete_proposal(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id: i64 = id.parse()?;
    state.proposals.delete_proposal(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
