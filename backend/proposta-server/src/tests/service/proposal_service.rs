use crate::{ProposalCreateRequest, ProposalService, ProposalUpdateRequest, ServiceError};

use proposta_config::ValidationConfig;
use proposta_core::ProposalStatus;

use googletest::assert_that;
use googletest::prelude::{anything, gt, ok};
use sqlx::sqlite::SqlitePoolOptions;

async fn create_service() -> ProposalService {
    // One connection: every :memory: connection is its own database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    proposta_db::run_migrations(&pool).await.unwrap();

    ProposalService::new(pool, ValidationConfig::default())
}

fn create_request(titulo: &str) -> ProposalCreateRequest {
    ProposalCreateRequest {
        id: None,
        titulo: titulo.to_string(),
        descricao: None,
        valor: None,
        funcionario_id: None,
        status: None,
    }
}

#[tokio::test]
async fn given_minimal_request_when_created_then_defaults_to_pendente() {
    let service = create_service().await;

    let proposal = service
        .create_proposal(&create_request("Reforma"))
        .await
        .unwrap();

    assert_eq!(proposal.titulo, "Reforma");
    assert_eq!(proposal.status, ProposalStatus::Pendente);
    assert_that!(proposal.id, gt(0));
}

#[tokio::test]
async fn given_padded_titulo_when_created_then_stored_unchanged() {
    let service = create_service().await;

    let created = service
        .create_proposal(&create_request("  Reforma  "))
        .await
        .unwrap();
    let stored = service.get_proposal(created.id).await.unwrap();

    assert_eq!(created.titulo, "  Reforma  ");
    assert_eq!(stored.titulo, "  Reforma  ");
}

#[tokio::test]
async fn given_blank_titulo_when_created_then_validation_on_titulo() {
    let service = create_service().await;

    let result = service.create_proposal(&create_request("   ")).await;

    match result {
        Err(ServiceError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("titulo"))
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn given_negative_valor_when_created_then_validation_on_valor() {
    let service = create_service().await;
    let mut req = create_request("Reforma");
    req.valor = Some(-1.0);

    let result = service.create_proposal(&req).await;

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}

#[tokio::test]
async fn given_unknown_status_when_created_then_validation_on_status() {
    let service = create_service().await;
    let mut req = create_request("Reforma");
    req.status = Some("arquivada".into());

    let result = service.create_proposal(&req).await;

    match result {
        Err(ServiceError::Validation { field, .. }) => {
            assert_eq!(field.as_deref(), Some("status"))
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn given_existing_id_when_created_again_then_conflict() {
    let service = create_service().await;
    let mut req = create_request("Reforma");
    req.id = Some(10);
    service.create_proposal(&req).await.unwrap();

    let result = service.create_proposal(&req).await;

    assert!(matches!(result, Err(ServiceError::Conflict { .. })));
}

#[tokio::test]
async fn given_titulo_over_limit_when_created_then_validation() {
    let service = create_service().await;
    let long = "x".repeat(ValidationConfig::default().max_title_length + 1);

    let result = service.create_proposal(&create_request(&long)).await;

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}

#[tokio::test]
async fn given_partial_update_when_applied_then_other_fields_unchanged() {
    let service = create_service().await;
    let mut req = create_request("Reforma");
    req.descricao = Some("Telhado".into());
    req.valor = Some(1500.0);
    let created = service.create_proposal(&req).await.unwrap();

    let update = ProposalUpdateRequest {
        status: Some("aprovada".into()),
        ..Default::default()
    };
    let updated = service.update_proposal(created.id, &update).await.unwrap();

    assert_eq!(updated.status, ProposalStatus::Aprovada);
    assert_eq!(updated.titulo, "Reforma");
    assert_eq!(updated.descricao.as_deref(), Some("Telhado"));
    assert_eq!(updated.valor, Some(1500.0));
    assert_eq!(updated.created_at, created.created_at);

    let stored = service.get_proposal(created.id).await.unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn given_mismatched_body_id_when_updated_then_mismatch_before_not_found() {
    let service = create_service().await;

    let update = ProposalUpdateRequest {
        id: Some(2),
        ..Default::default()
    };
    let result = service.update_proposal(1, &update).await;

    assert!(matches!(result, Err(ServiceError::Mismatch { .. })));
}

#[tokio::test]
async fn given_invalid_field_when_updating_unknown_id_then_validation_before_not_found() {
    let service = create_service().await;

    let update = ProposalUpdateRequest {
        titulo: Some(String::new()),
        ..Default::default()
    };
    let result = service.update_proposal(99, &update).await;

    assert!(matches!(result, Err(ServiceError::Validation { .. })));
}

#[tokio::test]
async fn given_unknown_id_when_updated_then_not_found_and_nothing_created() {
    let service = create_service().await;

    let update = ProposalUpdateRequest {
        titulo: Some("Nova".into()),
        ..Default::default()
    };
    let result = service.update_proposal(99, &update).await;

    assert!(matches!(result, Err(ServiceError::NotFound { .. })));
    assert!(service.list_proposals().await.unwrap().is_empty());
}

#[tokio::test]
async fn given_existing_proposal_when_deleted_then_gone() {
    let service = create_service().await;
    let created = service
        .create_proposal(&create_request("Reforma"))
        .await
        .unwrap();

    assert_that!(service.delete_proposal(created.id).await, ok(anything()));

    assert!(matches!(
        service.get_proposal(created.id).await,
        Err(ServiceError::NotFound { .. })
    ));
    assert!(matches!(
        service.delete_proposal(created.id).await,
        Err(ServiceError::NotFound { .. })
    ));
}
