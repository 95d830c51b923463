//! Proposal service
//!
//! Validates proposal payloads and runs them against the repository. The
//! HTTP handlers only translate between transfer objects and this layer.

use crate::service::error::{Result as ServiceResult, ServiceError};
use crate::{ProposalCreateRequest, ProposalUpdateRequest};

use proposta_config::ValidationConfig;
use proposta_core::{NewProposal, Proposal, ProposalStatus};
use proposta_db::ProposalRepository;

use std::panic::Location;
use std::str::FromStr;

use chrono::{SubsecRound, Utc};
use error_location::ErrorLocation;
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct ProposalService {
    repo: ProposalRepository,
    validation: ValidationConfig,
}

impl ProposalService {
    pub fn new(pool: SqlitePool, validation: ValidationConfig) -> Self {
        Self {
            repo: ProposalRepository::new(pool),
            validation,
        }
    }

    /// Register a new proposal.
    pub async fn create_proposal(&self, req: &ProposalCreateRequest) -> ServiceResult<Proposal> {
        if let Some(id) = req.id {
            validate_id(id)?;
        }

        let new = NewProposal {
            id: req.id,
            titulo: self.validate_titulo(&req.titulo)?,
            descricao: self.validate_descricao(req.descricao.as_deref())?,
            valor: validate_valor(req.valor)?,
            funcionario_id: req.funcionario_id,
            status: parse_status(req.status.as_deref())?.unwrap_or_default(),
        };

        let proposal = self.repo.create(&new).await?;
        log::info!("Registered proposta {} ({})", proposal.id, proposal.titulo);

        Ok(proposal)
    }

    pub async fn list_proposals(&self) -> ServiceResult<Vec<Proposal>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn get_proposal(&self, id: i64) -> ServiceResult<Proposal> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(id))
    }

    /// Apply the fields present in `req` to proposal `id`.
    ///
    /// Never creates: an unknown id is `NotFound`.
    pub async fn update_proposal(
        &self,
        id: i64,
        req: &ProposalUpdateRequest,
    ) -> ServiceResult<Proposal> {
        if let Some(body_id) = req.id
            && body_id != id
        {
            return Err(ServiceError::Mismatch {
                message: format!(
                    "Proposta id in body ({}) does not match id in path ({})",
                    body_id, id
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let titulo = req
            .titulo
            .as_deref()
            .map(|t| self.validate_titulo(t))
            .transpose()?;
        let descricao = self.validate_descricao(req.descricao.as_deref())?;
        let valor = validate_valor(req.valor)?;
        let status = parse_status(req.status.as_deref())?;

        let mut proposal = self.get_proposal(id).await?;

        if let Some(titulo) = titulo {
            proposal.titulo = titulo;
        }
        if descricao.is_some() {
            proposal.descricao = descricao;
        }
        if valor.is_some() {
            proposal.valor = valor;
        }
        if req.funcionario_id.is_some() {
            proposal.funcionario_id = req.funcionario_id;
        }
        if let Some(status) = status {
            proposal.status = status;
        }
        proposal.updated_at = Utc::now().trunc_subsecs(0);

        // Deleted between the read and the write
        if !self.repo.update(&proposal).await? {
            return Err(ServiceError::not_found(id));
        }

        log::info!("Updated proposta {}", id);
        Ok(proposal)
    }

    pub async fn delete_proposal(&self, id: i64) -> ServiceResult<()> {
        if !self.repo.delete(id).await? {
            return Err(ServiceError::not_found(id));
        }

        log::info!("Deleted proposta {}", id);
        Ok(())
    }

    /// Returns the title exactly as submitted; only blankness is checked on the trimmed form.
    fn validate_titulo(&self, titulo: &str) -> ServiceResult<String> {
        if titulo.trim().is_empty() {
            return Err(ServiceError::validation(
                "Proposta titulo cannot be empty",
                "titulo",
            ));
        }

        if titulo.chars().count() > self.validation.max_title_length {
            return Err(ServiceError::validation(
                format!(
                    "Proposta titulo exceeds {} characters",
                    self.validation.max_title_length
                ),
                "titulo",
            ));
        }

        Ok(titulo.to_string())
    }

    fn validate_descricao(&self, descricao: Option<&str>) -> ServiceResult<Option<String>> {
        match descricao {
            Some(d) if d.chars().count() > self.validation.max_description_length => {
                Err(ServiceError::validation(
                    format!(
                        "Proposta descricao exceeds {} characters",
                        self.validation.max_description_length
                    ),
                    "descricao",
                ))
            }
            Some(d) => Ok(Some(d.to_string())),
            None => Ok(None),
        }
    }
}

fn validate_id(id: i64) -> ServiceResult<()> {
    if id <= 0 {
        return Err(ServiceError::validation(
            format!("Proposta id must be positive, got {}", id),
            "id",
        ));
    }
    Ok(())
}

fn validate_valor(valor: Option<f64>) -> ServiceResult<Option<f64>> {
    match valor {
        Some(v) if !v.is_finite() || v < 0.0 => Err(ServiceError::validation(
            format!("Proposta valor must be a non-negative number, got {}", v),
            "valor",
        )),
        other => Ok(other),
    }
}

fn parse_status(status: Option<&str>) -> ServiceResult<Option<ProposalStatus>> {
    status
        .map(|s| {
            ProposalStatus::from_str(s).map_err(|_| {
                ServiceError::validation(
                    format!(
                        "Invalid status '{}': expected pendente, aprovada or recusada",
                        s
                    ),
                    "status",
                )
            })
        })
        .transpose()
}
