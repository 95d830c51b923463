//! Proposal repository for CRUD operations on `propostas`.
//!
//! Ids are assigned by SQLite (`AUTOINCREMENT`) unless the caller supplies
//! one, in which case an existing row with that id is reported as
//! [`DbError::Duplicate`]. Deletes are hard deletes.

use crate::{DbError, Result as DbErrorResult};

use proposta_core::{NewProposal, Proposal, ProposalStatus};

use std::panic::Location;
use std::str::FromStr;

use chrono::{DateTime, SubsecRound, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

const SELECT_COLUMNS: &str = r#"
    SELECT id, titulo, descricao, valor, funcionario_id, status, created_at, updated_at
    FROM propostas
"#;

#[derive(Clone)]
pub struct ProposalRepository {
    pool: SqlitePool,
}

impl ProposalRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a proposal and return the stored row.
    pub async fn create(&self, new: &NewProposal) -> DbErrorResult<Proposal> {
        // Stored with second precision, keep the returned value identical.
        let now = Utc::now().trunc_subsecs(0);
        let timestamp = now.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO propostas (
                    id, titulo, descricao, valor, funcionario_id, status,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.id)
        .bind(&new.titulo)
        .bind(&new.descricao)
        .bind(new.valor)
        .bind(new.funcionario_id)
        .bind(new.status.as_str())
        .bind(timestamp)
        .bind(timestamp)
        .execute(&self.pool)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(sqlx::Error::Database(ref e)) if e.is_unique_violation() => {
                return Err(DbError::Duplicate {
                    id: new.id.unwrap_or_default(),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            Err(e) => return Err(DbError::from(e)),
        };

        let id = new.id.unwrap_or_else(|| result.last_insert_rowid());

        Ok(Proposal::from_new(id, new, now))
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Proposal>> {
        let row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(proposal_from_row).transpose()
    }

    /// All proposals in insertion (id) order.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Proposal>> {
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(proposal_from_row)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Overwrite the mutable columns of an existing proposal.
    ///
    /// Returns `false` when no row has the proposal's id.
    pub async fn update(&self, proposal: &Proposal) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE propostas
                SET titulo = ?, descricao = ?, valor = ?, funcionario_id = ?,
                    status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&proposal.titulo)
        .bind(&proposal.descricao)
        .bind(proposal.valor)
        .bind(proposal.funcionario_id)
        .bind(proposal.status.as_str())
        .bind(proposal.updated_at.timestamp())
        .bind(proposal.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns `false` when no row had this id.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM propostas WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn proposal_from_row(row: &SqliteRow) -> DbErrorResult<Proposal> {
    let status: String = row.try_get("status")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Proposal {
        id: row.try_get("id")?,
        titulo: row.try_get("titulo")?,
        descricao: row.try_get("descricao")?,
        valor: row.try_get("valor")?,
        funcionario_id: row.try_get("funcionario_id")?,
        status: ProposalStatus::from_str(&status).map_err(|e| DbError::Initialization {
            message: format!("Invalid ProposalStatus in propostas.status: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?,
        created_at: timestamp_to_datetime(created_at, "created_at")?,
        updated_at: timestamp_to_datetime(updated_at, "updated_at")?,
    })
}

fn timestamp_to_datetime(ts: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(ts, 0).ok_or_else(|| DbError::Initialization {
        message: format!("Invalid timestamp in propostas.{}", column),
        location: ErrorLocation::from(Location::caller()),
    })
}
