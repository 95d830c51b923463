//! Employee record as served by the remote employee service.

use serde::{Deserialize, Serialize};

/// An employee owned by the employee service.
///
/// Only ever held as the transient result of a lookup. Field names on the
/// wire follow the employee service (`nome`, `dataNasc`, `cpf`, `sexo`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    /// Birth date, kept in whatever string encoding the employee service uses
    #[serde(rename = "dataNasc")]
    pub birth_date: String,
    /// National id (CPF)
    pub cpf: String,
    #[serde(rename = "sexo")]
    pub sex: String,
}
