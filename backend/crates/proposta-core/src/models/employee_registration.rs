use serde::{Deserialize, Serialize};

/// Payload the employee service expects when registering an employee.
///
/// Every field is mandatory: deserialization fails when any of them is
/// absent or `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRegistration {
    pub id: i64,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNasc")]
    pub birth_date: String,
    pub cpf: String,
    #[serde(rename = "sexo")]
    pub sex: String,
}

impl EmployeeRegistration {
    pub fn new(id: i64, name: String, birth_date: String, cpf: String, sex: String) -> Self {
        Self {
            id,
            name,
            birth_date,
            cpf,
            sex,
        }
    }
}
