//! Client side of the employee (funcionario) service.
//!
//! [`EmployeeFetcher`] is the capability the HTTP layer depends on;
//! [`FuncionarioClient`] implements it over HTTP.

mod employee_fetcher;
mod error;
mod funcionario_client;

pub use employee_fetcher::EmployeeFetcher;
pub use error::{ClientError, Result as ClientResult};
pub use funcionario_client::FuncionarioClient;
