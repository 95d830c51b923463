pub mod employees;
pub mod error;
pub mod extractors;
pub mod proposals;
