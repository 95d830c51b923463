#![allow(dead_code)]

mod test_db;

pub use fixtures::create_test_proposal;
pub use test_db::create_test_pool;
