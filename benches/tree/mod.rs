pub mod delete;
pub mod generated_contains;
pub mod generated_insert;
