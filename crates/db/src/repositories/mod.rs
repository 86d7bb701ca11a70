//! Repositories wrapping the SQL for each table.
//!
//! Repositories are zero-sized structs with associated async functions that
//! take the pool as their first argument.

pub mod game_repo;

pub use game_repo::GameRepo;
