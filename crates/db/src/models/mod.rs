//! Row models and DTOs, one submodule per table.

pub mod game;
