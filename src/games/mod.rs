//! Game implementations.

pub mod impostor;
