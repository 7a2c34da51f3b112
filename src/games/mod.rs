//! Game implementations built on the engine components.

pub mod blind;
