//! Shared DTOs between the seller dashboard frontend and the REST backend.

pub mod domain;
pub mod shared;
pub mod system;
