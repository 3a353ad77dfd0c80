//! Clients for external collaborators.

pub mod backend;
