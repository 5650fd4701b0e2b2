//! Helpers shared by the services

pub mod domain;
mod domain_locks;

pub use domain_locks::DomainLocks;
