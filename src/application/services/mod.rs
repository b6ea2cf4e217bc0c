//! Service implementations for the application layer.

pub mod contact_service;

pub use contact_service::ContactService;
