pub mod hash_service;

pub use hash_service::HashService;
