//! Public API: the [`ImageHasher`] builder and the [`PhashError`] unified
//! error type.

mod builder;
mod error;

pub use builder::ImageHasher;
pub use error::PhashError;
