//! User management service module

mod service;

#[cfg(test)]
mod tests;

pub use service::{UserService, UserUpdate};
