//! HTTP Handlers

mod book;
mod health;

pub use book::*;
pub use health::*;
