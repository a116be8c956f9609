pub mod error;
pub mod pipeline;
pub mod plot;
pub mod trace;

pub use error::{Error, Result};

#[cfg(test)]
mod test;
