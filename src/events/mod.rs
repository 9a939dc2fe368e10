mod client;
pub use client::*;
mod record;
pub use record::*;
