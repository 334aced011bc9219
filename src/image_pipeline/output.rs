//! Output module
//!
//! Frame file naming and crash-safe writes.

mod template;
mod atomic;

pub use template::OutputTemplate;
pub use atomic::write_atomically;
