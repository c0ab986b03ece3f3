//! Global styles for the Answering Machine.

mod styles;

pub use styles::GLOBAL_STYLES;
