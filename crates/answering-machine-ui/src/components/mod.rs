//! Reusable form and feedback components

mod button;
mod feedback;
mod input;

pub use button::*;
pub use feedback::*;
pub use input::*;
