//! Page components for the Answering Machine.

mod compose;
mod home;
mod landing;

pub use compose::Compose;
pub use home::Home;
pub use landing::Landing;
