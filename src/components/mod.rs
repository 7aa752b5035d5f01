//! UI Components

pub mod flip_card;
pub mod navbar;

pub use flip_card::{BackCard, FlipCard, FrontCard};
pub use navbar::Navbar;
