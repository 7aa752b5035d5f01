//! Page modules - the single mint page

pub mod home;

pub use home::HomePage;
