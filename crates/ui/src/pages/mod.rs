//! Page components. Pure display: each interpolates the render mode into
//! its heading and adds one static descriptive line.

mod about;
mod contact;
mod home;

pub use about::About;
pub use contact::Contact;
pub use home::Home;
