pub mod star_button;

pub use star_button::{StarButton, StarButtonArgs, StarButtonHandle, StarButtonMessage, StarButtonRef};
