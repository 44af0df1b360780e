pub mod click;
pub mod keyboard;

pub use click::wire_burger_triggers;
pub use keyboard::wire_escape_dismiss;
