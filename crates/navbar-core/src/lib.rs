pub mod class_list;
pub mod constants;
pub mod error;
pub mod host;
pub mod memory;
pub mod toggle;

pub use class_list::*;
pub use constants::*;
pub use error::*;
pub use host::*;
pub use memory::*;
pub use toggle::*;
