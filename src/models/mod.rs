pub mod color_slots;
pub mod request;
pub mod result;

pub use color_slots::*;
pub use request::*;
pub use result::*;
