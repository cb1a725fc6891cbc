pub mod flight;
pub mod input;
pub mod keeper;
pub mod kick;
pub mod outcome;

pub use flight::*;
pub use input::*;
pub use keeper::*;
pub use kick::*;
pub use outcome::*;
