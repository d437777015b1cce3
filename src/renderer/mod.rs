pub mod bracket;
pub mod components;
pub mod traits;

pub use bracket::*;
pub use components::*;
pub use traits::*;
