pub mod active;
pub mod href;
pub mod loader;
pub mod normalize;
pub mod types;

pub use active::*;
pub use href::*;
pub use loader::*;
pub use normalize::*;
pub use types::*;
