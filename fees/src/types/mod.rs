pub mod balance;
pub mod enums;
pub mod fee;
pub mod metadata;

pub use balance::*;
pub use enums::*;
pub use fee::*;
pub use metadata::*;
