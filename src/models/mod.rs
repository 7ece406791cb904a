pub mod cart;
pub mod offer;
pub mod product;
pub mod user;

pub use cart::*;
pub use offer::*;
pub use product::*;
pub use user::*;
