mod add;
mod bill;
mod category;
mod product;
mod user;

pub use add::*;
pub use bill::*;
pub use category::*;
pub use product::*;
pub use user::*;
