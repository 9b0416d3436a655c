//! Product list components.

mod card;
mod list;

pub use card::ProductCard;
pub use list::ProductList;
