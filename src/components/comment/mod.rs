//! Product comment components.

mod form;
mod list;

pub use form::CommentForm;
pub use list::CommentList;
