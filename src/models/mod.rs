//! Wire-level records for the remote dataset.
//!
//! These are the shapes the gateway deserializes from the network. UI-only
//! decoration of posts lives in [`crate::state`], not here.

mod comment;
mod post;
mod text_utils;
mod user;

pub use comment::Comment;
pub use post::Post;
pub use text_utils::first_name;
pub use user::{Address, Company, Geo, User};
