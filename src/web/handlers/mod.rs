//! Page handlers for the public site.

pub mod blog;
pub mod landing;
pub mod view;

pub use blog::{blog_list_handler, blog_post_handler};
pub use landing::landing_handler;
