//! Core domain entities representing the site's content model.
//!
//! Entities are plain data structures. Validation lives in the API DTOs and
//! the application services, persistence in the repository implementations.
//!
//! # Entity Types
//!
//! - [`Domain`] - A business realm shown in the domains grid
//! - [`Settings`] - The site-wide settings singleton
//! - [`Contact`] - A contact-form submission
//! - [`Subscriber`] - A newsletter subscription
//! - [`Blog`] - A blog post
//! - [`Project`] - A showcased project
//! - [`Review`] - A client review, optionally attached to a project
//!
//! # Design Pattern
//!
//! Each entity has a `New*` struct for creation and, where the API allows
//! edits, an `Update*` patch whose `apply` merges the provided fields.

pub mod blog;
pub mod contact;
pub mod domain;
pub mod project;
pub mod review;
pub mod settings;
pub mod subscriber;

pub use blog::{Blog, NewBlog, UpdateBlog};
pub use contact::{Contact, ContactStatus, NewContact};
pub use domain::{Domain, NewDomain, UpdateDomain};
pub use project::{NewProject, Project, ProjectWithReviews, UpdateProject};
pub use review::{NewReview, Review, UpdateReview};
pub use settings::{NewSettings, Settings, SocialMedia};
pub use subscriber::Subscriber;
