//! Admin panel: API client and content managers driven by the `admin` binary.
//!
//! - [`client`] - `reqwest` client with login and bearer auth
//! - [`resource`] - Blog, project and review resource definitions
//! - [`manager`] - The list/form/delete state machine per resource
//! - [`seed`] - Stock domains and settings for `admin seed`

pub mod client;
pub mod manager;
pub mod resource;
pub mod seed;

pub use client::{ApiClient, ClientError};
pub use manager::{FormTarget, Manager, ManagerError, ManagerState, Mode};
pub use resource::{Blogs, Projects, Resource, ResourceBackend, Reviews};
