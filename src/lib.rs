#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_match)]

pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod services;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{Dataset, MetadataLayout, SelectionState};
pub use error::DashboardError;
pub use services::{DatasetLoader, ImageResolver, ObjectFetcher, UrlSigner};
pub use tui::{Action, ActionCategory, App};
