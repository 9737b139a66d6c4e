//! Helpers for Android UI test generation: give every widget in layout and
//! menu resources an `android:id`, and diff XML files after normalization.

pub mod cli;
pub mod diff;
pub mod error;
pub mod inject;
pub mod report;
pub mod resources;
pub mod trace;
pub mod xml;

pub use error::ToolError;
pub use inject::injector::{Assignment, ID_ATTRIBUTE, inject};
pub use xml::XmlDocument;
