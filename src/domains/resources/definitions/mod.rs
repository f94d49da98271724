//! Resource definitions module.
//!
//! Each resource is defined in its own file with its URI, metadata and
//! content provider, and registered in `registry.rs`.

pub mod server_info;
pub mod usage_guide;

use super::service::ResourceContent;

pub use server_info::ServerInfoResource;
pub use usage_guide::UsageGuideResource;

/// Trait for resource definitions.
pub trait ResourceDefinition {
    /// The unique URI of the resource.
    const URI: &'static str;

    /// The display name of the resource.
    const NAME: &'static str;

    /// A description of the resource.
    const DESCRIPTION: &'static str;

    /// The MIME type of the resource content.
    const MIME_TYPE: &'static str;

    /// Get the content for this resource.
    fn content() -> ResourceContent;
}
