//! Muse Player Demo Catalog
//!
//! A static, in-memory implementation of the [`Catalog`] contract:
//! featured playlists, trending tracks, and recommendations, all from
//! embedded sample data. No network, no credentials; a real music API
//! integration would replace this crate behind the same trait.
//!
//! # Example
//!
//! ```rust
//! use muse_catalog::StaticCatalog;
//! use muse_core::Catalog;
//!
//! # async fn example() -> muse_core::Result<()> {
//! let catalog = StaticCatalog::new();
//!
//! let trending = catalog.trending_tracks().await?;
//! assert!(!trending.is_empty());
//!
//! let hits = catalog.search("weeknd").await?;
//! assert_eq!(hits[0].title, "Blinding Lights");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod data;
mod provider;

pub use muse_core::Catalog;
pub use provider::StaticCatalog;
