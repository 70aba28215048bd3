//! Catalog browsing, search, title details and playable link extraction for
//! the WeCima streaming site.
//!
//! ```no_run
//! use wecima::{Config, PassthroughExtractor, Provider, Section, WeCima};
//!
//! # async fn run() -> wecima::Result<()> {
//! let site = WeCima::new(&Config::new("https://wecima.show")?, PassthroughExtractor)?;
//!
//! for entry in site.list_page(Section::Movies, 1).await? {
//!     println!("{} {}", entry.title, entry.href);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod model;
pub mod parser;
pub mod provider;

pub use config::Config;
pub use errors::{Error, Result};
pub use extractor::{Extractor, PassthroughExtractor, ServerKind};
pub use model::{
    CatalogEntry, ContentType, EpisodeRef, PlayableLink, Playback, Quality, SubtitleFile,
    TitleDetails,
};
pub use provider::{Provider, Section, WeCima};
