//! title_resolver library: concurrent page title resolution
//!
//! This library resolves human-readable page titles for a batch of URLs. Every
//! URL is fetched concurrently with an optional cookie chosen by longest
//! prefix match, and failures are folded into one de-duplicated summary line
//! instead of being raised.
//!
//! # Example
//!
//! ```no_run
//! use title_resolver::{resolve_titles, Config, CredentialTable};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut credentials = CredentialTable::new();
//! credentials.insert("https://wiki.example/", "session=abc123");
//!
//! let config = Config {
//!     credentials,
//!     ..Default::default()
//! };
//!
//! let infos = resolve_titles(
//!     ["https://wiki.example/Home", "https://www.rust-lang.org/"],
//!     &config,
//! )
//! .await?;
//! println!("{} titles, errors: {}", infos.mapping.len(), infos.error_summary);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod app;
pub mod config;
pub mod credentials;
pub mod error_handling;
pub mod fetch;
pub mod initialization;
pub mod parse;
mod resolver;

// Re-export public API
pub use config::Config;
pub use credentials::{resolve_credential, CredentialTable};
pub use error_handling::{classify, ErrorCategory, ErrorStats, TransportError};
pub use fetch::{FetchedPage, HttpTransport, RequestHeaders, Transport};
pub use parse::extract_title;
pub use resolver::{resolve_titles, TitleInfos, TitleResolver};
