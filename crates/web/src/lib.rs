// ABOUTME: Library entry point for dreamy-web: blocking web sessions and URL helpers.
// ABOUTME: Re-exports the public API: WebSession, SessionBuilder, SessionOptions, FetchError, ErrorCode.

//! Small blocking HTTP helpers for scripts that scrape a page or two.
//!
//! # Example
//!
//! ```no_run
//! use dreamy_web::{get_hostname, FetchError, WebSession};
//!
//! fn main() -> Result<(), FetchError> {
//!     let session = WebSession::builder().user_agent("my-scraper/1.0").build()?;
//!     let page = session.get_document("https://example.com/")?;
//!     println!("{}", page.root_element().text().collect::<String>());
//!     println!("{:?}", get_hostname("https://forums.example.co.uk/t/1"));
//!     Ok(())
//! }
//! ```

pub mod decode;
pub mod error;
pub mod options;
pub mod session;
pub mod url_utils;

pub use crate::decode::{decode_body, extract_charset};
pub use crate::error::{ErrorCode, FetchError};
pub use crate::options::{SessionBuilder, SessionOptions, DEFAULT_TEXT_ENCODING, DEFAULT_USER_AGENT};
pub use crate::session::WebSession;
pub use crate::url_utils::{get_hostname, get_site_url};
