//! Fetch a random article summary from Wikipedia's REST API.
//!
//! ```no_run
//! # async fn run() -> wikipedia_random::Result<()> {
//! use wikipedia_random::{random_page, DEFAULT_TIMEOUT};
//!
//! let page = random_page("fr", DEFAULT_TIMEOUT).await?;
//! println!("{}: {}", page.title, page.extract);
//! # Ok(())
//! # }
//! ```

pub mod console;
pub mod error;
pub mod page;
pub mod wikipedia;

pub use error::{FetchError, Result};
pub use page::Page;
pub use wikipedia::{random_page, WikipediaClient, API_URL, DEFAULT_LANGUAGE, DEFAULT_TIMEOUT};
