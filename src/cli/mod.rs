//! # CLI Module
//!
//! User-facing command implementations behind the clap parser in `main`:
//!
//! - [`serve`] - open the playlist store and run the HTTP server
//! - [`mood`] - one-shot mood search printed to stdout, paging through the
//!   shuffled results without the server
//!
//! Commands report progress through the colored console macros and exit via
//! the fatal `error!` macro on unrecoverable failures.

mod mood;
mod serve;

pub use mood::mood;
pub use serve::serve;
