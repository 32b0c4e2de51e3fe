//! Disc title lookup against the Redump catalog.

pub mod client;
pub mod error;
pub mod html;

pub use client::{DEFAULT_BASE_URL, RedumpClient, TitleLookup};
pub use error::LookupError;
pub use html::extract_title;
