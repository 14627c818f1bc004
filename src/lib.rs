#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Compatibility layer for std/no_std
mod compat;

// Internal modules (not public API)
mod checkers;
mod error;
mod helpers;
mod parsed_url;
mod parser;
mod playpath;
mod scheme;
mod types;
mod url_components;

// Public API
pub use error::ParseError;
pub use parsed_url::ParsedUrl;
pub use parser::parse;
pub use playpath::{normalize_playpath, slist_stream};
pub use types::{Protocol, UnknownProtocol};
pub use url_components::{Span, UrlComponents};

pub type Result<T> = core::result::Result<T, ParseError>;
