//! Snapshot serialization and share links.
//!
//! A canvas travels as a single opaque string: a PNG wrapped in a
//! `data:image/png;base64,` URL. Undo snapshots use the same encoding, and a
//! share link is that string placed in a query parameter.

pub mod clipboard;
pub mod data_url;
pub mod link;
pub mod types;

pub use data_url::{PNG_DATA_URL_PREFIX, decode as decode_data_url, encode_png};
pub use link::{build_share_link, source_from_share_url};
pub use types::{DecodeError, ShareError, ShareLink};
