//! Reading and writing the zip archives that carry game assets.
//!
//! Both the client jar and resource packs are plain zip files. This module
//! has two halves:
//!
//! - [`extractor`]: unpack every entry of an archive into a scratch directory
//! - [`packer`]: write a directory tree back out as a new archive rooted
//!   under `assets/`
//!
//! The heavy lifting (local headers, central directory, deflate) is done by
//! the `zip` crate. Both halves are blocking; async callers run them through
//! `tokio::task::spawn_blocking`.

mod extractor;
mod packer;

pub use extractor::extract_all;
pub use packer::{ARCHIVE_ROOT, pack_assets};
