//! # texcombine
//!
//! Build a complete Minecraft texture pack out of a partial one.
//!
//! Texture packs often only replace some of the game's textures. This crate
//! takes the default `blockstates`, `models` and `textures` from a client jar,
//! lays the pack's files over them (the pack wins on every conflict) and
//! writes the merged tree to a new zip rooted at `assets/`.
//!
//! ## Features
//!
//! - Client jar from `~/.minecraft`, an explicit path, or a download
//! - Overlay precedence: texture pack files always replace client defaults
//! - Atomic per-file replacement while staging
//! - Exclusive output creation: an existing file is never overwritten
//!
//! ## Example
//!
//! ```no_run
//! use std::path::PathBuf;
//! use texcombine::{ClientSource, CombineOptions, combine};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let options = CombineOptions {
//!         client: ClientSource::Jar(PathBuf::from("1.12.jar")),
//!         pack: PathBuf::from("faithful.zip"),
//!         output: PathBuf::from("complete.zip"),
//!         quiet: false,
//!     };
//!
//!     let summary = combine(&options).await?;
//!     println!("{} files packed", summary.packed);
//!
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod cli;
pub mod error;
pub mod io;
pub mod merge;
pub mod pipeline;

pub use cli::Cli;
pub use error::ResolveError;
pub use io::{ClientSource, HttpJarDownload, JarSource, LocalJar};
pub use merge::{AssetCategory, MergeStats};
pub use pipeline::{CombineOptions, CombineSummary, combine};
