use clap::Parser;
use directories_next::BaseDirs;
use std::path::{Path, PathBuf};

use crate::error::ResolveError;
use crate::io::{ClientSource, DEFAULT_DOWNLOAD_BASE};

#[derive(Parser, Debug)]
#[command(name = "texcombine")]
#[command(about = "Minecraft Texture Combiner: build a complete texture pack from a partial one", long_about = None)]
#[command(after_help = "Examples:\n  \
  texcombine -p faithful.zip -o complete.zip           download 1.12 and fill in missing textures\n  \
  texcombine -c -V 1.12.2 -p pack.zip -o out.zip       use the jar from ~/.minecraft\n  \
  texcombine -j ~/client.jar -p pack.zip -o out.zip    use an explicit client jar")]
pub struct Cli {
    /// Minecraft version
    #[arg(short = 'V', long = "version", value_name = "VERSION", default_value = "1.12")]
    pub version: String,

    /// Use .minecraft instead of downloading
    #[arg(short = 'c', long = "use-client")]
    pub use_client: bool,

    /// Path to client jar
    #[arg(short = 'j', long = "jar", value_name = "PATH")]
    pub jar: Option<String>,

    /// Path to texture pack
    #[arg(short = 'p', long = "pack", value_name = "PATH")]
    pub pack: String,

    /// New texture pack path
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: String,

    /// Location of the .minecraft directory used by -c
    #[arg(long, value_name = "DIR", env = "MINECRAFT_DIR")]
    pub minecraft_dir: Option<String>,

    /// Base URL client jars are downloaded from
    #[arg(long, value_name = "URL", default_value = DEFAULT_DOWNLOAD_BASE)]
    pub download_base: String,

    /// Quiet mode, no progress messages
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

impl Cli {
    /// Pick the client source: `-c` first, then `-j`, then download.
    ///
    /// An empty `-j ""` counts as not given.
    pub fn client_source(&self) -> Result<ClientSource, ResolveError> {
        if self.use_client {
            let minecraft_dir = match self.minecraft_dir.as_deref() {
                Some(dir) => expand_home(dir)?,
                None => default_minecraft_dir()?,
            };
            return Ok(ClientSource::LocalClient {
                minecraft_dir,
                version: self.version.clone(),
            });
        }

        if let Some(jar) = self.jar.as_deref().filter(|j| !j.is_empty()) {
            return Ok(ClientSource::Jar(expand_home(jar)?));
        }

        Ok(ClientSource::Download {
            base: self.download_base.clone(),
            version: self.version.clone(),
        })
    }

    pub fn pack_path(&self) -> Result<PathBuf, ResolveError> {
        expand_home(&self.pack)
    }

    pub fn output_path(&self) -> Result<PathBuf, ResolveError> {
        expand_home(&self.output)
    }
}

/// `~/.minecraft`
pub fn default_minecraft_dir() -> Result<PathBuf, ResolveError> {
    Ok(home_dir()?.join(".minecraft"))
}

/// Expand a leading `~` to the current user's home directory.
pub fn expand_home(path: &str) -> Result<PathBuf, ResolveError> {
    if path == "~" {
        return home_dir();
    }
    match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
        Some(rest) => Ok(home_dir()?.join(rest)),
        None => Ok(Path::new(path).to_path_buf()),
    }
}

fn home_dir() -> Result<PathBuf, ResolveError> {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or(ResolveError::NoHomeDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("texcombine").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let cli = parse(&["-p", "pack.zip", "-o", "out.zip"]);
        assert_eq!(cli.version, "1.12");
        assert!(!cli.use_client);
        assert!(!cli.quiet);
        assert_eq!(
            cli.client_source().unwrap(),
            ClientSource::Download {
                base: DEFAULT_DOWNLOAD_BASE.to_string(),
                version: "1.12".to_string(),
            }
        );
    }

    #[test]
    fn pack_and_output_are_required() {
        assert!(Cli::try_parse_from(["texcombine", "-o", "out.zip"]).is_err());
        assert!(Cli::try_parse_from(["texcombine", "-p", "pack.zip"]).is_err());
    }

    #[test]
    fn long_flags() {
        let cli = parse(&[
            "--version", "1.11.2", "--jar", "client.jar", "--pack", "p.zip", "--output", "o.zip",
        ]);
        assert_eq!(cli.version, "1.11.2");
        assert_eq!(cli.client_source().unwrap(), ClientSource::Jar(PathBuf::from("client.jar")));
        assert_eq!(cli.pack_path().unwrap(), PathBuf::from("p.zip"));
        assert_eq!(cli.output_path().unwrap(), PathBuf::from("o.zip"));
    }

    #[test]
    fn use_client_beats_jar() {
        let cli = parse(&[
            "-c", "-j", "client.jar", "-V", "1.12.2", "--minecraft-dir", "/games/mc",
            "-p", "p.zip", "-o", "o.zip",
        ]);
        assert_eq!(
            cli.client_source().unwrap(),
            ClientSource::LocalClient {
                minecraft_dir: PathBuf::from("/games/mc"),
                version: "1.12.2".to_string(),
            }
        );
    }

    #[test]
    fn empty_jar_means_download() {
        let cli = parse(&["-j", "", "--download-base", "http://mirror", "-p", "p.zip", "-o", "o.zip"]);
        assert_eq!(
            cli.client_source().unwrap(),
            ClientSource::Download {
                base: "http://mirror".to_string(),
                version: "1.12".to_string(),
            }
        );
    }

    #[test]
    fn expands_tilde() {
        let Some(dirs) = BaseDirs::new() else {
            return;
        };
        let home = dirs.home_dir();
        assert_eq!(expand_home("~").unwrap(), home);
        assert_eq!(expand_home("~/packs/a.zip").unwrap(), home.join("packs/a.zip"));
        assert_eq!(expand_home("/abs/~/x").unwrap(), PathBuf::from("/abs/~/x"));
        assert_eq!(expand_home("rel.zip").unwrap(), PathBuf::from("rel.zip"));
        assert_eq!(default_minecraft_dir().unwrap(), home.join(".minecraft"));
    }
}
