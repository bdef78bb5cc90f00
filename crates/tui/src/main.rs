mod raster;
mod renderer;

use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use folio_core::{FolioConfig, parse_content, reference_content};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: folio-tui [content.json] [--config config.json]";

#[derive(Debug)]
struct Args {
    content: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut parsed = Args {
        content: None,
        config: None,
    };
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let path = args.next().context("--config needs a path")?;
                parsed.config = Some(PathBuf::from(path));
            }
            "-h" | "--help" => bail!(USAGE),
            flag if flag.starts_with('-') => bail!("unknown flag {flag}\n{USAGE}"),
            _ if parsed.content.is_some() => bail!("more than one content file\n{USAGE}"),
            _ => parsed.content = Some(PathBuf::from(&arg)),
        }
    }
    Ok(parsed)
}

/// Log to `folio-tui.log` when `RUST_LOG` is set; the terminal is busy.
fn init_logging() -> Result<()> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }
    let file = std::fs::File::create("folio-tui.log").context("creating folio-tui.log")?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let args = parse_args(std::env::args().skip(1))?;
    init_logging()?;

    let config = match &args.config {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            FolioConfig::from_json(&data)?
        }
        None => FolioConfig::default(),
    };
    let content = match &args.content {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("reading content {}", path.display()))?;
            parse_content(&data)?
        }
        None => reference_content(),
    };
    tracing::info!(
        timeline = content.timeline.len(),
        projects = content.projects.len(),
        "starting terminal session"
    );

    renderer::render_tui(content, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn content_and_config_paths() {
        let parsed = args(&["site.json", "--config", "folio.json"]).expect("valid args");
        assert_eq!(parsed.content, Some(PathBuf::from("site.json")));
        assert_eq!(parsed.config, Some(PathBuf::from("folio.json")));
    }

    #[test]
    fn no_args_uses_defaults() {
        let parsed = args(&[]).expect("valid args");
        assert!(parsed.content.is_none());
        assert!(parsed.config.is_none());
    }

    #[test]
    fn rejects_unknown_flags_and_dangling_config() {
        assert!(args(&["--verbose"]).is_err());
        assert!(args(&["--config"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
    }
}
