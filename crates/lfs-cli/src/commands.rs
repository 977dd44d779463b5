use anyhow::Context;
use colored::Colorize;
use lfs_server::{LfsServer, ServerConfig};
use lfs_store::StoreLayout;
use lfs_types::ObjectId;

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::Locate(args) => cmd_locate(args),
    }
}

fn serve_config(args: ServeArgs) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(root) = args.root {
        config.root = root;
    }
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }
    Ok(config)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = serve_config(args)?;
    if !config.root.join(lfs_store::OBJECTS_DIR).is_dir() {
        tracing::warn!(root = %config.root.display(), "store root has no objects directory");
    }
    println!(
        "LFS server on {} (root: {})",
        config.bind_addr().bold(),
        config.root.display()
    );
    let runtime = tokio::runtime::Runtime::new()?;
    runtime
        .block_on(LfsServer::new(config).serve())
        .context("server stopped")
}

fn cmd_locate(args: LocateArgs) -> anyhow::Result<()> {
    let oid = ObjectId::parse(&args.oid).with_context(|| format!("invalid object id {:?}", args.oid))?;
    let path = StoreLayout::new(&args.root).locate(&oid);
    let marker = if path.is_file() { "✓".green() } else { "✗".red() };
    println!("{} {}", marker, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> ServeArgs {
        ServeArgs { config: None, root: None, host: None, port: None }
    }

    #[test]
    fn flags_override_defaults() {
        let config = serve_config(ServeArgs {
            root: Some("/srv/lfs".into()),
            port: Some(80),
            ..args()
        })
        .unwrap();
        assert_eq!(config.root, PathBuf::from("/srv/lfs"));
        assert_eq!(config.port, 80);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lfs.toml");
        std::fs::write(&path, "host = \"0.0.0.0\"\nport = 9000\n").unwrap();

        let config = serve_config(ServeArgs {
            config: Some(path),
            port: Some(9001),
            ..args()
        })
        .unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9001);
    }

    #[test]
    fn missing_config_file_is_error() {
        let result = serve_config(ServeArgs {
            config: Some("/nonexistent/lfs.toml".into()),
            ..args()
        });
        assert!(result.is_err());
    }

    #[test]
    fn locate_rejects_bad_oid() {
        let result = cmd_locate(LocateArgs { oid: "xyz".into(), root: ".".into() });
        assert!(result.is_err());
    }
}
