//! Command-line host for the gallery saver channel.
//!
//! Plays the UI side of the bridge: builds a call, sends it over the
//! in-process bus and prints the decoded outcome.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gs_bridge::bootstrap::{init_tracing_subscriber, resolve_config, wire_runtime};
use gs_core::channel::{ArgumentMap, EncodableValue, MethodResponse};
use gs_core::gallery::{BYTES_ARG, FILE_NAME_ARG, SAVE_IMAGE_METHOD};
use gs_core::ports::AppDirsPort;
use gs_platform::DirsAppDirsAdapter;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "gallery-saver")]
#[command(about = "Save images to the device gallery through the method channel", long_about = None)]
struct Cli {
    /// Config file path (defaults to <app data>/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save an image file to the gallery
    Save {
        /// Image file to send
        file: PathBuf,
        /// Name to save under (defaults to the file's own name)
        #[arg(short = 'n', long)]
        file_name: Option<String>,
    },
    /// Invoke an arbitrary method with no arguments
    Invoke {
        /// Method name
        method: String,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;

    if let Err(err) = init_tracing_subscriber(Some(&dirs.logs_dir())) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    let config = resolve_config(cli.config, &dirs)?;
    let runtime = wire_runtime(config).context("Failed to wire the gallery channel")?;
    let client = runtime.client();

    let (method, arguments) = match cli.command {
        Commands::Save { file, file_name } => (
            SAVE_IMAGE_METHOD.to_string(),
            save_arguments(&file, file_name).await,
        ),
        Commands::Invoke { method } => (method, ArgumentMap::new()),
    };

    info!(
        channel = %runtime.config().channel_name,
        backend = %runtime.config().storage_backend,
        method = %method,
        "Sending call"
    );

    let response = client
        .invoke_method(&method, arguments)
        .await
        .with_context(|| format!("Call to {method} failed"))?;

    let (line, success) = describe(&method, &response);
    if success {
        println!("{line}");
        Ok(ExitCode::SUCCESS)
    } else {
        eprintln!("{line}");
        Ok(ExitCode::FAILURE)
    }
}

/// Build `saveImage` arguments from a file on disk.
///
/// An unreadable file sends the call without `bytes`, leaving the verdict to
/// the channel.
async fn save_arguments(file: &Path, file_name: Option<String>) -> ArgumentMap {
    let mut arguments = ArgumentMap::new();

    match tokio::fs::read(file).await {
        Ok(bytes) => {
            arguments.insert(BYTES_ARG.to_string(), EncodableValue::Bytes(bytes));
        }
        Err(err) => {
            warn!(path = %file.display(), error = %err, "Could not read image file");
        }
    }

    let name = file_name.or_else(|| {
        file.file_name()
            .map(|name| name.to_string_lossy().into_owned())
    });
    if let Some(name) = name {
        arguments.insert(FILE_NAME_ARG.to_string(), EncodableValue::String(name));
    }

    arguments
}

fn describe(method: &str, response: &MethodResponse) -> (String, bool) {
    match response {
        MethodResponse::Success(EncodableValue::String(location)) => {
            (format!("saved: {location}"), true)
        }
        MethodResponse::Success(value) => (format!("ok: {value:?}"), true),
        MethodResponse::Error(err) => (format!("error [{}]: {}", err.code, err.message), false),
        MethodResponse::NotImplemented => (format!("not implemented: {method}"), false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn save_arguments_reads_file_and_defaults_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, [1u8, 2, 3]).unwrap();

        let args = save_arguments(&path, None).await;

        assert_eq!(args.get(BYTES_ARG), Some(&EncodableValue::Bytes(vec![1, 2, 3])));
        assert_eq!(args.get(FILE_NAME_ARG), Some(&EncodableValue::from("photo.png")));
    }

    #[tokio::test]
    async fn save_arguments_prefers_explicit_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, [1u8]).unwrap();

        let args = save_arguments(&path, Some("renamed.png".to_string())).await;

        assert_eq!(args.get(FILE_NAME_ARG), Some(&EncodableValue::from("renamed.png")));
    }

    #[tokio::test]
    async fn unreadable_file_omits_bytes() {
        let dir = tempfile::tempdir().unwrap();

        let args = save_arguments(&dir.path().join("missing.png"), None).await;

        assert!(args.get(BYTES_ARG).is_none());
        assert!(args.get(FILE_NAME_ARG).is_some());
    }

    #[test]
    fn describe_outcomes() {
        let (line, ok) = describe("saveImage", &MethodResponse::success("/p/a.png"));
        assert!(ok);
        assert_eq!(line, "saved: /p/a.png");

        let (line, ok) = describe("saveImage", &MethodResponse::error("save_failed", "nope"));
        assert!(!ok);
        assert_eq!(line, "error [save_failed]: nope");

        let (line, ok) = describe("listAlbums", &MethodResponse::NotImplemented);
        assert!(!ok);
        assert_eq!(line, "not implemented: listAlbums");
    }

    #[test]
    fn release_profile_unwinds_on_panic() {
        let manifest: toml::Value = toml::from_str(include_str!("../Cargo.toml")).unwrap();

        let panic_strategy = manifest
            .get("profile")
            .and_then(|p| p.get("release"))
            .and_then(|r| r.get("panic"))
            .and_then(|v| v.as_str());

        assert_ne!(panic_strategy, Some("abort"));
    }
}
