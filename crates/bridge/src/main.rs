// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tollcam notification bridge daemon (tollcam-bridged)
//!
//! Background process that owns the bridge service loop and exposes the
//! notification channel on a Unix socket.
//!
//! Architecture:
//! - Listener task: spawned task handling socket I/O for the channel
//! - Service loop: single task processing bridge messages sequentially
//!
//! A second invocation while the daemon is running acts as the relaunch
//! trampoline: a `--launch-action` argument is forwarded over the socket
//! as a launch event and the invocation exits.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use fs2::FileExt;
use tokio::net::{UnixListener, UnixStream};
use tokio::signal::unix::{signal, SignalKind};
use tokio::sync::Notify;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tollcam_adapters::{
    grant_outcome_channel, CommandSettingsAdapter, DesktopNotifyAdapter, ShutdownTaskAdapter,
    TracedNotify, TracedSettings, UngatedAuthorizationAdapter,
};
use tollcam_bridge::protocol::{self, MethodCall, DEFAULT_TIMEOUT, PROTOCOL_VERSION};
use tollcam_bridge::service::{forward_grants, BridgeService};
use tollcam_bridge::{Config, Listener};
use tollcam_core::{BundledCatalog, LaunchEvent};

struct CliArgs {
    launch_action: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle info flags before any config/lock acquisition
    let args = parse_args();

    let config = Config::load()?;
    std::fs::create_dir_all(&config.state_dir)?;

    // Single instance: exclusive lock on the pid file.
    let lock_file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .open(&config.lock_path)?;
    if lock_file.try_lock_exclusive().is_err() {
        // Another bridge owns the channel. With a launch action this
        // invocation is the relaunch trampoline; without one it has
        // nothing to do.
        if let Some(action) = args.launch_action {
            forward_launch(&config.socket_path, &action).await?;
            return Ok(());
        }
        eprintln!("tollcam-bridged is already running");
        std::process::exit(1);
    }
    lock_file.set_len(0)?;
    writeln!(&lock_file, "{}", std::process::id())?;

    // Set up logging
    let _log_guard = setup_logging(&config)?;
    info!(version = PROTOCOL_VERSION, "starting notification bridge");

    // Remove a stale socket left by a previous run.
    let _ = std::fs::remove_file(&config.socket_path);
    let socket = UnixListener::bind(&config.socket_path)?;
    info!(
        channel = protocol::CHANNEL_NAME,
        socket = %config.socket_path.display(),
        "channel bound"
    );

    let shutdown = Arc::new(Notify::new());

    let (grant_tx, grant_rx) = grant_outcome_channel();
    let authorization = UngatedAuthorizationAdapter::new(grant_tx);
    let notify = TracedNotify::new(DesktopNotifyAdapter::new());
    let settings = TracedSettings::new(CommandSettingsAdapter::new(
        config.settings_cmd.clone(),
        config.settings_fallback_cmd.clone(),
    ));
    let task = ShutdownTaskAdapter::new(Arc::clone(&shutdown));

    let (handle, service) = BridgeService::new(
        authorization,
        notify,
        settings,
        task,
        BundledCatalog::new(),
    );
    tokio::spawn(forward_grants(grant_rx, handle.clone()));
    tokio::spawn(service.run());
    tokio::spawn(Listener::new(socket, handle.clone()).run());

    // Deliver this invocation's own launch event (a normal start, or a
    // relaunch caused by a notification action).
    let event = match args.launch_action {
        Some(action) => LaunchEvent::new(action),
        None => LaunchEvent::plain(),
    };
    handle.deliver_launch(event)?;

    // Run until an exit action or a termination signal.
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;
    tokio::select! {
        _ = shutdown.notified() => info!("shutdown requested"),
        _ = sigterm.recv() => info!("SIGTERM received"),
        _ = sigint.recv() => info!("SIGINT received"),
    }

    let _ = std::fs::remove_file(&config.socket_path);
    let _ = std::fs::remove_file(&config.lock_path);
    info!("bridge stopped");
    Ok(())
}

fn parse_args() -> CliArgs {
    let mut launch_action = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" | "-v" => {
                println!("tollcam-bridged {}", PROTOCOL_VERSION);
                std::process::exit(0);
            }
            "--help" | "-h" | "help" => {
                println!("tollcam-bridged {}", PROTOCOL_VERSION);
                println!("Tollcam notification bridge - exposes notification authorization and");
                println!("foreground-notification control to the application layer");
                println!();
                println!("USAGE:");
                println!("    tollcam-bridged [--launch-action <action>]");
                println!();
                println!("If a bridge is already running, an invocation with --launch-action");
                println!("forwards the launch event over the channel socket and exits.");
                println!();
                println!("OPTIONS:");
                println!("    --launch-action <action>    Action marker carried by this launch");
                println!("    -h, --help                  Print help information");
                println!("    -v, --version               Print version information");
                std::process::exit(0);
            }
            "--launch-action" => {
                launch_action = args.next();
                if launch_action.is_none() {
                    eprintln!("error: --launch-action requires a value");
                    std::process::exit(1);
                }
            }
            other => {
                if let Some(action) = other.strip_prefix("--launch-action=") {
                    launch_action = Some(action.to_string());
                } else {
                    eprintln!("error: unexpected argument '{other}'");
                    eprintln!("Usage: tollcam-bridged [--launch-action <action>]");
                    std::process::exit(1);
                }
            }
        }
    }

    CliArgs { launch_action }
}

/// Forward a launch event to the running bridge (the relaunch trampoline).
async fn forward_launch(
    socket_path: &Path,
    action: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = UnixStream::connect(socket_path).await?;
    let call = MethodCall::new("deliverLaunch").arg("action", action);
    protocol::roundtrip(&mut stream, &call, DEFAULT_TIMEOUT).await?;
    Ok(())
}

fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, std::io::Error> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    let (writer, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
