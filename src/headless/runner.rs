//! Headless mode runner - drives a DialogController from stdin
//!
//! Each stdin line is either a controller command or a surface message:
//!
//! ```text
//! show
//! {"command":"init"}
//! {"command":"send","payload":{"method":"refresh"}}
//! {"method":"shownChanged","params":{"shown":true}}
//! ```

use std::rc::Rc;

use serde::Deserialize;
use serde_json::Value;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use goto_app::{DialogController, Settings, VisibilityObserver};
use goto_core::prelude::*;
use goto_core::SurfaceMessage;

use super::host::{HeadlessHost, SurfaceInjector};
use super::HeadlessEvent;

/// A parsed stdin line
#[derive(Debug, Clone, PartialEq)]
pub enum HeadlessCommand {
    Init,
    Show,
    Hide,
    Destroy,
    Status,
    Quit,
    /// Outbound record for the surface
    Send(Value),
    /// Inbound message, as if the surface emitted it
    Deliver(SurfaceMessage),
}

#[derive(Debug, Deserialize)]
struct CommandLine {
    command: String,
    #[serde(default)]
    payload: Value,
}

/// Parse one stdin line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<HeadlessCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    if !trimmed.starts_with('{') {
        return named_command(trimmed, Value::Null).map(Some);
    }

    let value: Value = serde_json::from_str(trimmed)?;
    if value.get("command").is_some() {
        let cmd: CommandLine = serde_json::from_value(value)?;
        return named_command(&cmd.command, cmd.payload).map(Some);
    }

    Ok(Some(HeadlessCommand::Deliver(SurfaceMessage::from_value(
        value,
    ))))
}

fn named_command(name: &str, payload: Value) -> Result<HeadlessCommand> {
    match name {
        "init" => Ok(HeadlessCommand::Init),
        "show" => Ok(HeadlessCommand::Show),
        "hide" => Ok(HeadlessCommand::Hide),
        "destroy" => Ok(HeadlessCommand::Destroy),
        "status" => Ok(HeadlessCommand::Status),
        "q" | "quit" => Ok(HeadlessCommand::Quit),
        "send" if !payload.is_null() => Ok(HeadlessCommand::Send(payload)),
        "send" => Err(Error::protocol("send requires a payload")),
        other => Err(Error::protocol(format!("Unknown command: {}", other))),
    }
}

/// Apply one command. Returns `false` once the runner should stop.
pub fn apply_command(
    controller: &mut DialogController,
    injector: &SurfaceInjector,
    cmd: HeadlessCommand,
) -> bool {
    match cmd {
        HeadlessCommand::Init => {
            if let Err(e) = controller.init() {
                HeadlessEvent::error(e.to_string(), e.is_fatal()).emit();
            }
        }
        HeadlessCommand::Show => controller.show(),
        HeadlessCommand::Hide => controller.hide(),
        HeadlessCommand::Destroy => controller.destroy(),
        HeadlessCommand::Status => HeadlessEvent::status(controller).emit(),
        HeadlessCommand::Send(payload) => controller.send_to_surface(payload),
        HeadlessCommand::Deliver(msg) => {
            injector.inject(msg);
        }
        HeadlessCommand::Quit => return false,
    }

    controller.pump_inbound();
    true
}

/// Run in headless mode - JSON events on stdout instead of a real surface
pub async fn run_headless(settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("Goto dialog starting in HEADLESS mode");
    info!("Surface content: {}", settings.surface.content);
    info!("═══════════════════════════════════════════════════════");

    let (host, injector) = HeadlessHost::with_injector();
    let mut controller = DialogController::new(Box::new(host), settings);

    let observer: Rc<dyn VisibilityObserver> =
        Rc::new(|shown: bool| HeadlessEvent::visibility_changed(shown).emit());
    controller.set_on_visibility_change(Rc::downgrade(&observer));
    controller.set_on_hidden(|| HeadlessEvent::hidden().emit());

    let (cmd_tx, mut cmd_rx) = mpsc::channel(64);
    std::thread::spawn(move || {
        spawn_stdin_reader_blocking(cmd_tx);
    });

    while let Some(cmd) = cmd_rx.recv().await {
        if !apply_command(&mut controller, &injector, cmd) {
            info!("Quit requested");
            break;
        }
    }

    controller.destroy();
    info!("Goto dialog headless mode exiting");
    Ok(())
}

/// Hand one command to the controller loop
fn forward_command(cmd_tx: &mpsc::Sender<HeadlessCommand>, cmd: HeadlessCommand) -> Result<()> {
    cmd_tx.blocking_send(cmd).map_err(|_| Error::ChannelClosed)
}

/// Stdin reader that forwards parsed commands (blocking version)
fn spawn_stdin_reader_blocking(cmd_tx: mpsc::Sender<HeadlessCommand>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    let reader = stdin.lock();

    for line in reader.lines() {
        match line {
            Ok(line) => match parse_command(&line) {
                Ok(Some(cmd)) => {
                    let quit = cmd == HeadlessCommand::Quit;
                    if let Err(e) = forward_command(&cmd_tx, cmd) {
                        warn!("Controller loop is gone: {}", e);
                        break;
                    }
                    if quit {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Bad stdin line {:?}: {}", line, e);
                    HeadlessEvent::error(e.to_string(), false).emit();
                }
            },
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        }
    }

    info!("Stdin reader exiting");
}
