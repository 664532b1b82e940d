mod bridge;
mod commands;
mod render;

pub use bridge::{CommandBridge, forward_command};
pub use commands::{Command, HELP, parse_command};
pub use render::render;

use kanal::AsyncSender;
use tempel_types::{AppEvent, ViewState};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

/// Terminal front end: commands from stdin, page redrawn on every view change
pub async fn ui_loop(
    mut view_rx: watch::Receiver<ViewState>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let color = atty::is(atty::Stream::Stdout);
    let bridge = CommandBridge::spawn_stdin();

    println!("{HELP}\n");
    let mut last_page = render(&view_rx.borrow_and_update(), color);
    print!("{last_page}");

    loop {
        tokio::select! {
            command = bridge.recv() => {
                let Some(command) = command else { break };
                tracing::debug!("[UI] Command: {:?}", command);
                if !forward_command(command, &ui_to_app_tx).await {
                    break;
                }
            }
            changed = view_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let page = render(&view_rx.borrow_and_update(), color);
                if page != last_page {
                    println!();
                    print!("{page}");
                    last_page = page;
                }
            }
            _ = cancel.cancelled() => {
                tracing::info!("UI loop stopping");
                break;
            }
        }
    }

    Ok(())
}
