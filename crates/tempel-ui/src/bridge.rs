use std::io::BufRead;

use kanal::{AsyncReceiver, AsyncSender};
use tempel_io::clipboard::{read_file_payload, read_payload};
use tempel_types::AppEvent;

use crate::commands::{Command, HELP, parse_command};

/// Bridge between the blocking stdin reader and the async app
pub struct CommandBridge {
    from_stdin_rx: AsyncReceiver<Command>,
}

impl CommandBridge {
    /// Start reading stdin on its own thread
    pub fn spawn_stdin() -> Self {
        let (tx, rx) = kanal::bounded::<Command>(64);

        let spawned = std::thread::Builder::new()
            .name("tempel-stdin".into())
            .spawn(move || {
                let stdin = std::io::stdin();
                for line in stdin.lock().lines() {
                    let Ok(line) = line else { break };
                    match parse_command(&line) {
                        Some(command) => {
                            if tx.send(command).is_err() {
                                break;
                            }
                        }
                        None if line.trim().is_empty() => {}
                        None => println!("Perintah tidak dikenal: {}\n{HELP}", line.trim()),
                    }
                }
                // EOF behaves like quit
                let _ = tx.send(Command::Quit);
            });
        if let Err(e) = spawned {
            tracing::error!("Failed to start stdin reader: {}", e);
        }

        Self {
            from_stdin_rx: rx.to_async(),
        }
    }

    pub fn from_receiver(from_stdin_rx: AsyncReceiver<Command>) -> Self {
        Self { from_stdin_rx }
    }

    pub async fn recv(&self) -> Option<Command> {
        self.from_stdin_rx.recv().await.ok()
    }
}

/// Turn a command into the app event it stands for, reading the clipboard
/// or the given file for pastes. Returns `false` once the app should stop.
pub async fn forward_command(command: Command, ui_to_app_tx: &AsyncSender<AppEvent>) -> bool {
    let event = match command {
        Command::Paste(None) => match tokio::task::spawn_blocking(read_payload).await {
            Ok(Ok(payload)) => AppEvent::Paste(payload),
            Ok(Err(e)) => {
                tracing::error!("Failed to read clipboard: {:#}", e);
                AppEvent::Paste(Default::default())
            }
            Err(e) => {
                tracing::error!("Clipboard task failed: {}", e);
                return true;
            }
        },
        Command::Paste(Some(path)) => match read_file_payload(&path).await {
            Ok(payload) => AppEvent::Paste(payload),
            Err(e) => {
                tracing::error!("{:#}", e);
                AppEvent::Paste(Default::default())
            }
        },
        Command::Click => AppEvent::PasteAreaClicked,
        Command::Copy => AppEvent::CopyResult,
        Command::Save => AppEvent::SaveResult,
        Command::Theme => AppEvent::ToggleTheme,
        Command::Help => {
            println!("{HELP}");
            return true;
        }
        Command::Quit => AppEvent::Quit,
    };

    let quit = matches!(event, AppEvent::Quit);
    if let Err(e) = ui_to_app_tx.send(event).await {
        tracing::error!("Failed to send UI event to app: {}", e);
        return false;
    }
    !quit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn simple_commands_map_to_events() {
        let (tx, rx) = kanal::unbounded_async::<AppEvent>();

        assert!(forward_command(Command::Copy, &tx).await);
        assert!(forward_command(Command::Theme, &tx).await);
        assert!(!forward_command(Command::Quit, &tx).await);

        assert!(matches!(rx.recv().await.unwrap(), AppEvent::CopyResult));
        assert!(matches!(rx.recv().await.unwrap(), AppEvent::ToggleTheme));
        assert!(matches!(rx.recv().await.unwrap(), AppEvent::Quit));
    }

    #[tokio::test]
    async fn unreadable_file_pastes_nothing() {
        let (tx, rx) = kanal::unbounded_async::<AppEvent>();

        let path = std::path::PathBuf::from("/nonexistent/tempel/struk.png");
        assert!(forward_command(Command::Paste(Some(path)), &tx).await);

        match rx.recv().await.unwrap() {
            AppEvent::Paste(payload) => assert!(payload.is_empty()),
            other => panic!("Wrong event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn bridge_receives_from_channel() {
        let (tx, rx) = kanal::unbounded_async::<Command>();
        let bridge = CommandBridge::from_receiver(rx);

        tx.send(Command::Save).await.unwrap();
        drop(tx);

        assert_eq!(bridge.recv().await, Some(Command::Save));
        assert_eq!(bridge.recv().await, None);
    }
}
