use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tempel_types::AppEvent;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::event_loop;
use crate::paste_ocr::PasteOcrController;

/// Centralized channel management
pub struct ChannelSet {
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            ui_to_app: kanal::bounded_async(64), // UI interactions
        }
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    controller: Arc<PasteOcrController>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(controller: Arc<PasteOcrController>) -> Self {
        Self {
            channels: ChannelSet::new(),
            controller,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop; a quit event cancels everything
        tasks.spawn(event_loop(
            self.controller.clone(),
            self.channels.ui_to_app.1.clone(),
            self.cancel_token.clone(),
        ));

        // UI loop
        tasks.spawn(tempel_ui::ui_loop(
            self.controller.subscribe(),
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
        self.controller.dispose();
    }
}
