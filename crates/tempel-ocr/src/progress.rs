/// Status tag reported while text recognition is running
pub const RECOGNIZING_TEXT: &str = "recognizing text";

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    pub status: String,
    /// 0.0 - 1.0
    pub fraction: f32,
}

impl ProgressEvent {
    pub fn new(status: impl Into<String>, fraction: f32) -> Self {
        Self {
            status: status.into(),
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    pub fn is_recognizing(&self) -> bool {
        self.status == RECOGNIZING_TEXT
    }

    pub fn percent(&self) -> u8 {
        (self.fraction * 100.0).round() as u8
    }
}

pub type ProgressSender = kanal::AsyncSender<ProgressEvent>;
pub type ProgressReceiver = kanal::AsyncReceiver<ProgressEvent>;

pub fn progress_channel(capacity: usize) -> (ProgressSender, ProgressReceiver) {
    kanal::bounded_async(capacity)
}
