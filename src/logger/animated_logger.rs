use std::io::Write;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

const FRAME_INTERVAL_MS: u64 = 150;

/// Spinner on stderr whose caption can change while it runs, e.g. to follow a
/// job's status and progress.
pub struct AnimatedLogger {
    animation_chars: Vec<&'static str>,
    message_sender: watch::Sender<String>,
    stop_sender: Option<mpsc::UnboundedSender<()>>,
    task_handle: Option<JoinHandle<()>>,
}

impl AnimatedLogger {
    pub fn new(message: String) -> Self {
        let animation_chars = vec!["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
        let (message_sender, _) = watch::channel(message);

        Self {
            animation_chars,
            message_sender,
            stop_sender: None,
            task_handle: None,
        }
    }

    pub fn start(&mut self) {
        let (stop_tx, mut stop_rx) = mpsc::unbounded_channel();
        let message_rx = self.message_sender.subscribe();
        let animation_chars = self.animation_chars.clone();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut interval = tokio::time::interval(tokio::time::Duration::from_millis(FRAME_INTERVAL_MS));

            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let message = message_rx.borrow().clone();
                        eprint!("\r\x1b[K{} {} ", message, animation_chars[frame]);
                        let _ = std::io::stderr().flush();
                        frame = (frame + 1) % animation_chars.len();
                    }
                    _ = stop_rx.recv() => {
                        break;
                    }
                }
            }
        });

        self.stop_sender = Some(stop_tx);
        self.task_handle = Some(handle);
    }

    pub fn set_message(&self, message: String) {
        self.message_sender.send_replace(message);
    }

    pub fn message(&self) -> String {
        self.message_sender.borrow().clone()
    }

    pub async fn stop(&mut self, final_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K✅  {}\n", final_message);
        let _ = std::io::stderr().flush();
    }

    pub async fn error(&mut self, error_message: &str) {
        self.halt().await;
        eprint!("\r\x1b[K❌ {}\n", error_message);
        let _ = std::io::stderr().flush();
    }

    async fn halt(&mut self) {
        if let Some(sender) = self.stop_sender.take() {
            let _ = sender.send(());
        }

        if let Some(handle) = self.task_handle.take() {
            let _ = handle.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn message_can_change_while_spinning() {
        let mut logger = AnimatedLogger::new("cloning (10%)".to_string());
        logger.start();
        logger.set_message("analyzing (44%)".to_string());

        assert_eq!(logger.message(), "analyzing (44%)");
        logger.stop("done").await;
        assert!(logger.task_handle.is_none());
    }
}
