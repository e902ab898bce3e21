//! Small helpers shared by the background tasks.

use tokio::sync::mpsc;

/// Send a value through a channel, logging a warning if the receiver is gone.
///
/// The load task outlives the UI loop when the user quits first; its result
/// is then dropped here instead of surfacing as an error.
pub async fn send_or_log<T>(tx: &mpsc::Sender<T>, value: T, context: &str) {
    if let Err(e) = tx.send(value).await {
        tracing::warn!("Dropped {}: {}", context, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Board;
    use crate::tui::Message;

    #[tokio::test]
    async fn test_board_result_is_delivered() {
        let (tx, mut rx) = mpsc::channel(1);
        let message = Message::BoardLoaded(Ok(Board::default()));
        send_or_log(&tx, message.clone(), "board load result").await;
        assert_eq!(rx.recv().await, Some(message));
    }

    #[tokio::test]
    async fn test_result_after_ui_exit_is_dropped() {
        let (tx, rx) = mpsc::channel::<Message>(1);
        drop(rx);
        send_or_log(
            &tx,
            Message::BoardLoaded(Err("invalid owner: cli".to_string())),
            "board load result",
        )
        .await;
        assert!(tx.is_closed());
    }
}
