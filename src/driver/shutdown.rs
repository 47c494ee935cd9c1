use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Background Ctrl+C listener feeding the loop's shutdown channel.
///
/// The listener task is aborted when this is dropped, so it never outlives
/// the loop it was started for.
pub struct CtrlCListener {
    task: JoinHandle<()>,
}

impl CtrlCListener {
    /// Spawn the listener; the receiver flips to `true` on Ctrl+C
    pub fn spawn() -> (Self, watch::Receiver<bool>) {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let task = tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                let _ = shutdown_tx.send(true);
            }
        });
        (Self { task }, shutdown_rx)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for CtrlCListener {
    fn drop(&mut self) {
        self.task.abort();
    }
}
