// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
A sink that hands lines to a dedicated writer thread.

Logging threads only pay for a channel send; the writer thread owns the inner sink and writes lines
in the order they were received.  This is the single-writer alternative to sharing a locked sink
between threads.
*/

use crate::log_record::LogRecord;
use crate::sink::Sink;
use crate::sys::{Duration, Instant};
use std::sync::Arc;

use wasm_safe_mutex::mpsc;

/// How long the writer waits for a message before checking again.
const IDLE_POLL: Duration = Duration::from_millis(250);
/// How long [ChannelSink::flush] waits for the writer to catch up.
const FLUSH_TIMEOUT: Duration = Duration::from_secs(5);

enum Message {
    Line(LogRecord),
    Flush(mpsc::Sender<()>),
}

/**
Forwards lines over a channel to a writer thread.

```rust
use scopelog::{ChannelSink, MemorySink, Sink};
use std::sync::Arc;

let memory = Arc::new(MemorySink::new());
let sink = ChannelSink::new(memory.clone());
let mut record = scopelog::LogRecord::new(scopelog::Level::Info);
record.log("queued");
record.end_line();
sink.finish_log_record(record);

sink.flush();
assert_eq!(memory.drain_logs(), "queued\n");
```
*/
pub struct ChannelSink {
    sender: mpsc::Sender<Message>,
    inner: Arc<dyn Sink>,
}

impl std::fmt::Debug for ChannelSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelSink")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl ChannelSink {
    /// Starts a writer thread that owns `inner`.  The thread exits once the sink is dropped.
    pub fn new(inner: Arc<dyn Sink>) -> Self {
        let (sender, receiver) = mpsc::channel();
        spawn_writer(receiver, inner.clone());
        Self { sender, inner }
    }
}

impl Sink for ChannelSink {
    fn finish_log_record(&self, record: LogRecord) {
        // Ignore send failures; a writer that is gone loses the line.
        let _ = self.sender.send_sync(Message::Line(record));
    }

    /// Waits until the writer has written every line sent before this call, then flushes the
    /// inner sink.
    fn flush(&self) {
        let (reply, done) = mpsc::channel();
        if self.sender.send_sync(Message::Flush(reply)).is_err() {
            return;
        }
        let _ = done.recv_sync_timeout(Instant::now() + FLUSH_TIMEOUT);
    }
}

fn spawn_writer(receiver: mpsc::Receiver<Message>, inner: Arc<dyn Sink>) {
    #[cfg(not(target_arch = "wasm32"))]
    let _ = std::thread::Builder::new()
        .name("scopelog-writer".to_string())
        .spawn(move || writer_loop(receiver, inner));

    #[cfg(target_arch = "wasm32")]
    let _ = wasm_thread::spawn(move || writer_loop(receiver, inner));
}

fn writer_loop(receiver: mpsc::Receiver<Message>, inner: Arc<dyn Sink>) {
    loop {
        match receiver.recv_sync_timeout(Instant::now() + IDLE_POLL) {
            Ok(Message::Line(record)) => inner.finish_log_record(record),
            Ok(Message::Flush(reply)) => {
                inner.flush();
                let _ = reply.send_sync(());
            }
            Err(mpsc::RecvTimeoutError::Timeout) => {}
            Err(mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }
    inner.flush();
}
