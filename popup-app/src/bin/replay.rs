//! Replay a JSON-lines event script from stdin through the popup engine.
//!
//! Each popup event is written to stdout as one JSON line; decisions and
//! diagnostics go to stderr via tracing (`RUST_LOG=debug` for details).

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use chat_popup_lib::app::SharedState;
use chat_popup_lib::notification::queue;
use chat_popup_lib::replay;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let settings = chat_popup_lib::init_foundation();

    let (out_tx, mut out_rx) = broadcast::channel::<String>(1024);
    let printer = tokio::spawn(async move {
        loop {
            match out_rx.recv().await {
                Ok(line) => println!("{line}"),
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!("Output lagged, {n} popup events dropped");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });

    let (renderer, worker) = queue::start_worker(out_tx);
    let state = SharedState::new(settings, Arc::new(renderer));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;
    while let Some(text) = lines.next_line().await? {
        line_no += 1;
        let Some(step) = replay::parse_line(line_no, &text)? else {
            continue;
        };
        if let Some(decision) = replay::apply(&state, line_no, step).await? {
            tracing::info!(line = line_no, ?decision, "Decision");
        }
    }

    // Dropping the state drops the last renderer and stops the worker.
    drop(state);
    worker.await?;
    printer.await?;
    tracing::info!(lines = line_no, "Replay finished");
    Ok(())
}
