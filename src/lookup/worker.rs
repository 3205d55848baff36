//! Lookup worker thread
//!
//! Runs a current-thread tokio runtime on a background thread so network calls
//! never block the UI loop. Each request runs as its own task; requests are
//! never cancelled and responses are sent back in completion order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Sender};

use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

use super::{LookupChannels, LookupClient, LookupRequest, LookupResponse};

/// Spawn the lookup worker thread
///
/// The worker exits once every request sender is dropped, or once the response
/// receiver is gone.
pub fn spawn_worker(client: LookupClient) -> LookupChannels {
    let (request_tx, request_rx) = unbounded_channel();
    let (response_tx, response_rx) = mpsc::channel();

    std::thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                log::error!("Failed to start lookup runtime: {}", e);
                return;
            }
        };
        runtime.block_on(worker_loop(client, request_rx, response_tx));
    });

    LookupChannels {
        request_tx,
        response_rx,
    }
}

/// Main worker loop - processes requests until the channel is closed
async fn worker_loop(
    client: LookupClient,
    mut request_rx: UnboundedReceiver<LookupRequest>,
    response_tx: Sender<LookupResponse>,
) {
    let receiver_gone = Arc::new(AtomicBool::new(false));

    while let Some(request) = request_rx.recv().await {
        if receiver_gone.load(Ordering::Relaxed) {
            break;
        }

        log::debug!("Dispatching lookup request {}", request.request_id());

        let client = client.clone();
        let response_tx = response_tx.clone();
        let receiver_gone = Arc::clone(&receiver_gone);
        tokio::spawn(async move {
            let response = client.execute(request).await;
            if response_tx.send(response).is_err() {
                receiver_gone.store(true, Ordering::Relaxed);
            }
        });
    }

    log::debug!("Lookup worker shutting down");
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
