//! API Worker Thread
//!
//! Runs HTTP calls on a background thread so the UI never blocks. Requests
//! arrive over a channel and are handled strictly one at a time; each one
//! produces exactly one `ApiResponse`.

use std::cell::RefCell;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread::{self, JoinHandle};

use super::ApiError;
use super::api_types::{ApiRequest, ApiResponse};
use super::blog_client::BlogClient;

thread_local! {
    /// Where a panic on this thread is reported. Only set on worker threads.
    static PANIC_REPORT_TX: RefCell<Option<Sender<ApiResponse>>> = const { RefCell::new(None) };
}

/// Spawn the API worker thread
///
/// The thread owns a single-threaded tokio runtime and exits once the
/// request channel is closed.
pub fn spawn_worker(
    client: BlogClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("bloglist-api".to_string())
        .spawn(move || {
            let report_tx = response_tx.clone();
            run_guarded(report_tx, move || {
                let rt = match tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
                {
                    Ok(rt) => rt,
                    Err(e) => {
                        log::error!("Failed to create tokio runtime for API worker: {}", e);
                        let _ = response_tx.send(ApiResponse::WorkerStopped {
                            message: format!("API worker failed to start: {}", e),
                        });
                        return;
                    }
                };

                rt.block_on(worker_loop(client, request_rx, response_tx));
            });
        })
}

/// Run `work` with panics caught and reported as `WorkerStopped`
///
/// While it runs, a panic on this thread is logged and sent through
/// `report_tx` instead of reaching the UI's hook, which would tear down the
/// terminal. Panics on other threads still go to the previous hook. At most
/// one report is sent.
fn run_guarded(report_tx: Sender<ApiResponse>, work: impl FnOnce()) {
    PANIC_REPORT_TX.with(|slot| *slot.borrow_mut() = Some(report_tx));

    let prev_hook: Arc<dyn Fn(&panic::PanicHookInfo<'_>) + Send + Sync> =
        Arc::from(panic::take_hook());
    let fallback = Arc::clone(&prev_hook);
    panic::set_hook(Box::new(move |panic_info| {
        let report_tx = PANIC_REPORT_TX
            .try_with(|slot| slot.borrow_mut().take())
            .ok()
            .flatten();
        let Some(report_tx) = report_tx else {
            (*fallback)(panic_info);
            return;
        };

        let panic_msg = panic_message(panic_info.payload());
        log::error!(
            "API worker panic: {} at {:?}",
            panic_msg,
            panic_info.location()
        );
        let _ = report_tx.send(ApiResponse::WorkerStopped {
            message: format!("API worker crashed: {}", panic_msg),
        });
    }));

    let result = panic::catch_unwind(AssertUnwindSafe(work));

    panic::set_hook(Box::new(move |panic_info| (*prev_hook)(panic_info)));
    // Still set if the hook never saw the panic
    let unreported = PANIC_REPORT_TX.with(|slot| slot.borrow_mut().take());

    if let Err(e) = result {
        let panic_msg = panic_message(e.as_ref());
        log::error!("API worker thread stopped: {}", panic_msg);
        if let Some(report_tx) = unreported {
            let _ = report_tx.send(ApiResponse::WorkerStopped {
                message: format!("API worker crashed: {}", panic_msg),
            });
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

async fn worker_loop(
    client: BlogClient,
    request_rx: Receiver<ApiRequest>,
    response_tx: Sender<ApiResponse>,
) {
    // Blocking recv() is fine in a dedicated thread
    while let Ok(request) = request_rx.recv() {
        let response = handle_request(&client, request).await;
        if response_tx.send(response).is_err() {
            // UI side has gone away
            break;
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("API worker loop finished");
}

/// Perform one request and describe its outcome
pub async fn handle_request(client: &BlogClient, request: ApiRequest) -> ApiResponse {
    let kind = request.kind();

    #[cfg(debug_assertions)]
    log::debug!("API request: {:?}", kind);

    let result: Result<ApiResponse, ApiError> = match request {
        ApiRequest::List => client.get_all().await.map(ApiResponse::Blogs),
        ApiRequest::Login(credentials) => client
            .login(&credentials)
            .await
            .map(ApiResponse::LoggedIn),
        ApiRequest::Create { blog, token } => {
            client.create(&blog, &token).await.map(ApiResponse::Created)
        }
        ApiRequest::Update { id, blog, token } => client
            .update(&id, &blog, token.as_deref())
            .await
            .map(ApiResponse::Updated),
        ApiRequest::Delete { id, token } => client
            .destroy(&id, &token)
            .await
            .map(|()| ApiResponse::Deleted { id }),
    };

    result.unwrap_or_else(|e| {
        log::warn!("API request {:?} failed: {}", kind, e);
        ApiResponse::Failed {
            request: kind,
            message: e.to_string(),
        }
    })
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;
