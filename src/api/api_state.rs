//! Channel handle between the UI and the API worker

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::api_types::{ApiRequest, ApiResponse};

const NOT_CONNECTED: &str = "Not connected to the server";
const WORKER_STOPPED: &str = "API worker stopped";

#[derive(Default)]
pub struct ApiState {
    request_tx: Option<Sender<ApiRequest>>,
    response_rx: Option<Receiver<ApiResponse>>,
    /// Requests sent but not yet answered
    in_flight: usize,
    /// A `WorkerStopped` response has already been handed out
    stop_reported: bool,
}

impl ApiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_channels(
        &mut self,
        request_tx: Sender<ApiRequest>,
        response_rx: Receiver<ApiResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
        self.in_flight = 0;
        self.stop_reported = false;
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Queue a request for the worker. Fails when no worker is attached or
    /// the worker has stopped.
    pub fn send(&mut self, request: ApiRequest) -> Result<(), String> {
        let Some(tx) = &self.request_tx else {
            return Err(NOT_CONNECTED.to_string());
        };

        match tx.send(request) {
            Ok(()) => {
                self.in_flight += 1;
                Ok(())
            }
            Err(_) => {
                log::error!("API worker is no longer running");
                self.request_tx = None;
                Err(NOT_CONNECTED.to_string())
            }
        }
    }

    /// Drain every response that has arrived so far. A worker that went
    /// away without saying so is reported as `WorkerStopped` once.
    pub fn poll(&mut self) -> Vec<ApiResponse> {
        let mut responses = Vec::new();
        let Some(rx) = &self.response_rx else {
            return responses;
        };

        loop {
            match rx.try_recv() {
                Ok(response) => {
                    self.in_flight = self.in_flight.saturating_sub(1);
                    if matches!(response, ApiResponse::WorkerStopped { .. }) {
                        self.stop_reported = true;
                    }
                    responses.push(response);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    log::error!("API worker response channel closed");
                    self.response_rx = None;
                    self.request_tx = None;
                    self.in_flight = 0;
                    if !self.stop_reported {
                        self.stop_reported = true;
                        responses.push(ApiResponse::WorkerStopped {
                            message: WORKER_STOPPED.to_string(),
                        });
                    }
                    break;
                }
            }
        }

        responses
    }
}
