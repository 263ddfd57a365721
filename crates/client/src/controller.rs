//! Request lifecycle controller.
//!
//! Exactly one [`RequestState`] is live. `submit` always moves to `InFlight` and
//! dispatches the remote call on the Tokio runtime; the call's completion arrives
//! later as a single `Succeeded` or `Failed` transition. Each submission carries a
//! sequence number and only the latest one may settle the state, so a slow
//! response to a superseded submission is dropped instead of overwriting newer
//! results. Outstanding calls are never aborted.

use std::sync::Arc;

use orbit_core::TrajectoryResult;
use orbit_params::OrbitalParameters;
use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::ServiceError;
use crate::service::ComputeService;

/// Live state of the one logical request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    InFlight {
        submitted_parameters: OrbitalParameters,
    },
    Succeeded {
        result: Arc<TrajectoryResult>,
    },
    Failed {
        message: String,
    },
}

impl RequestState {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight { .. })
    }

    /// True for `Succeeded` and `Failed`.
    pub fn is_settled(&self) -> bool {
        matches!(self, Self::Succeeded { .. } | Self::Failed { .. })
    }

    /// Status text shown to the user.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::InFlight { .. } => "Calculating...",
            Self::Succeeded { .. } => "Success!",
            Self::Failed { .. } => "Failed!",
        }
    }
}

/// Handle for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// One observed transition, tagged with the submission that caused it.
#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub sequence: u64,
    pub state: RequestState,
}

/// Ordered stream of every transition made after `subscribe` was called.
#[derive(Debug)]
pub struct Subscription {
    receiver: mpsc::UnboundedReceiver<StateChange>,
}

impl Subscription {
    /// Next transition; `None` once the controller is gone.
    pub async fn next(&mut self) -> Option<StateChange> {
        self.receiver.recv().await
    }

    /// Next already-delivered transition, without waiting.
    pub fn try_next(&mut self) -> Option<StateChange> {
        self.receiver.try_recv().ok()
    }

    /// Skip ahead to the next `Succeeded` or `Failed` transition.
    pub async fn next_settled(&mut self) -> Option<StateChange> {
        while let Some(change) = self.next().await {
            if change.state.is_settled() {
                return Some(change);
            }
        }
        None
    }
}

#[derive(Debug)]
struct Shared {
    state: RequestState,
    latest: u64,
    subscribers: Vec<mpsc::UnboundedSender<StateChange>>,
}

impl Shared {
    fn transition(&mut self, sequence: u64, state: RequestState) {
        self.state = state.clone();
        let change = StateChange { sequence, state };
        self.subscribers
            .retain(|subscriber| subscriber.send(change.clone()).is_ok());
    }
}

/// Sole writer of [`RequestState`].
pub struct RequestController<S> {
    service: Arc<S>,
    shared: Arc<Mutex<Shared>>,
    max_message_chars: usize,
}

impl<S> Clone for RequestController<S> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            shared: Arc::clone(&self.shared),
            max_message_chars: self.max_message_chars,
        }
    }
}

impl<S: ComputeService> RequestController<S> {
    /// Failure messages longer than this many characters are cut for display.
    pub const DEFAULT_MAX_MESSAGE_CHARS: usize = 4_096;

    pub fn new(service: S) -> Self {
        Self {
            service: Arc::new(service),
            shared: Arc::new(Mutex::new(Shared {
                state: RequestState::Idle,
                latest: 0,
                subscribers: Vec::new(),
            })),
            max_message_chars: Self::DEFAULT_MAX_MESSAGE_CHARS,
        }
    }

    pub fn with_max_message_chars(mut self, limit: usize) -> Self {
        self.max_message_chars = limit;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn current_state(&self) -> RequestState {
        self.shared.lock().state.clone()
    }

    pub fn subscribe(&self) -> Subscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        self.shared.lock().subscribers.push(sender);
        Subscription { receiver }
    }

    /// Move to `InFlight` and dispatch the remote call on the current Tokio runtime.
    /// Never fails directly; the outcome shows up as a later transition. Without a
    /// runtime the request settles as `Failed` straight away.
    pub fn submit(&self, params: OrbitalParameters) -> Ticket {
        let sequence = {
            let mut shared = self.shared.lock();
            shared.latest += 1;
            let sequence = shared.latest;
            shared.transition(
                sequence,
                RequestState::InFlight {
                    submitted_parameters: params,
                },
            );
            sequence
        };
        debug!(sequence, "dispatching propagation request");

        let limit = self.max_message_chars;
        let Ok(runtime) = Handle::try_current() else {
            let err =
                ServiceError::Transport("no async runtime to dispatch the request".to_string());
            settle(&self.shared, sequence, Err(err), limit);
            return Ticket(sequence);
        };
        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.shared);
        runtime.spawn(async move {
            let outcome = service.compute(params).await;
            settle(&shared, sequence, outcome, limit);
        });

        Ticket(sequence)
    }
}

fn settle(
    shared: &Mutex<Shared>,
    sequence: u64,
    outcome: Result<TrajectoryResult, ServiceError>,
    limit: usize,
) {
    let mut shared = shared.lock();
    if sequence != shared.latest {
        debug!(
            sequence,
            latest = shared.latest,
            "discarding response for superseded request"
        );
        return;
    }
    let next = match outcome {
        Ok(result) => {
            info!(
                sequence,
                points = result.len(),
                period_s = result.period_seconds(),
                "propagation succeeded"
            );
            RequestState::Succeeded {
                result: Arc::new(result),
            }
        }
        Err(err) => {
            warn!(sequence, kind = err.kind(), "propagation failed: {err}");
            RequestState::Failed {
                message: clip_message(&err.to_string(), limit),
            }
        }
    };
    shared.transition(sequence, next);
}

fn clip_message(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(limit).collect();
    clipped.push('…');
    clipped
}
