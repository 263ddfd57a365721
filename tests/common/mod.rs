#![allow(dead_code)]

use std::sync::Mutex;

use axum::Router;
use orbit_visualizer::client::{ComputeService, ServiceError};
use orbit_visualizer::core::{TrajectoryPoint, TrajectoryResult};
use orbit_visualizer::params::OrbitalParameters;
use tokio::sync::oneshot;

pub type Reply = Result<TrajectoryResult, ServiceError>;

/// Propagator stand-in whose answers are released by the test, keyed by the submitted parameters.
#[derive(Default)]
pub struct ScriptedService {
    pending: Mutex<Vec<(OrbitalParameters, oneshot::Receiver<Reply>)>>,
    calls: Mutex<Vec<OrbitalParameters>>,
}

impl ScriptedService {
    pub fn expect(&self, params: OrbitalParameters) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().unwrap().push((params, rx));
        tx
    }

    pub fn calls(&self) -> Vec<OrbitalParameters> {
        self.calls.lock().unwrap().clone()
    }
}

impl ComputeService for ScriptedService {
    async fn compute(&self, params: OrbitalParameters) -> Reply {
        self.calls.lock().unwrap().push(params);
        let reply = {
            let mut pending = self.pending.lock().unwrap();
            pending
                .iter()
                .position(|(expected, _)| *expected == params)
                .map(|index| pending.remove(index).1)
        };
        match reply {
            Some(rx) => rx
                .await
                .unwrap_or_else(|_| Err(ServiceError::Transport("reply dropped".to_string()))),
            None => Err(ServiceError::Transport("no scripted reply".to_string())),
        }
    }
}

/// Parameters from the reference scenario.
pub fn scenario_a_params() -> OrbitalParameters {
    OrbitalParameters {
        semi_major_axis: 7000.0,
        eccentricity: 0.01,
        inclination: 45.0,
        raan: 10.0,
        argp: 20.0,
        true_anomaly: 0.0,
    }
}

pub fn scenario_a_result() -> TrajectoryResult {
    TrajectoryResult::new(
        5828.5,
        vec![
            TrajectoryPoint::new(7000.0, 0.0, 0.0),
            TrajectoryPoint::new(0.0, 6999.0, 10.0),
        ],
    )
    .expect("valid trajectory")
}

pub const SCENARIO_A_BODY: &str = r#"{"period_seconds": 5828.5, "positions": [{"x": 7000, "y": 0, "z": 0}, {"x": 0, "y": 6999, "z": 10}]}"#;

/// Circle of `n` points at radius `r` in the x-y plane.
pub fn circle(n: usize, r: f64) -> TrajectoryResult {
    let positions = (0..n)
        .map(|i| {
            let theta = i as f64 / n as f64 * std::f64::consts::TAU;
            TrajectoryPoint::new(r * theta.cos(), r * theta.sin(), 0.0)
        })
        .collect();
    TrajectoryResult::new(5_800.0, positions).expect("valid trajectory")
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn_service(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind test listener");
    let addr = listener.local_addr().expect("listener addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("test server");
    });
    format!("http://{addr}")
}

/// A local URL nothing is listening on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}")
}
