use crate::bridge::model::{HealthReply, StatusModel};
use log::{info, warn};
use std::{
    convert::Infallible,
    future::Future,
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{Filter, Rejection, Reply};

pub fn bind_address(port: u16) -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], port))
}

type SharedModel = Arc<RwLock<StatusModel>>;

fn with_state(
    state: SharedModel,
) -> impl Filter<Extract = (SharedModel,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

fn read_model(state: &SharedModel) -> StatusModel {
    match state.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// `GET /health`, `GET /metrics` and `GET /sightings`.
pub fn routes(
    state: SharedModel,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health = warp::path("health")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .map(|state: SharedModel| {
            let model = read_model(&state);
            warp::reply::json(&HealthReply {
                status: "ok".to_string(),
                cycle: model.cycle,
            })
        });

    let metrics = warp::path("metrics")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state.clone()))
        .map(|state: SharedModel| warp::reply::json(&read_model(&state).metrics));

    let sightings = warp::path("sightings")
        .and(warp::path::end())
        .and(warp::get())
        .and(with_state(state))
        .map(|state: SharedModel| warp::reply::json(&read_model(&state).sightings));

    health.or(metrics).or(sightings)
}

/// Binds the routes to `port` without panicking when it is taken. Must run
/// inside a tokio runtime; the returned future serves until dropped.
pub fn bind(
    state: SharedModel,
    port: u16,
) -> Result<(SocketAddr, impl Future<Output = ()> + 'static), warp::Error> {
    warp::serve(routes(state)).try_bind_ephemeral(bind_address(port))
}

/// Holds the latest cycle's status and optionally serves it over HTTP.
pub struct StatusBridge {
    state: SharedModel,
}

impl StatusBridge {
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(StatusModel::default())),
        }
    }

    /// Serves the routes on a dedicated thread with its own runtime.
    pub fn serve(&self, port: u16) {
        let state = self.state.clone();
        thread::spawn(move || {
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    warn!("status endpoint disabled, runtime failed: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                match bind(state, port) {
                    Ok((address, server)) => {
                        info!("status endpoint listening on http://{}", address);
                        server.await;
                    }
                    Err(err) => warn!("status endpoint disabled, bind failed: {}", err),
                }
            });
        });
    }

    pub fn publish(&self, model: StatusModel) {
        match self.state.write() {
            Ok(mut guard) => *guard = model,
            Err(poisoned) => *poisoned.into_inner() = model,
        }
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> StatusModel {
        read_model(&self.state)
    }
}

impl Default for StatusBridge {
    fn default() -> Self {
        Self::new()
    }
}
