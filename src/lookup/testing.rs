//! In-process fake of the three upstream services, served by axum on a loopback port.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::client::HttpClient;
use crate::config::{EndpointsConfig, HttpConfig};

#[derive(Debug, Clone)]
pub enum Reply {
    Json(serde_json::Value),
    Status(u16, &'static str),
    /// 200 with a raw body
    Body(&'static str),
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Json(value) => Json(value).into_response(),
            Reply::Status(code, body) => {
                let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, body).into_response()
            }
            Reply::Body(body) => (StatusCode::OK, body).into_response(),
        }
    }
}

#[derive(Clone)]
struct FakeState {
    address: Reply,
    coordinates: Reply,
    passes: Reply,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeState {
    fn record(&self, request: String) {
        self.requests.lock().unwrap().push(request);
    }
}

pub struct FakeServicesBuilder {
    address: Reply,
    coordinates: Reply,
    passes: Reply,
}

impl FakeServicesBuilder {
    pub fn address(mut self, reply: Reply) -> Self {
        self.address = reply;
        self
    }

    pub fn coordinates(mut self, reply: Reply) -> Self {
        self.coordinates = reply;
        self
    }

    pub fn passes(mut self, reply: Reply) -> Self {
        self.passes = reply;
        self
    }

    pub async fn spawn(self) -> FakeServices {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = FakeState {
            address: self.address,
            coordinates: self.coordinates,
            passes: self.passes,
            requests: requests.clone(),
        };

        let app = Router::new()
            .route("/ip", get(address))
            .route("/geo/{ip}", get(coordinates))
            .route("/passes/iss-pass.json", get(passes))
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeServices { base_url, requests }
    }
}

pub struct FakeServices {
    base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl FakeServices {
    /// Defaults to the San Jose fixture chain.
    pub fn builder() -> FakeServicesBuilder {
        FakeServicesBuilder {
            address: Reply::Json(json!({ "ip": "162.245.144.188" })),
            coordinates: Reply::Json(json!({
                "status": "success",
                "data": { "ipv4": "162.245.144.188", "latitude": 37.3394, "longitude": -121.895 }
            })),
            passes: Reply::Json(json!({
                "message": "success",
                "request": { "latitude": 37.3394, "longitude": -121.895, "passes": 1 },
                "response": [ { "risetime": 1622574095, "duration": 465 } ]
            })),
        }
    }

    pub fn address_endpoint(&self) -> String {
        format!("{}/ip", self.base_url)
    }

    pub fn coordinates_endpoint(&self) -> String {
        format!("{}/geo", self.base_url)
    }

    pub fn passes_endpoint(&self) -> String {
        format!("{}/passes", self.base_url)
    }

    pub fn endpoints(&self) -> EndpointsConfig {
        EndpointsConfig {
            address: self.address_endpoint(),
            coordinates: self.coordinates_endpoint(),
            passes: self.passes_endpoint(),
        }
    }

    /// Requests seen so far, in arrival order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn count(&self, service: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.split(' ').next() == Some(service))
            .count()
    }
}

async fn address(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    let format = query.get("format").map(String::as_str).unwrap_or("");
    state.record(format!("address format={}", format));
    state.address.clone()
}

async fn coordinates(State(state): State<FakeState>, Path(ip): Path<String>) -> Reply {
    state.record(format!("coordinates {}", ip));
    state.coordinates.clone()
}

async fn passes(
    State(state): State<FakeState>,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    let lat = query.get("lat").map(String::as_str).unwrap_or("");
    let lon = query.get("lon").map(String::as_str).unwrap_or("");
    state.record(format!("passes lat={} lon={}", lat, lon));
    state.passes.clone()
}

pub fn test_client() -> HttpClient {
    let config = HttpConfig {
        system_proxy: false,
        ..HttpConfig::default()
    };
    HttpClient::new(&config).unwrap()
}

/// Endpoint on a loopback port with nothing listening.
pub async fn closed_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
