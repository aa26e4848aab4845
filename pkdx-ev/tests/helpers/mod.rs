//! Stub upstream API for integration tests
//!
//! Serves PokeAPI-shaped documents from in-memory tables on an ephemeral
//! loopback port. URLs inside the documents point back at the stub.

#![allow(dead_code)]

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pkdx_common::config::TomlConfig;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/pokemon/other/official-artwork";

/// Fallback artwork URL for a species id
pub fn fallback_art(id: u32) -> String {
    format!("{}/{}.png", ARTWORK_BASE, id)
}

/// Artwork URL the stub reports for a pokemon
pub fn stub_art(name: &str) -> String {
    format!("https://art.test/{}.png", name)
}

#[derive(Default)]
struct Tables {
    pokemon: HashMap<String, Value>,
    species: HashMap<String, Value>,
    chains: HashMap<String, Value>,
    broken_chains: HashSet<String>,
    failing: HashSet<String>,
    delays: HashMap<String, Duration>,
    list: Vec<String>,
    hits: HashMap<String, usize>,
}

struct StubState {
    base_url: String,
    tables: Mutex<Tables>,
}

/// Running stub server
pub struct StubUpstream {
    pub base_url: String,
    state: Arc<StubState>,
}

#[derive(Deserialize)]
struct ListQuery {
    limit: Option<usize>,
}

impl StubUpstream {
    pub async fn spawn() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api/v2", addr);

        let state = Arc::new(StubState {
            base_url: base_url.clone(),
            tables: Mutex::new(Tables::default()),
        });

        let app = Router::new()
            .route("/api/v2/pokemon/", get(list_pokemon))
            .route("/api/v2/pokemon/:name", get(get_pokemon))
            .route("/api/v2/pokemon-species/:id/", get(get_species))
            .route("/api/v2/evolution-chain/:id/", get(get_chain))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }

    /// Service config pointing at this stub
    pub fn config(&self) -> TomlConfig {
        TomlConfig {
            api_base_url: self.base_url.clone(),
            request_timeout_secs: 5,
            ..TomlConfig::default()
        }
    }

    pub fn species_url(&self, id: u32) -> String {
        format!("{}/pokemon-species/{}/", self.base_url, id)
    }

    pub fn chain_url(&self, id: u32) -> String {
        format!("{}/evolution-chain/{}/", self.base_url, id)
    }

    /// Chain node whose species reference points at this stub
    pub fn node(&self, name: &str, id: u32, children: Vec<Value>) -> Value {
        json!({
            "species": {"name": name, "url": self.species_url(id)},
            "evolves_to": children,
        })
    }

    /// Chain node with an arbitrary species URL
    pub fn node_with_url(&self, name: &str, url: &str, children: Vec<Value>) -> Value {
        json!({
            "species": {"name": name, "url": url},
            "evolves_to": children,
        })
    }

    /// Register a pokemon detail record with official artwork
    pub fn add_pokemon(&self, name: &str, species_id: u32) {
        let record = json!({
            "name": name,
            "height": 7,
            "weight": 69,
            "sprites": {
                "front_default": format!("https://sprite.test/{}.png", name),
                "back_default": format!("https://sprite.test/back/{}.png", name),
                "other": {"official-artwork": {"front_default": stub_art(name)}}
            },
            "types": [
                {"slot": 1, "type": {"name": "grass", "url": format!("{}/type/12/", self.base_url)}},
                {"slot": 2, "type": {"name": "poison", "url": format!("{}/type/4/", self.base_url)}}
            ],
            "species": {"name": name, "url": self.species_url(species_id)}
        });
        self.tables().pokemon.insert(name.to_string(), record);
    }

    /// Register a species record, optionally linked to a chain
    pub fn add_species(&self, id: u32, chain_id: Option<u32>) {
        let record = match chain_id {
            Some(chain) => json!({
                "name": format!("species-{}", id),
                "evolution_chain": {"url": self.chain_url(chain)},
            }),
            None => json!({"name": format!("species-{}", id), "evolution_chain": null}),
        };
        self.tables().species.insert(id.to_string(), record);
    }

    pub fn add_chain(&self, id: u32, root: Value) {
        self.tables()
            .chains
            .insert(id.to_string(), json!({"id": id, "chain": root}));
    }

    /// Chain endpoint answers 200 with a body that is not JSON
    pub fn break_chain(&self, id: u32) {
        self.tables().broken_chains.insert(id.to_string());
    }

    /// Detail lookups for `name` answer 500
    pub fn fail_pokemon(&self, name: &str) {
        self.tables().failing.insert(name.to_string());
    }

    pub fn delay_pokemon(&self, name: &str, delay: Duration) {
        self.tables().delays.insert(name.to_string(), delay);
    }

    /// Names served by the list endpoint, in order
    pub fn set_list(&self, names: &[&str]) {
        self.tables().list = names.iter().map(|n| n.to_string()).collect();
    }

    /// Requests seen for `/pokemon/{name}`
    pub fn pokemon_hits(&self, name: &str) -> usize {
        self.tables()
            .hits
            .get(name)
            .copied()
            .unwrap_or(0)
    }

    fn tables(&self) -> std::sync::MutexGuard<'_, Tables> {
        self.state.tables.lock().unwrap()
    }
}

async fn list_pokemon(
    State(state): State<Arc<StubState>>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let tables = state.tables.lock().unwrap();
    let limit = query.limit.unwrap_or(20);
    let results: Vec<Value> = tables
        .list
        .iter()
        .take(limit)
        .map(|name| json!({"name": name, "url": format!("{}/pokemon/{}", state.base_url, name)}))
        .collect();

    Json(json!({"count": tables.list.len(), "results": results}))
}

async fn get_pokemon(State(state): State<Arc<StubState>>, Path(name): Path<String>) -> Response {
    let (delay, failing, record) = {
        let mut tables = state.tables.lock().unwrap();
        *tables.hits.entry(name.clone()).or_insert(0) += 1;
        (
            tables.delays.get(&name).copied(),
            tables.failing.contains(&name),
            tables.pokemon.get(&name).cloned(),
        )
    };

    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    if failing {
        return (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response();
    }

    match record {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_species(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    let record = state.tables.lock().unwrap().species.get(&id).cloned();
    match record {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn get_chain(State(state): State<Arc<StubState>>, Path(id): Path<String>) -> Response {
    let (broken, record) = {
        let tables = state.tables.lock().unwrap();
        (tables.broken_chains.contains(&id), tables.chains.get(&id).cloned())
    };

    if broken {
        return (StatusCode::OK, "<html>not a chain</html>").into_response();
    }

    match record {
        Some(record) => Json(record).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
