//! Request handlers and wire types.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::deck::Card;
use crate::meaning::MeaningTable;

use super::AppState;

/// Context requested when the draw body omits one.
const DEFAULT_CONTEXT: &str = "Soul";

#[derive(Debug, Deserialize)]
pub(super) struct DrawRequest {
    #[serde(default = "default_context")]
    context: String,
}

impl Default for DrawRequest {
    fn default() -> Self {
        Self {
            context: default_context(),
        }
    }
}

fn default_context() -> String {
    DEFAULT_CONTEXT.to_string()
}

#[derive(Debug, Serialize)]
pub(super) struct PoolResponse {
    status: &'static str,
    cards_remaining: usize,
}

#[derive(Debug, Serialize)]
pub(super) struct DrawResponse {
    card: Card,
    meaning: String,
    context: String,
    cards_remaining: usize,
    metadata: MeaningTable,
}

#[derive(Debug, Serialize)]
pub(super) struct ErrorResponse {
    error: String,
}

#[derive(Debug, Serialize)]
pub(super) struct StatusResponse {
    cards_remaining: usize,
    total_cards: usize,
    status: &'static str,
}

#[derive(Debug, Serialize)]
pub(super) struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

pub(super) async fn shuffle(State(state): State<Arc<AppState>>) -> Json<PoolResponse> {
    let cards_remaining = state.deck.lock().expect("deck mutex poisoned").shuffle();
    tracing::debug!(cards_remaining, "deck shuffled");
    Json(PoolResponse {
        status: "shuffled",
        cards_remaining,
    })
}

pub(super) async fn draw(
    State(state): State<Arc<AppState>>,
    body: Option<Json<DrawRequest>>,
) -> Response {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let (card, cards_remaining) = {
        let mut deck = state.deck.lock().expect("deck mutex poisoned");
        let card = deck.draw();
        (card, deck.status().cards_remaining)
    };

    let Some(card) = card else {
        let body = Json(ErrorResponse {
            error: "Deck is empty. Please shuffle to reset.".to_string(),
        });
        return (StatusCode::BAD_REQUEST, body).into_response();
    };

    // Document reads happen outside the deck lock.
    let meaning = state.resolver.resolve(&card, &request.context);
    let metadata = state.resolver.resolve_all(&card);
    tracing::debug!(card = %card.name, context = %request.context, cards_remaining, "card drawn");

    Json(DrawResponse {
        card,
        meaning,
        context: request.context,
        cards_remaining,
        metadata,
    })
    .into_response()
}

pub(super) async fn reset(State(state): State<Arc<AppState>>) -> Json<PoolResponse> {
    let cards_remaining = state.deck.lock().expect("deck mutex poisoned").reset();
    tracing::debug!(cards_remaining, "deck reset");
    Json(PoolResponse {
        status: "reset",
        cards_remaining,
    })
}

pub(super) async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let status = state.deck.lock().expect("deck mutex poisoned").status();
    Json(StatusResponse {
        cards_remaining: status.cards_remaining,
        total_cards: status.total_cards,
        status: "operational",
    })
}

pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
    })
}
