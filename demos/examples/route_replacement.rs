// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Route-table replacement handshake, starting from a JSON config.
//!
//! Run:
//! - `cargo run -p waymark_demos --example route_replacement`

use tracing_subscriber::EnvFilter;
use waymark_location::action::Action;
use waymark_location::config::ReducerConfig;
use waymark_location::error::ConfigError;
use waymark_location::reducer::LocationReducer;
use waymark_location::types::{LocationOptions, RouteTable};

const CONFIG: &str = r#"{
    "routes": {
        "/": { "title": "Home" },
        "/docs": { "title": "Docs" }
    },
    "initialLocation": { "pathname": "/docs", "search": "?v=1", "basename": "/site" }
}"#;

fn main() -> Result<(), ConfigError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let reducer: LocationReducer = LocationReducer::new(ReducerConfig::from_json_str(CONFIG)?);
    let mut state = reducer.initial_state();
    println!("routes: {:?}", state.routes.keys().collect::<Vec<_>>());

    // A lazily loaded section adds its routes.
    let mut routes: RouteTable = state.routes.clone();
    routes.insert("/admin".into(), serde_json::json!({ "title": "Admin" }));
    state = reducer.dispatch(
        &state,
        &Action::replace_routes(routes, LocationOptions::PERSIST_QUERY),
    );
    println!(
        "replaced: {:?}, staged options {:?}",
        state.routes.keys().collect::<Vec<_>>(),
        state.options
    );

    // The matcher has caught up with the new table.
    state = reducer.dispatch(&state, &Action::DidReplaceRoutes);
    println!("done: staged options {:?}, still at {}", state.options, state.href());

    Ok(())
}
