// Copyright 2025 the Waymark Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::sync::Arc;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use waymark_location::action::Action;
use waymark_location::config::{LocationDescriptor, ReducerConfig};
use waymark_location::reducer::LocationReducer;
use waymark_location::types::{Location, LocationOptions, RouteTable};
use waymark_query::{FormCodec, Query, QueryCodec};

fn gen_routes(n: usize) -> RouteTable {
    (0..n)
        .map(|i| (format!("/section/{i}"), serde_json::json!({ "title": format!("Section {i}") })))
        .collect()
}

fn gen_query(n: usize) -> Query {
    (0..n).map(|i| (format!("k{i}"), format!("v{i}"))).collect()
}

fn reducer(routes: usize, query: usize) -> LocationReducer {
    let search = format!("?{}", FormCodec.encode(&gen_query(query)));
    LocationReducer::new(
        ReducerConfig::new(LocationDescriptor {
            search,
            ..LocationDescriptor::new("/")
        })
        .with_routes(gen_routes(routes)),
    )
}

// Push then land, `n` times; every other navigation persists the query.
fn navigate(r: &LocationReducer, mut state: Arc<Location>, n: usize) -> Arc<Location> {
    for i in 0..n {
        let href = format!("/section/{}?page={i}", i % 8);
        let options = (i % 2 == 0).then_some(LocationOptions::PERSIST_QUERY);
        state = r.dispatch(&state, &Action::push(&href, options, r.codec()));
        state = r.dispatch(&state, &Action::location_changed(&href));
    }
    state
}

fn bench_transitions(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitions");
    for &routes in &[8_usize, 256] {
        let r = reducer(routes, 4);
        group.throughput(Throughput::Elements(64));
        group.bench_function(format!("push_land_x64_routes{routes}"), |b| {
            b.iter_batched(
                || r.initial_state(),
                |state| black_box(navigate(&r, state, 64)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_persisted_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("persisted_merge");
    for &keys in &[4_usize, 64] {
        let r = reducer(8, keys);
        group.bench_function(format!("merge_keys{keys}"), |b| {
            b.iter_batched(
                || {
                    let state = r.initial_state();
                    let persist = Some(LocationOptions::PERSIST_QUERY);
                    let push = Action::push("/merged?extra=1", persist, r.codec());
                    r.dispatch(&state, &push)
                },
                |state| {
                    let changed = Action::location_changed("/merged?extra=1");
                    black_box(r.dispatch(&state, &changed))
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_noop(c: &mut Criterion) {
    let r = reducer(256, 4);
    let state = r.initial_state();
    let report = Action::LocationChanged(waymark_location::types::LocationPayload {
        pathname: state.pathname.clone(),
        search: state.search.clone(),
        hash: state.hash.clone(),
        basename: None,
    });
    c.bench_function("noop_location_change", |b| {
        b.iter(|| black_box(r.dispatch(&state, &report)));
    });
}

criterion_group!(benches, bench_transitions, bench_persisted_merge, bench_noop);
criterion_main!(benches);
