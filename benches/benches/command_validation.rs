//! Benchmarks for command validation and parsing in tool-sdk.
//!
//! Performance-critical paths:
//! - `validate`: pattern checks run on every input-change event
//! - `parse`: token walk run once per accepted submission

#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use tool_sdk::{parse, validate};

const INPUTS: &[(&str, &str)] = &[
    ("simple_get", "curl https://api.example.com/data"),
    (
        "with_options",
        "curl -X POST https://api.example.com/users -H 'Content-Type: application/json' -d '{\"name\":\"test\"}'",
    ),
    (
        "long_command",
        "curl -X PUT https://api.example.com/items/42 -H 'Authorization: Bearer token' -H 'Accept: application/json' -H 'X-Env: prod' --data-raw '{\"status\":\"done\",\"tags\":[\"a\",\"b\",\"c\"]}' -s -L",
    ),
];

const REJECTED: &[(&str, &str)] = &[
    ("wrong_prefix", "wget https://api.example.com/data"),
    ("no_url", "curl -v -s something-not-a-url"),
    ("no_option", "curl weirdcommand https://api.example.com"),
];

fn bench_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("command_validation/validate");

    for (name, input) in INPUTS.iter().chain(REJECTED) {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| validate(black_box(input)));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("command_validation/parse");

    for (name, input) in INPUTS {
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(name), input, |b, input| {
            b.iter(|| parse(black_box(input)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_validate, bench_parse);
criterion_main!(benches);
