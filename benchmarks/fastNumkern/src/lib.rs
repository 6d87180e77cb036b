//! Benchmark-only crate; see `src/bench.rs`.

#![allow(non_snake_case)]
