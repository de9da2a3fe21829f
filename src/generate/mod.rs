//! Combinatorial candidate generation.
//!
//! - [`pool`]: value pools and per-placeholder resolution
//! - [`product`]: lazy index-vector Cartesian product
//! - [`generator`]: pattern rendering and word-uniqueness enforcement

pub mod generator;
pub mod pool;
pub mod product;

pub use generator::{
    CandidateSet, Generator, PatternCandidates, generate_passwords, has_repeated_word, render,
};
pub use pool::{Pools, case_variants, resolve_pool, resolve_pools};
pub use product::IndexProduct;
