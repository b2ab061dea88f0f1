//! # tos-core
//!
//! Table-of-specifications engine — exact integer apportionment for curriculum
//! test blueprints.
//!
//! ---
//!
//! ## This is not a spreadsheet. It is an exactness guarantee.
//!
//! A test blueprint (a *table of specifications*) starts as raw weight scores
//! an educator assigns to each (learning unit × behavioral domain) cell. From
//! that one grid the blueprint derives two more: a percentage table whose
//! grand total is **exactly 100**, and a test-item-count table whose grand
//! total is **exactly 60**. Naive rounding cannot deliver that — floor and you
//! come up short, round and you overshoot, and either way the item counts no
//! longer add up in front of a curriculum committee.
//!
//! Three primitives make the totals land exactly, every time:
//!
//! **Largest Remainder apportionment** — each cell gets the floor of its
//! proportional share, then the shortfall is handed out one unit at a time in
//! descending order of exact fractional remainder. The grand total is correct
//! by construction, and the arithmetic is pure `u64` integer math — no floats,
//! no epsilon, no platform drift.
//!
//! **Global matrix scaling** — the whole grid is flattened and apportioned as
//! one sequence, so the per-cell ceiling and the remainder ranking compete
//! across the entire table. Only the grand total is exact by design; rows and
//! columns fall where proportionality puts them.
//!
//! **Dense priority ranking** — row and column totals are ranked for the
//! blueprint's "Rank" columns. Ties share a rank, the next distinct value
//! takes the immediately following rank, zero rows get a dash instead of a
//! number.
//!
//! ---
//!
//! ## The pipeline
//!
//! ```text
//! raw weights ──► scale_matrix(100, ceiling 10) ──► percent table
//!                        │
//!                        └──► scale_matrix(60) ──► item-count table
//!
//! row / column sums ──► priorities ──► rank columns (1..=10, "-" for zero)
//! ```
//!
//! ## Module overview
//!
//! | Module | Key items | What it does |
//! |--------|-----------|--------------|
//! | [`apportion`] | [`apportion::apportion`] | Largest Remainder Method with optional per-cell ceiling |
//! | [`matrix`] | [`matrix::scale_matrix`] | Shape-preserving global rescale of a 2-D grid |
//! | [`rank`] | [`rank::priorities`], [`rank::Priority`] | Dense competition ranking, capped at 10 |
//! | [`blueprint`] | [`blueprint::Worksheet`], [`blueprint::TableSet`] | Editable score grid and the three derived tables |
//!
//! ## Guarantees
//!
//! - `sum(apportion(v, t, _)) == t` whenever `sum(v) > 0`; all-zero input
//!   yields all-zero output (the empty proportion is left undefined, never
//!   divided by).
//! - A supplied ceiling is honored whenever `t <= len(v) * ceiling`; when the
//!   target is mathematically unreachable underneath it, the grand total wins
//!   and the ceiling is exceeded.
//! - Every function is pure, synchronous, and deterministic — same input,
//!   same output, no hidden state, safe to call from any thread.
//!
//! ## `no_std`
//!
//! This crate is `#![no_std]` by default (it requires `alloc`). Enable the
//! `std` feature for downstream convenience, and the `serde` feature for
//! serialisation support on the worksheet and table types.
//!
//! ## License
//!
//! Business Source License 1.1. Free for evaluation and non-production use.
//! Commercial production use requires a license from Flout Labs
//! (cbyrne@floutlabs.com).

#![cfg_attr(not(any(feature = "std", feature = "python-ffi")), no_std)]
#![deny(unsafe_code)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Pull in std when the feature is enabled (FFI, downstream convenience).
#[cfg(any(feature = "std", feature = "python-ffi"))]
extern crate std;

extern crate alloc;

pub mod apportion;
pub mod blueprint;
pub mod matrix;
pub mod rank;

#[cfg(feature = "python-ffi")]
pub mod ffi;
