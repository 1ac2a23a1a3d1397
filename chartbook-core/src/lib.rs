//! Chartbook Core — observation tables, ingest, transforms, chart specifications.
//!
//! This crate contains everything up to (but not including) the renderer:
//! - Domain types (observations, observation tables)
//! - CSV ingestion with schema validation
//! - Pure transforms (percent change, regrouping, group summaries)
//! - Declarative chart specifications (mapping, geometry, scales, decoration, theme)
//!
//! A figure is a straight-line pipeline: load a table, derive columns, build
//! a [`spec::ChartSpec`], hand it to the renderer. Tables are never mutated
//! after construction; every transform returns a new table.

pub mod data;
pub mod domain;
pub mod transform;
pub mod spec;
