//! Embedded reference dataset.
//!
//! The engine treats all content as external data; this module ships the
//! reference Brazilian jiu-jitsu flow used by demos and tests so consumers
//! get a working diagram without authoring their own JSON.

use crate::model::Dataset;

const BJJ_JSON: &str = include_str!("data/bjj.json");

/// The reference dataset: 7 positions, 38 techniques, including the three
/// counters to the mounted armbar.
pub fn builtin() -> Dataset {
    Dataset::from_json(BJJ_JSON).expect("embedded reference dataset must be valid")
}
