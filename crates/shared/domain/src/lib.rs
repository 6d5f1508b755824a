//! # Domain Models
//!
//! Pure domain types for the V2G charging simulation with minimal dependencies (`serde`, `strum`).
//! Keep it lean: no I/O, networking, or decision logic, just the closed option sets, the
//! fixed power-flow graph and the configuration shape.

pub mod config;
pub mod constants;
pub mod graph;
pub mod selection;

pub use crate::graph::{FlowEdge, FlowNode, Point};
pub use crate::selection::{Action, CarModel, ChargerType, Choice, Region, Selection};
