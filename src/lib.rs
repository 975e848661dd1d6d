//! Conflict-graph timetabling for the U-Engine ecosystem.
//!
//! Models timetabling problems (exam sessions, transit departure slots)
//! as conflict graphs and assigns time slots by greedy graph coloring:
//! entities that conflict never share a slot.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `ConflictGraph`, `AdjacencyList`,
//!   `Coloring`, `SlotGroups`, `EntityNames`
//! - **`builder`**: Connected conflict-graph synthesis (`GraphBuilder`)
//! - **`coloring`**: Greedy coloring with pluggable vertex orderings
//! - **`summary`**: Slot counts and group-size tables
//! - **`validation`**: Builder input checks (empty/duplicate entities, ranges)
//!
//! # Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use u_timetable::builder::build_conflict_graph;
//! use u_timetable::coloring::{color_graph, strategies::LargestFirst};
//! use u_timetable::models::EntityNames;
//!
//! let subjects = EntityNames::subjects(20);
//! let graph = build_conflict_graph(&subjects, None, &mut StdRng::seed_from_u64(1)).unwrap();
//! let (coloring, groups) = color_graph(&graph, &LargestFirst);
//!
//! assert!(coloring.is_proper(&graph));
//! assert!(groups.is_partition_of(&graph));
//! ```
//!
//! # References
//!
//! - de Werra (1985), "An introduction to timetabling"
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"

pub mod builder;
pub mod coloring;
pub mod error;
pub mod models;
pub mod summary;
pub mod validation;

pub use error::{Result, TimetableError};
