//! Timetabling domain models.
//!
//! Provides the value types flowing between graph construction and
//! coloring. All are plain owned data: a graph is built once and read
//! afterwards; colorings and slot groups are derived from it.
//!
//! # Domain Mappings
//!
//! | u-timetable | Exam timetabling | Transit planning |
//! |-------------|------------------|------------------|
//! | Vertex | Exam subject | Transport line |
//! | Conflict edge | Shared student | Shared stop |
//! | Color | Exam session | Departure slot |
//! | Slot group | Exams held together | Lines run together |

mod adjacency;
mod coloring;
mod entity;
mod graph;

pub use adjacency::AdjacencyList;
pub use coloring::{Coloring, SlotGroups};
pub use entity::EntityNames;
pub use graph::ConflictGraph;

pub(crate) use graph::complete_edge_count;
