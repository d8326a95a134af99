//! 图算法模块
//!
//! 包含最短路径、最大流引擎和不相交路径求解器

mod dijkstra;
mod disjoint;
mod max_flow;
mod path_tracing;
mod suurballe;

pub use dijkstra::{Dijkstra, ShortestPathTree};
pub use disjoint::{edge_disjoint_paths, vertex_disjoint_paths, DisjointPathSolver};
pub use max_flow::{EdmondsKarp, MaxFlow};
pub use path_tracing::{path_vertices, FlowPathDecomposer, PathTracer};
pub use suurballe::{suurballe_disjoint_paths, Suurballe};
