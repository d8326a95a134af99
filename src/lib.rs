//! RouteGraph - 网络路由冗余路径分析库
//!
//! 计算两点之间互不重叠的路径集合，支持：
//! - 顶点不相交路径（基于顶点拆分 + 最大流归约）
//! - 边不相交路径（同样的归约，容量放在边上）
//! - Suurballe 算法（总长度最小的一对边不相交路径）
//!
//! 典型场景：备份路由规划、链路冗余分析。

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod types;

// 重导出常用类型与入口函数
pub use algorithm::{
    edge_disjoint_paths, suurballe_disjoint_paths, vertex_disjoint_paths, DisjointPathSolver,
    Suurballe,
};
pub use error::{Error, Result};
pub use graph::{lattice, Graph};
pub use types::{EdgeKey, EdgeWeights, VertexId, PSEUDO_INF};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
