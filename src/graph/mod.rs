//! 图模块
//!
//! 内存图结构与测试用网格图构造

mod graph;
mod lattice;

pub use graph::Graph;
pub use lattice::lattice;
