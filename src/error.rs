//! 错误类型定义

use crate::types::VertexId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点编号越界: {vertex}, 图中顶点数为 {num_vertices}")]
    OutOfRange {
        vertex: VertexId,
        num_vertices: usize,
    },

    #[error("源点与汇点相同: {0}")]
    SameEndpoint(VertexId),

    #[error("顶点 {src} 与 {target} 之间不存在路径")]
    Disconnected {
        src: VertexId,
        target: VertexId,
    },

    #[error("顶点 {src} 与 {target} 之间只存在一条不相交路径")]
    InsufficientDisjointPaths {
        src: VertexId,
        target: VertexId,
    },

    #[error("算法引擎错误: {0}")]
    EngineFailure(String),
}
