//! 图数据结构
//!
//! 面向路径算法的轻量内存图：顶点为 `0..N` 的连续编号，
//! 边由端点对 `(u, v)` 唯一标识。求解器只读借用图，
//! 所有临时增广结构都在求解器内部构建，调用前后图保持不变。

use crate::error::{Error, Result};
use crate::types::{EdgeKey, VertexId};
use indexmap::IndexSet;

/// 内存图
///
/// 无向图的每条边只存储一次（按插入时的端点顺序），
/// 方向的物化由算法在内部完成。
#[derive(Debug, Clone)]
pub struct Graph {
    /// 是否有向
    directed: bool,
    /// 顶点数（顶点编号为 0..num_vertices）
    num_vertices: usize,
    /// 边集合（保持插入顺序，保证算法输出可复现）
    edges: IndexSet<EdgeKey>,
}

impl Graph {
    /// 创建空图
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            num_vertices: 0,
            edges: IndexSet::new(),
        }
    }

    /// 创建含 n 个顶点的空边图
    pub fn with_vertices(n: usize, directed: bool) -> Self {
        Self {
            directed,
            num_vertices: n,
            edges: IndexSet::new(),
        }
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点，返回新顶点编号
    pub fn add_vertex(&mut self) -> VertexId {
        let id = self.num_vertices;
        self.num_vertices += 1;
        id
    }

    /// 批量添加 n 个顶点
    pub fn add_vertices(&mut self, n: usize) {
        self.num_vertices += n;
    }

    /// 获取顶点数量
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// 校验顶点编号在 `0..N` 范围内
    pub fn check_vertex(&self, vertex: VertexId) -> Result<()> {
        if vertex >= self.num_vertices {
            return Err(Error::OutOfRange {
                vertex,
                num_vertices: self.num_vertices,
            });
        }
        Ok(())
    }

    // ==================== 边操作 ====================

    /// 添加边
    ///
    /// 端点必须已存在；重复添加同一条边不产生效果。
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;
        self.edges.insert((src, dst));
        Ok(())
    }

    /// 删除边（无向图按任一端点顺序均可命中）
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> bool {
        if self.edges.shift_remove(&(src, dst)) {
            return true;
        }
        if !self.directed {
            return self.edges.shift_remove(&(dst, src));
        }
        false
    }

    /// 判断边是否存在（无向图按任一端点顺序均可命中）
    pub fn has_edge(&self, src: VertexId, dst: VertexId) -> bool {
        if self.edges.contains(&(src, dst)) {
            return true;
        }
        !self.directed && self.edges.contains(&(dst, src))
    }

    /// 按插入顺序遍历所有边
    pub fn edges(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.edges.iter().copied()
    }

    /// 获取边数量
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    // ==================== 方向 ====================

    /// 是否有向图
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// 设置图的方向性
    ///
    /// 仅改变边的解释方式，不改变存储的边集合。
    pub fn set_directed(&mut self, directed: bool) {
        self.directed = directed;
    }

    // ==================== 邻居查询 ====================

    /// 获取顶点的出边邻居（无向图为所有相邻顶点）
    pub fn neighbors(&self, vertex: VertexId) -> Vec<VertexId> {
        let mut result = Vec::new();
        for &(u, v) in &self.edges {
            if u == vertex {
                result.push(v);
            } else if !self.directed && v == vertex {
                result.push(u);
            }
        }
        result
    }
}
