//! Dijkstra 最短路径算法
//!
//! 单源非负权最短路径引擎。除每个顶点的最短距离外，
//! 还按访问顺序记录松弛成功的边，供路径回溯使用：
//! 逆序扫描该记录时，每个顶点遇到的第一条入边即其在
//! 最短路径树中的最终父边。

use crate::error::{Error, Result};
use crate::types::{EdgeKey, EdgeWeights, VertexId};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// 单源最短路径搜索结果
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    /// 顶点 -> 最短距离（不可达的顶点无对应项）
    pub dist: HashMap<VertexId, f64>,
    /// 按访问顺序记录的松弛边
    pub trace: Vec<EdgeKey>,
}

impl ShortestPathTree {
    /// 顶点的最短距离，不可达返回 None
    pub fn distance(&self, vertex: VertexId) -> Option<f64> {
        self.dist.get(&vertex).copied()
    }
}

/// 顶点距离，用于优先队列
#[derive(Debug, Clone, PartialEq)]
struct NodeDistance {
    vertex: VertexId,
    distance: f64,
}

impl Eq for NodeDistance {}

impl Ord for NodeDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        // 反转距离比较构成小根堆；距离相同时按编号保证确定性
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for NodeDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Dijkstra 引擎
#[derive(Debug)]
pub struct Dijkstra {
    /// 邻接表（按输入边顺序构建，保证搜索顺序确定）
    adj: HashMap<VertexId, Vec<(VertexId, f64)>>,
}

impl Dijkstra {
    /// 创建引擎实例
    ///
    /// 校验所有边权非负，否则返回 `EngineFailure`
    /// （负权会破坏 Dijkstra 的贪心正确性）。
    pub fn new(edges: &[EdgeKey], weight: &EdgeWeights) -> Result<Self> {
        let mut adj: HashMap<VertexId, Vec<(VertexId, f64)>> = HashMap::new();

        for &(src, dst) in edges {
            let w = weight.get(&(src, dst)).copied().unwrap_or(0.0);
            if w < 0.0 || w.is_nan() {
                return Err(Error::EngineFailure(format!(
                    "边 ({}, {}) 的权重非法: {}",
                    src, dst, w
                )));
            }
            adj.entry(src).or_default().push((dst, w));
        }

        Ok(Self { adj })
    }

    /// 从 source 出发计算到所有可达顶点的最短距离
    pub fn search(&self, source: VertexId) -> ShortestPathTree {
        let mut dist: HashMap<VertexId, f64> = HashMap::new();
        let mut settled: HashSet<VertexId> = HashSet::new();
        let mut trace: Vec<EdgeKey> = Vec::new();
        let mut to_visit: BinaryHeap<NodeDistance> = BinaryHeap::new();

        dist.insert(source, 0.0);
        to_visit.push(NodeDistance {
            vertex: source,
            distance: 0.0,
        });

        while let Some(NodeDistance { vertex, distance }) = to_visit.pop() {
            if settled.contains(&vertex) {
                continue;
            }
            settled.insert(vertex);

            if let Some(neighbors) = self.adj.get(&vertex) {
                for &(neighbor, w) in neighbors {
                    if settled.contains(&neighbor) {
                        continue;
                    }

                    let new_distance = distance + w;
                    let improved = dist
                        .get(&neighbor)
                        .map_or(true, |&current| new_distance < current);

                    if improved {
                        dist.insert(neighbor, new_distance);
                        trace.push((vertex, neighbor));
                        to_visit.push(NodeDistance {
                            vertex: neighbor,
                            distance: new_distance,
                        });
                    }
                }
            }
        }

        ShortestPathTree { dist, trace }
    }
}
