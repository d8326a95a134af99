//! 最大流算法
//!
//! 实现 Edmonds-Karp 算法（基于 BFS 的 Ford-Fulkerson）。
//! 作为不相交路径归约的底层引擎：在单位容量网络上，
//! 最大流值等于不相交路径的条数。

use crate::error::{Error, Result};
use crate::types::{EdgeKey, EdgeWeights, VertexId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::debug;

/// 最大流结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaxFlow {
    /// 最大流量值
    pub value: f64,
    /// 流量分配（边 -> 流量），只保留正流量
    pub flow: EdgeWeights,
    /// 残余容量（边 -> 容量 - 正流量），对所有输入边给出
    pub residual: EdgeWeights,
}

/// Edmonds-Karp 最大流引擎
///
/// 在给定的有向边集与容量映射上求解。相同输入必然给出相同结果：
/// 邻接表按输入边的顺序构建，BFS 的访问顺序因此是确定的。
#[derive(Debug)]
pub struct EdmondsKarp<'a> {
    /// 容量映射
    capacity: &'a EdgeWeights,
    /// 邻接表（含反向边，供残余网络使用）
    adj: HashMap<VertexId, Vec<VertexId>>,
}

impl<'a> EdmondsKarp<'a> {
    /// 创建引擎实例
    ///
    /// 校验所有边都有非负容量，否则返回 `EngineFailure`。
    pub fn new(edges: &[EdgeKey], capacity: &'a EdgeWeights) -> Result<Self> {
        let mut adj: HashMap<VertexId, Vec<VertexId>> = HashMap::new();

        for &(src, dst) in edges {
            let cap = capacity.get(&(src, dst)).copied().unwrap_or(0.0);
            if cap < 0.0 || cap.is_nan() {
                return Err(Error::EngineFailure(format!(
                    "边 ({}, {}) 的容量非法: {}",
                    src, dst, cap
                )));
            }
            adj.entry(src).or_default().push(dst);
            adj.entry(dst).or_default().push(src); // 反向边
        }

        Ok(Self { capacity, adj })
    }

    /// 计算从 source 到 sink 的最大流
    pub fn max_flow(&self, source: VertexId, sink: VertexId) -> MaxFlow {
        // 净流量矩阵（正向增广为正，反向退流为负）
        let mut flow: EdgeWeights = HashMap::new();

        let mut max_flow_value = 0.0;

        // Edmonds-Karp: 重复 BFS 找增广路径
        loop {
            let path = self.bfs_find_path(source, sink, &flow);

            match path {
                None => break,
                Some((path_vertices, bottleneck)) => {
                    // 沿路径增广
                    for i in 0..path_vertices.len() - 1 {
                        let u = path_vertices[i];
                        let v = path_vertices[i + 1];

                        *flow.entry((u, v)).or_insert(0.0) += bottleneck;
                        *flow.entry((v, u)).or_insert(0.0) -= bottleneck;
                    }

                    max_flow_value += bottleneck;
                }
            }
        }

        debug!(value = max_flow_value, "最大流求解完成");

        // 只保留正流量
        let positive_flow: EdgeWeights = flow.into_iter().filter(|(_, v)| *v > 0.0).collect();

        // 残余容量 = 容量 - 正流量
        let residual: EdgeWeights = self
            .capacity
            .iter()
            .map(|(&edge, &cap)| {
                let used = positive_flow.get(&edge).copied().unwrap_or(0.0);
                (edge, cap - used)
            })
            .collect();

        MaxFlow {
            value: max_flow_value,
            flow: positive_flow,
            residual,
        }
    }

    /// BFS 找增广路径
    fn bfs_find_path(
        &self,
        source: VertexId,
        sink: VertexId,
        flow: &EdgeWeights,
    ) -> Option<(Vec<VertexId>, f64)> {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        let mut parent: HashMap<VertexId, VertexId> = HashMap::new();

        visited.insert(source);
        queue.push_back(source);

        while let Some(u) = queue.pop_front() {
            if u == sink {
                break;
            }

            if let Some(neighbors) = self.adj.get(&u) {
                for &v in neighbors {
                    if !visited.contains(&v) && self.residual_of(u, v, flow) > 0.0 {
                        visited.insert(v);
                        parent.insert(v, u);
                        queue.push_back(v);
                    }
                }
            }
        }

        // 重构路径并计算瓶颈
        if !parent.contains_key(&sink) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = sink;
        while current != source {
            path.push(current);
            current = *parent.get(&current)?;
        }
        path.push(source);
        path.reverse();

        let mut bottleneck = f64::INFINITY;
        for i in 0..path.len() - 1 {
            bottleneck = bottleneck.min(self.residual_of(path[i], path[i + 1], flow));
        }

        Some((path, bottleneck))
    }

    /// 残余容量 = 容量 - 已用流量
    fn residual_of(&self, u: VertexId, v: VertexId, flow: &EdgeWeights) -> f64 {
        let cap = self.capacity.get(&(u, v)).copied().unwrap_or(0.0);
        let used = flow.get(&(u, v)).copied().unwrap_or(0.0);
        cap - used
    }
}
