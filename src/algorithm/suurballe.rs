//! Suurballe 算法
//!
//! 两遍最短路径求总长度最小的一对边不相交路径：
//! 第一遍 Dijkstra 得到最短路径 P1 和各顶点距离；
//! 用距离做消减代价变换（所有边权变为非负），在排除 P1、
//! 加入 P1 反向零权边的残余图上再跑一遍 Dijkstra 得到 P2；
//! P2 沿反向边"撤销" P1 的部分路段，两者合并抵消后
//! 恰好是全局最优的不相交路径对。不使用最大流。

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::path_tracing::{FlowPathDecomposer, PathTracer};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{EdgeKey, EdgeWeights, VertexId};
use std::collections::HashSet;
use tracing::debug;

/// Suurballe 不相交路径对求解器
pub struct Suurballe<'a> {
    graph: &'a Graph,
}

impl<'a> Suurballe<'a> {
    /// 创建求解器实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 求总权重最小的一对边不相交路径
    ///
    /// 失败情形显式区分：source 到 target 无路径返回 [`Error::Disconnected`]；
    /// 只存在一条不相交路径返回 [`Error::InsufficientDisjointPaths`]，
    /// 绝不悄悄退化为单条路径。
    pub fn suurballe_disjoint_paths(
        &self,
        source: VertexId,
        target: VertexId,
        weight: &EdgeWeights,
    ) -> Result<(Vec<EdgeKey>, Vec<EdgeKey>)> {
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(target)?;
        if source == target {
            return Err(Error::SameEndpoint(source));
        }

        // 1. 无向图物化两个方向，双向继承同一权重；此后按有向图处理
        let (edges, w) = self.materialize_directions(weight);

        // 2. 第一遍 Dijkstra，回溯得到 P1
        let engine = Dijkstra::new(&edges, &w)?;
        let tree = engine.search(source);
        let p1 = PathTracer::trace(&tree.trace, source, target);
        if !PathTracer::is_complete(&p1, source, target) {
            return Err(Error::Disconnected { src: source, target });
        }

        let p1_set: HashSet<EdgeKey> = p1.iter().copied().collect();
        let p1_rev: HashSet<EdgeKey> = p1.iter().map(|&(u, v)| (v, u)).collect();

        // 3. 消减代价变换 w'(u,v) = w + dist(u) - dist(v)，并构建残余图：
        //    P1 上的边被排除；P1 的反向边权重置 0（允许第二遍搜索
        //    撤销共用路段，这是保证全局最优的关键）
        let mut residual_edges = Vec::new();
        let mut reduced = EdgeWeights::new();

        for &(u, v) in &edges {
            if p1_set.contains(&(u, v)) {
                continue;
            }
            let transformed = if p1_rev.contains(&(u, v)) {
                0.0
            } else {
                let (Some(du), Some(dv)) = (tree.distance(u), tree.distance(v)) else {
                    // 不可达顶点的边不可能出现在从 source 出发的路径上
                    continue;
                };
                // 理论值非负，浮点舍入的微小负值夹回 0
                (w[&(u, v)] + du - dv).max(0.0)
            };
            residual_edges.push((u, v));
            reduced.insert((u, v), transformed);
        }

        // 有向图中 P1 的反向边可能并不存在，补入零权反向边
        for &(u, v) in &p1 {
            if !reduced.contains_key(&(v, u)) {
                residual_edges.push((v, u));
                reduced.insert((v, u), 0.0);
            }
        }

        // 4. 残余图上的第二遍 Dijkstra，回溯得到 P2
        let engine = Dijkstra::new(&residual_edges, &reduced)?;
        let residual_tree = engine.search(source);
        let p2 = PathTracer::trace(&residual_tree.trace, source, target);
        if !PathTracer::is_complete(&p2, source, target) {
            return Err(Error::InsufficientDisjointPaths { src: source, target });
        }

        // 5. 合并并抵消：互为反向的边对代表被撤销的共用路段，成对移除
        let union: HashSet<EdgeKey> = p1_set.iter().chain(p2.iter()).copied().collect();
        let final_flow: EdgeWeights = p1
            .iter()
            .chain(p2.iter())
            .filter(|&&(u, v)| !union.contains(&(v, u)))
            .map(|&edge| (edge, 1.0))
            .collect();

        // 6. 抵消后的边集恰好构成两条边不相交路径
        let mut paths = FlowPathDecomposer::decompose(&final_flow, source, target).into_iter();
        match (paths.next(), paths.next()) {
            (Some(first), Some(second)) => {
                debug!(source, target, "Suurballe 求解完成");
                Ok((first, second))
            }
            _ => Err(Error::EngineFailure(
                "合并后的边集未能分解出两条路径".to_string(),
            )),
        }
    }

    /// 物化边的方向：无向图为每条边生成两个方向，继承对称权重
    fn materialize_directions(&self, weight: &EdgeWeights) -> (Vec<EdgeKey>, EdgeWeights) {
        let mut edges = Vec::with_capacity(2 * self.graph.num_edges());
        let mut w = EdgeWeights::new();

        for (u, v) in self.graph.edges() {
            let value = symmetric_weight(weight, u, v);
            edges.push((u, v));
            w.insert((u, v), value);
            if !self.graph.is_directed() {
                edges.push((v, u));
                w.insert((v, u), value);
            }
        }

        (edges, w)
    }
}

/// 按任一端点顺序读取边权重（无向图的权重只按存储方向记录一次）
fn symmetric_weight(weight: &EdgeWeights, u: VertexId, v: VertexId) -> f64 {
    weight
        .get(&(u, v))
        .or_else(|| weight.get(&(v, u)))
        .copied()
        .unwrap_or(0.0)
}

/// 求总权重最小的一对边不相交路径（入口函数）
pub fn suurballe_disjoint_paths(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
    weight: &EdgeWeights,
) -> Result<(Vec<EdgeKey>, Vec<EdgeKey>)> {
    Suurballe::new(graph).suurballe_disjoint_paths(source, target, weight)
}
