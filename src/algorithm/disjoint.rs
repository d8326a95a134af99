//! 不相交路径求解
//!
//! 把"找 k 条顶点/边不相交路径"归约为单位容量最大流：
//! 每个顶点拆分为入、出两个副本，容量放在拆分边或原始边上，
//! 分别限制顶点使用次数或边使用次数。最大流值即不相交路径条数。
//!
//! 求解过程完全在内部的增广覆盖层上进行，调用者的图不会被修改。

use crate::algorithm::max_flow::EdmondsKarp;
use crate::algorithm::path_tracing::{path_vertices, FlowPathDecomposer};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{EdgeKey, EdgeWeights, VertexId, PSEUDO_INF};
use tracing::debug;

/// 容量的放置方式，决定限制的是顶点还是边
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CapacityPlacement {
    /// 拆分边容量 1：每个顶点最多被一条路径使用
    VertexLimited,
    /// 原始边容量 1：每条边最多被一条路径使用
    EdgeLimited,
}

/// 基于最大流的不相交路径求解器
pub struct DisjointPathSolver<'a> {
    graph: &'a Graph,
}

impl<'a> DisjointPathSolver<'a> {
    /// 创建求解器实例
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// 求顶点不相交路径，返回每条路径的顶点序列
    ///
    /// 除 source 与 target 外，任何顶点至多出现在一条路径中。
    /// source 与 target 不连通时返回空集合。
    pub fn vertex_disjoint_paths(
        &self,
        source: VertexId,
        target: VertexId,
    ) -> Result<Vec<Vec<VertexId>>> {
        self.check_endpoints(source, target)?;

        let n = self.graph.num_vertices();
        let (edges, capacity) = self.split_overlay(source, CapacityPlacement::VertexLimited);

        let engine = EdmondsKarp::new(&edges, &capacity)?;
        let result = engine.max_flow(source, target);

        let raw_paths = FlowPathDecomposer::decompose(&result.flow, source, target);
        debug!(
            source,
            target,
            count = raw_paths.len(),
            "顶点不相交路径求解完成"
        );

        // 把 (i, N+i) 拆分对折叠回原始顶点 i
        Ok(raw_paths
            .iter()
            .map(|path| {
                path_vertices(path)
                    .into_iter()
                    .filter(|&v| v < n)
                    .collect()
            })
            .collect())
    }

    /// 求边不相交路径，返回每条路径按行进方向排列的原始边序列
    ///
    /// 任何边至多出现在一条路径中；顶点允许被多条路径共用。
    /// source 与 target 不连通时返回空集合。
    ///
    /// `weight` 参数仅为与 Suurballe 求解器保持签名对称而接受：
    /// 单位容量最大流不使用边权，传入任何权重都不会改变结果。
    pub fn edge_disjoint_paths(
        &self,
        source: VertexId,
        target: VertexId,
        weight: Option<&EdgeWeights>,
    ) -> Result<Vec<Vec<EdgeKey>>> {
        // 单位容量归约不消费权重
        let _ = weight;

        self.check_endpoints(source, target)?;

        let n = self.graph.num_vertices();
        let (edges, capacity) = self.split_overlay(source, CapacityPlacement::EdgeLimited);

        let engine = EdmondsKarp::new(&edges, &capacity)?;
        let result = engine.max_flow(source, target);

        let raw_paths = FlowPathDecomposer::decompose(&result.flow, source, target);
        debug!(
            source,
            target,
            count = raw_paths.len(),
            "边不相交路径求解完成"
        );

        // 过滤拆分边，并把 (N+u, v) 映射回原始边 (u, v)
        Ok(raw_paths
            .iter()
            .map(|path| {
                path.iter()
                    .filter(|&&(u, v)| v != u + n)
                    .map(|&(u, v)| (u - n, v))
                    .collect()
            })
            .collect())
    }

    /// 构建拆分顶点的增广覆盖层
    ///
    /// 顶点 i 的出副本是 N+i。拆分边 i -> N+i 承载顶点容量，
    /// 原始边 (u, v) 变为 N+u -> v；无向图同时生成 N+v -> u。
    /// 源点的拆分边始终取伪无穷容量，允许源点发出多条路径。
    fn split_overlay(
        &self,
        source: VertexId,
        placement: CapacityPlacement,
    ) -> (Vec<EdgeKey>, EdgeWeights) {
        let n = self.graph.num_vertices();
        let (split_cap, edge_cap) = match placement {
            CapacityPlacement::VertexLimited => (1.0, PSEUDO_INF),
            CapacityPlacement::EdgeLimited => (PSEUDO_INF, 1.0),
        };

        let mut edges = Vec::with_capacity(n + 2 * self.graph.num_edges());
        let mut capacity = EdgeWeights::new();

        for i in 0..n {
            let cap = if i == source { PSEUDO_INF } else { split_cap };
            edges.push((i, n + i));
            capacity.insert((i, n + i), cap);
        }

        for (u, v) in self.graph.edges() {
            edges.push((n + u, v));
            capacity.insert((n + u, v), edge_cap);
            if !self.graph.is_directed() {
                edges.push((n + v, u));
                capacity.insert((n + v, u), edge_cap);
            }
        }

        (edges, capacity)
    }

    fn check_endpoints(&self, source: VertexId, target: VertexId) -> Result<()> {
        self.graph.check_vertex(source)?;
        self.graph.check_vertex(target)?;
        if source == target {
            return Err(Error::SameEndpoint(source));
        }
        Ok(())
    }
}

/// 求顶点不相交路径（入口函数）
pub fn vertex_disjoint_paths(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
) -> Result<Vec<Vec<VertexId>>> {
    DisjointPathSolver::new(graph).vertex_disjoint_paths(source, target)
}

/// 求边不相交路径（入口函数）
pub fn edge_disjoint_paths(
    graph: &Graph,
    source: VertexId,
    target: VertexId,
    weight: Option<&EdgeWeights>,
) -> Result<Vec<Vec<EdgeKey>>> {
    DisjointPathSolver::new(graph).edge_disjoint_paths(source, target, weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::lattice;
    use std::collections::HashSet;

    /// 断言路径集合除端点外没有共用顶点
    fn assert_interior_vertices_unique(paths: &[Vec<VertexId>], source: VertexId, target: VertexId) {
        let interior: Vec<VertexId> = paths
            .iter()
            .flatten()
            .copied()
            .filter(|&v| v != source && v != target)
            .collect();
        let unique: HashSet<VertexId> = interior.iter().copied().collect();
        assert_eq!(interior.len(), unique.len(), "存在被共用的中间顶点");
    }

    /// 断言路径集合没有共用边
    fn assert_edges_unique(paths: &[Vec<EdgeKey>]) {
        let mut seen = HashSet::new();
        for path in paths {
            for &edge in path {
                assert!(seen.insert(edge), "边 {:?} 被多条路径共用", edge);
            }
        }
    }

    /// 断言每条路径首尾相接且从 source 到 target
    fn assert_paths_wellformed(paths: &[Vec<EdgeKey>], source: VertexId, target: VertexId) {
        for path in paths {
            assert_eq!(path.first().unwrap().0, source);
            assert_eq!(path.last().unwrap().1, target);
            for pair in path.windows(2) {
                assert_eq!(pair[0].1, pair[1].0, "路径断裂: {:?}", path);
            }
        }
    }

    #[test]
    fn test_vertex_disjoint_diamond() {
        // 0 -> 1 -> 3 与 0 -> 2 -> 3
        let mut graph = Graph::with_vertices(4, true);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(0, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(2, 3).unwrap();

        let paths = vertex_disjoint_paths(&graph, 0, 3).unwrap();
        assert_eq!(paths.len(), 2);
        assert_interior_vertices_unique(&paths, 0, 3);
        for path in &paths {
            assert_eq!(path.first(), Some(&0));
            assert_eq!(path.last(), Some(&3));
        }
    }

    #[test]
    fn test_shared_vertex_limits_vertex_disjoint() {
        // 两条走法都必须经过顶点 3：顶点不相交只有 1 条，边不相交有 2 条
        //
        // 0 -> 1 -> 3 -> 4 -> 6
        // 0 -> 2 -> 3 -> 5 -> 6
        let mut graph = Graph::with_vertices(7, true);
        for (u, v) in [(0, 1), (0, 2), (1, 3), (2, 3), (3, 4), (3, 5), (4, 6), (5, 6)] {
            graph.add_edge(u, v).unwrap();
        }

        let vertex_paths = vertex_disjoint_paths(&graph, 0, 6).unwrap();
        assert_eq!(vertex_paths.len(), 1);

        let edge_paths = edge_disjoint_paths(&graph, 0, 6, None).unwrap();
        assert_eq!(edge_paths.len(), 2);
        assert_edges_unique(&edge_paths);
        assert_paths_wellformed(&edge_paths, 0, 6);
    }

    #[test]
    fn test_disconnected_returns_empty() {
        let mut graph = Graph::with_vertices(4, true);
        graph.add_edge(0, 1).unwrap();
        graph.add_edge(2, 3).unwrap();

        assert!(vertex_disjoint_paths(&graph, 0, 3).unwrap().is_empty());
        assert!(edge_disjoint_paths(&graph, 0, 3, None).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range_before_any_work() {
        let graph = Graph::with_vertices(3, true);

        let err = vertex_disjoint_paths(&graph, 0, 9).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { vertex: 9, .. }));

        let err = edge_disjoint_paths(&graph, 7, 0, None).unwrap_err();
        assert!(matches!(err, Error::OutOfRange { vertex: 7, .. }));
    }

    #[test]
    fn test_same_endpoint() {
        let graph = Graph::with_vertices(3, true);
        let err = vertex_disjoint_paths(&graph, 1, 1).unwrap_err();
        assert!(matches!(err, Error::SameEndpoint(1)));
    }

    #[test]
    fn test_graph_unchanged_after_solve_and_error() {
        let mut graph = lattice(5, 5);
        let nv = graph.num_vertices();
        let ne = graph.num_edges();

        vertex_disjoint_paths(&graph, 0, 24).unwrap();
        edge_disjoint_paths(&graph, 0, 24, None).unwrap();
        let _ = vertex_disjoint_paths(&graph, 0, 999);

        assert_eq!(graph.num_vertices(), nv);
        assert_eq!(graph.num_edges(), ne);
        assert!(!graph.is_directed());

        graph.set_directed(true);
        vertex_disjoint_paths(&graph, 0, 24).unwrap();
        assert!(graph.is_directed());
    }

    // 以下场景与数值取自 10×10 网格、source=23、target=67 的标准用例

    #[test]
    fn test_lattice_vertex_disjoint_undirected() {
        let graph = lattice(10, 10);
        let (s, t) = (23, 67);

        let paths = vertex_disjoint_paths(&graph, s, t).unwrap();
        assert_eq!(paths.len(), 4);
        assert_interior_vertices_unique(&paths, s, t);
    }

    #[test]
    fn test_lattice_vertex_disjoint_directed() {
        let mut graph = lattice(10, 10);
        graph.set_directed(true);
        let (s, t) = (23, 67);

        // 有向网格的边只指向右、下两个方向，源点出度为 2
        let paths = vertex_disjoint_paths(&graph, s, t).unwrap();
        assert_eq!(paths.len(), 2);
        assert_interior_vertices_unique(&paths, s, t);
    }

    #[test]
    fn test_lattice_edge_disjoint_undirected() {
        let graph = lattice(10, 10);
        let (s, t) = (23, 67);

        // 边不相交路径数受源点关联边数约束：无向网格中为 4
        let paths = edge_disjoint_paths(&graph, s, t, None).unwrap();
        assert_eq!(paths.len(), 4);
        assert_edges_unique(&paths);
        assert_paths_wellformed(&paths, s, t);
    }

    #[test]
    fn test_lattice_edge_disjoint_directed() {
        let mut graph = lattice(10, 10);
        graph.set_directed(true);
        let (s, t) = (23, 67);

        let paths = edge_disjoint_paths(&graph, s, t, None).unwrap();
        assert_eq!(paths.len(), 2);
        assert_edges_unique(&paths);
        assert_paths_wellformed(&paths, s, t);
    }

    #[test]
    fn test_edge_disjoint_weight_is_noop() {
        let graph = lattice(6, 6);

        let unweighted = edge_disjoint_paths(&graph, 0, 35, None).unwrap();

        let weight: EdgeWeights = graph
            .edges()
            .enumerate()
            .map(|(i, e)| (e, (i % 7) as f64 + 1.0))
            .collect();
        let weighted = edge_disjoint_paths(&graph, 0, 35, Some(&weight)).unwrap();

        assert_eq!(unweighted, weighted);
    }

    #[test]
    fn test_count_matches_max_flow_value() {
        let graph = lattice(8, 8);
        let (s, t) = (9, 54);

        let solver = DisjointPathSolver::new(&graph);
        let (edges, capacity) = solver.split_overlay(s, CapacityPlacement::VertexLimited);
        let flow = EdmondsKarp::new(&edges, &capacity).unwrap().max_flow(s, t);

        let paths = solver.vertex_disjoint_paths(s, t).unwrap();
        assert_eq!(paths.len(), flow.value.round() as usize);
    }
}
