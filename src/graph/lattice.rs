//! 网格图构造
//!
//! 生成 X×Y 的格点图，主要用于测试和演示。

use super::Graph;

/// 构造 columns × rows 的无向网格图
///
/// 顶点编号按行优先：编号 v 位于第 `v / columns` 行、第 `v % columns` 列。
/// 每个顶点与右侧、下方的相邻顶点相连，边的存储方向为编号小指向编号大。
pub fn lattice(columns: usize, rows: usize) -> Graph {
    let mut graph = Graph::with_vertices(columns * rows, false);

    for row in 0..rows {
        for col in 0..columns {
            let v = row * columns + col;
            if col + 1 < columns {
                graph.add_edge(v, v + 1).expect("网格顶点编号始终合法");
            }
            if row + 1 < rows {
                graph.add_edge(v, v + columns).expect("网格顶点编号始终合法");
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lattice_counts() {
        // 10×10 网格：100 个顶点，横向 9×10 + 纵向 10×9 = 180 条边
        let graph = lattice(10, 10);
        assert_eq!(graph.num_vertices(), 100);
        assert_eq!(graph.num_edges(), 180);
        assert!(!graph.is_directed());
    }

    #[test]
    fn test_lattice_adjacency() {
        let graph = lattice(4, 3);
        // 顶点 5 位于第 1 行第 1 列，四个方向都有邻居
        assert!(graph.has_edge(5, 6));
        assert!(graph.has_edge(4, 5));
        assert!(graph.has_edge(1, 5));
        assert!(graph.has_edge(5, 9));
        // 角顶点只有两个邻居
        assert_eq!(graph.neighbors(0).len(), 2);
    }

    #[test]
    fn test_lattice_single_row() {
        let graph = lattice(5, 1);
        assert_eq!(graph.num_vertices(), 5);
        assert_eq!(graph.num_edges(), 4);
    }
}
