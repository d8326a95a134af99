//! 路径回溯与流分解
//!
//! 两个纯函数式的小部件：
//! - [`PathTracer`] 从最短路径搜索的松弛边记录中回溯出一条简单路径；
//! - [`FlowPathDecomposer`] 把携带正流量的边集分解为一组互不相交的简单路径。

use crate::types::{EdgeKey, EdgeWeights, VertexId};
use std::collections::HashMap;

/// 路径回溯器
pub struct PathTracer;

impl PathTracer {
    /// 从松弛边记录中回溯 source 到 target 的路径
    ///
    /// `trace` 是最短路径搜索按访问顺序记录的松弛边。逆序扫描：
    /// 从 target 出发，找到头部等于当前顶点的边就接上并把当前顶点
    /// 移到边的尾部，直到回到 source 或扫描完毕。
    ///
    /// 返回的边按 source -> target 方向排列。source 与 target 不连通时
    /// 返回空或不完整的路径（用 [`PathTracer::is_complete`] 判断），
    /// 这是一种正常的查询结果而非错误。
    pub fn trace(trace: &[EdgeKey], source: VertexId, target: VertexId) -> Vec<EdgeKey> {
        let mut path = Vec::new();
        let mut last = target;

        for &(u, v) in trace.iter().rev() {
            if last == source {
                break;
            }
            if v == last {
                path.push((u, v));
                last = u;
            }
        }

        path.reverse();
        path
    }

    /// 判断回溯结果是否是一条完整的 source -> target 路径
    pub fn is_complete(path: &[EdgeKey], source: VertexId, target: VertexId) -> bool {
        match (path.first(), path.last()) {
            (Some(&(first, _)), Some(&(_, last))) => first == source && last == target,
            _ => false,
        }
    }
}

/// 把边序列展开为顶点序列
pub fn path_vertices(path: &[EdgeKey]) -> Vec<VertexId> {
    let mut vertices = Vec::with_capacity(path.len() + 1);
    if let Some(&(first, _)) = path.first() {
        vertices.push(first);
    }
    for &(_, v) in path {
        vertices.push(v);
    }
    vertices
}

/// 流分解器
pub struct FlowPathDecomposer;

impl FlowPathDecomposer {
    /// 把正流量边集分解为从 source 到 target 的简单路径集合
    ///
    /// 反复从 source 出发行走：在每个顶点消耗一条尚有剩余流量单位的
    /// 出边，走到 target 即提取一条路径。流量守恒保证每次行走都能到达
    /// target；每条路径至少消耗一个单位，因此在 O(路径数 × 路径长度)
    /// 内结束。单位容量在上游已经保证了提取出的路径两两边不相交。
    pub fn decompose(
        flow: &EdgeWeights,
        source: VertexId,
        target: VertexId,
    ) -> Vec<Vec<EdgeKey>> {
        // 出边邻接表，携带剩余流量单位；按目标顶点编号排序保证输出确定
        let mut remaining: HashMap<VertexId, Vec<(VertexId, u64)>> = HashMap::new();
        for (&(u, v), &f) in flow {
            if f > 0.0 {
                remaining.entry(u).or_default().push((v, f.round() as u64));
            }
        }
        for outgoing in remaining.values_mut() {
            outgoing.sort_unstable();
        }

        let mut paths = Vec::new();

        loop {
            let mut path = Vec::new();
            let mut current = source;

            while current != target {
                let next = remaining.get_mut(&current).and_then(|outgoing| {
                    outgoing.iter_mut().find(|(_, units)| *units > 0)
                });

                match next {
                    Some((v, units)) => {
                        *units -= 1;
                        path.push((current, *v));
                        current = *v;
                    }
                    None => break,
                }
            }

            if current == target && !path.is_empty() {
                paths.push(path);
            } else {
                // source 已无可用出边，分解结束
                break;
            }
        }

        paths
    }
}
