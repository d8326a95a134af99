//! 基础类型定义
//!
//! 顶点、边和属性映射使用的通用类型

use std::collections::HashMap;

/// 顶点 ID（稳定整数编号，取值范围 `0..N`，可直接用作数组下标）
pub type VertexId = usize;

/// 边的标识：有向边 `(源顶点, 目标顶点)`
///
/// 边由端点对唯一确定，不支持平行边。
pub type EdgeKey = (VertexId, VertexId);

/// 边属性映射（权重或容量），缺失的边按 0.0 处理
pub type EdgeWeights = HashMap<EdgeKey, f64>;

/// "伪无穷大" 容量
///
/// 用于顶点拆分中源点拆分边等不应构成瓶颈的边。取值要求：
/// 1. 远大于任何实际问题中可能出现的不相交路径数（路径数受顶点数约束）；
/// 2. 多条这样的容量在最大流引擎内部求和后仍远小于 f64 整数精确表示
///    上限（2^53），避免浮点误差导致增广判断失效。
///
/// 1e8 对两个条件都留有多个数量级的余量。
pub const PSEUDO_INF: f64 = 1e8;
