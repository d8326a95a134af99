//! RouteGraph CLI 工具
//!
//! 在网格图上演示三种不相交路径求解器

use anyhow::bail;
use clap::Parser;
use routegraph::algorithm::path_vertices;
use routegraph::{
    edge_disjoint_paths, lattice, suurballe_disjoint_paths, vertex_disjoint_paths, EdgeWeights,
    VertexId,
};
use serde::Serialize;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "routegraph-cli")]
#[command(about = "RouteGraph 不相交路径演示工具")]
struct Args {
    /// 网格列数
    #[arg(long, default_value = "10")]
    columns: usize,

    /// 网格行数
    #[arg(long, default_value = "10")]
    rows: usize,

    /// 源顶点
    #[arg(short, long, default_value = "23")]
    source: VertexId,

    /// 目标顶点
    #[arg(short, long, default_value = "67")]
    target: VertexId,

    /// 求解器: vertex | edge | suurballe
    #[arg(long, default_value = "vertex")]
    solver: String,

    /// 把网格按有向图处理（边指向右、下方向）
    #[arg(long)]
    directed: bool,

    /// 以 JSON 输出结果
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct Report {
    solver: String,
    source: VertexId,
    target: VertexId,
    count: usize,
    elapsed_ms: u128,
    paths: Vec<Vec<VertexId>>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut graph = lattice(args.columns, args.rows);
    if args.directed {
        graph.set_directed(true);
    }

    if !args.json {
        println!("RouteGraph - 不相交路径演示");
        println!("============================");
        println!(
            "网格: {}×{} (顶点数 {}, 边数 {}, {})",
            args.columns,
            args.rows,
            graph.num_vertices(),
            graph.num_edges(),
            if args.directed { "有向" } else { "无向" }
        );
    }

    let start = Instant::now();
    let paths: Vec<Vec<VertexId>> = match args.solver.as_str() {
        "vertex" => vertex_disjoint_paths(&graph, args.source, args.target)?,
        "edge" => edge_disjoint_paths(&graph, args.source, args.target, None)?
            .iter()
            .map(|p| path_vertices(p))
            .collect(),
        "suurballe" => {
            // 演示用途：每条边权重取 1
            let weight: EdgeWeights = graph.edges().map(|e| (e, 1.0)).collect();
            let (p1, p2) = suurballe_disjoint_paths(&graph, args.source, args.target, &weight)?;
            vec![path_vertices(&p1), path_vertices(&p2)]
        }
        other => bail!("未知的求解器: {}（可选: vertex, edge, suurballe）", other),
    };
    let elapsed = start.elapsed();

    if args.json {
        let report = Report {
            solver: args.solver,
            source: args.source,
            target: args.target,
            count: paths.len(),
            elapsed_ms: elapsed.as_millis(),
            paths,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "找到 {} 条不相交路径 (耗时 {} ms):",
            paths.len(),
            elapsed.as_millis()
        );
        for (i, path) in paths.iter().enumerate() {
            let rendered: Vec<String> = path.iter().map(|v| v.to_string()).collect();
            println!("  {}: {}", i + 1, rendered.join(" -> "));
        }
    }

    Ok(())
}
