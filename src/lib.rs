//! TripGraph - 通用图库与行程规划
//!
//! 提供：
//! - 有向/无向图以及带标签的图装饰器
//! - 可定制边界集合的通用遍历（BFS / DFS / 最佳优先）
//! - Dijkstra 与 A* 单源最短路径
//! - 基于道路地图的多点行程规划

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod graph;
pub mod import;
pub mod trip;
pub mod types;

// 重导出常用类型
pub use algorithm::{
    EdgeWeights, ShortestPaths, SimpleShortestPaths, Traversal, TraversalStatus, Visitor,
};
pub use error::{Error, Result};
pub use graph::{DirectedGraph, Edge, EdgeId, Graph, LabeledGraph, UndirectedGraph, VertexId};
pub use trip::{Itinerary, RoadMap, TripOptions, TripPlanner};
pub use types::{Direction, Location, Road};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
