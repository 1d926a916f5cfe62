//! 图算法模块
//!
//! 包含通用遍历和最短路径（Dijkstra / A*）算法

mod shortest_paths;
mod traversal;

pub use shortest_paths::{
    DenseStore, EdgeWeights, PathStore, ShortestPaths, SimpleShortestPaths, SparseStore,
    UnitWeights, WeightFn, WithHeuristic,
};
pub use traversal::{
    BestFirst, BreadthFirst, DepthFirst, Fringe, OnVisit, Traversal, TraversalStatus, Visitor,
};
