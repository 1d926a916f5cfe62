//! 最短路径
//!
//! 广义 Dijkstra 算法：提供可采纳的启发函数时即为 A* 搜索。
//! 暂定距离与前驱保存在可替换的 [`PathStore`] 中，
//! 边权与启发函数由 [`EdgeWeights`] 提供。

use crate::error::{Error, Result};
use crate::graph::{Graph, VertexId};
use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;
use tracing::{debug, trace};

/// 边权与启发函数
pub trait EdgeWeights {
    /// 边 (u, v) 的权重；(u, v) 不是边时返回正无穷
    fn edge_weight(&self, u: VertexId, v: VertexId) -> f64;

    /// 从 v 到目标顶点的估计距离，不得高于真实距离；默认 0（退化为 Dijkstra）
    fn estimated_distance(&self, _v: VertexId) -> f64 {
        0.0
    }
}

/// 每条边权重为 1
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitWeights;

impl EdgeWeights for UnitWeights {
    fn edge_weight(&self, _u: VertexId, _v: VertexId) -> f64 {
        1.0
    }
}

/// 以闭包给出边权
pub struct WeightFn<F>(pub F);

impl<F> EdgeWeights for WeightFn<F>
where
    F: Fn(VertexId, VertexId) -> f64,
{
    fn edge_weight(&self, u: VertexId, v: VertexId) -> f64 {
        (self.0)(u, v)
    }
}

/// 为已有边权附加启发函数
pub struct WithHeuristic<W, H> {
    weights: W,
    heuristic: H,
}

impl<W, H> WithHeuristic<W, H>
where
    W: EdgeWeights,
    H: Fn(VertexId) -> f64,
{
    pub fn new(weights: W, heuristic: H) -> Self {
        Self { weights, heuristic }
    }
}

impl<W, H> EdgeWeights for WithHeuristic<W, H>
where
    W: EdgeWeights,
    H: Fn(VertexId) -> f64,
{
    fn edge_weight(&self, u: VertexId, v: VertexId) -> f64 {
        self.weights.edge_weight(u, v)
    }

    fn estimated_distance(&self, v: VertexId) -> f64 {
        (self.heuristic)(v)
    }
}

/// 暂定距离与前驱的存储
pub trait PathStore {
    /// 每次 `set_paths` 开始时调用；capacity 为图中最大句柄
    fn reset(&mut self, capacity: usize);

    /// 暂定距离；未知顶点为正无穷
    fn weight(&self, v: VertexId) -> f64;

    fn set_weight(&mut self, v: VertexId, w: f64);

    /// 前驱；没有前驱时为 None
    fn predecessor(&self, v: VertexId) -> Option<VertexId>;

    fn set_predecessor(&mut self, v: VertexId, u: VertexId);
}

/// 稠密数组存储，下标为句柄 - 1
///
/// 要求顶点句柄恰为 `1..=vertex_size()`。
#[derive(Debug, Clone, Default)]
pub struct DenseStore {
    weights: Vec<f64>,
    predecessors: Vec<Option<VertexId>>,
}

impl PathStore for DenseStore {
    fn reset(&mut self, capacity: usize) {
        self.weights.clear();
        self.weights.resize(capacity, f64::INFINITY);
        self.predecessors.clear();
        self.predecessors.resize(capacity, None);
    }

    fn weight(&self, v: VertexId) -> f64 {
        v.index()
            .and_then(|i| self.weights.get(i))
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, v: VertexId, w: f64) {
        if let Some(slot) = v.index().and_then(|i| self.weights.get_mut(i)) {
            *slot = w;
        }
    }

    fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        v.index()
            .and_then(|i| self.predecessors.get(i))
            .copied()
            .flatten()
    }

    fn set_predecessor(&mut self, v: VertexId, u: VertexId) {
        if let Some(slot) = v.index().and_then(|i| self.predecessors.get_mut(i)) {
            *slot = Some(u);
        }
    }
}

/// 哈希表存储，适用于句柄不连续的图
#[derive(Debug, Clone, Default)]
pub struct SparseStore {
    weights: HashMap<VertexId, f64>,
    predecessors: HashMap<VertexId, VertexId>,
}

impl PathStore for SparseStore {
    fn reset(&mut self, _capacity: usize) {
        self.weights.clear();
        self.predecessors.clear();
    }

    fn weight(&self, v: VertexId) -> f64 {
        self.weights.get(&v).copied().unwrap_or(f64::INFINITY)
    }

    fn set_weight(&mut self, v: VertexId, w: f64) {
        self.weights.insert(v, w);
    }

    fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.predecessors.get(&v).copied()
    }

    fn set_predecessor(&mut self, v: VertexId, u: VertexId) {
        self.predecessors.insert(v, u);
    }
}

/// 优先队列键：(暂定距离 + 估计距离, 句柄)
#[derive(Debug, Clone, Copy)]
struct SearchKey {
    estimate: f64,
    vertex: VertexId,
}

impl PartialEq for SearchKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SearchKey {}

impl PartialOrd for SearchKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimate
            .total_cmp(&other.estimate)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// 单源最短路径
pub struct ShortestPaths<'g, G, W, S = SparseStore> {
    /// 被搜索的图
    graph: &'g G,
    /// 起点
    source: VertexId,
    /// 目标顶点（可选）
    destination: Option<VertexId>,
    /// 边权与启发函数
    weights: W,
    /// 距离与前驱存储
    store: S,
    /// 是否已调用 set_paths
    solved: bool,
}

/// 使用稠密数组存储的最短路径
pub type SimpleShortestPaths<'g, G, W> = ShortestPaths<'g, G, W, DenseStore>;

impl<'g, G: Graph, W: EdgeWeights> ShortestPaths<'g, G, W, SparseStore> {
    /// graph 中从 source 出发的最短路径
    pub fn new(graph: &'g G, source: VertexId, weights: W) -> Self {
        Self::with_store(graph, source, weights, SparseStore::default())
    }
}

impl<'g, G: Graph, W: EdgeWeights> ShortestPaths<'g, G, W, DenseStore> {
    /// 使用稠密存储；句柄不连续时返回错误
    pub fn dense(graph: &'g G, source: VertexId, weights: W) -> Result<Self> {
        let count = graph.vertex_size();
        let max = graph.max_vertex().map_or(0, |v| v.as_u64());
        if max != count as u64 {
            return Err(Error::NonCompactVertices { count, max });
        }
        Ok(Self::with_store(graph, source, weights, DenseStore::default()))
    }
}

impl<'g, G, W, S> ShortestPaths<'g, G, W, S>
where
    G: Graph,
    W: EdgeWeights,
    S: PathStore,
{
    /// 使用自定义存储
    pub fn with_store(graph: &'g G, source: VertexId, weights: W, store: S) -> Self {
        Self {
            graph,
            source,
            destination: None,
            weights,
            store,
            solved: false,
        }
    }

    /// 指定目标顶点；到达目标后提前结束搜索。句柄 0 表示不指定
    pub fn with_destination(mut self, destination: VertexId) -> Self {
        self.destination = (destination.as_u64() != 0).then_some(destination);
        self
    }

    /// 计算最短路径；必须在 weight / predecessor / path_to 之前调用
    pub fn set_paths(&mut self) {
        let graph = self.graph;
        let capacity = graph.max_vertex().map_or(0, |v| v.as_u64() as usize);
        self.store.reset(capacity);

        let mut open: PriorityQueue<VertexId, Reverse<SearchKey>> =
            PriorityQueue::with_capacity(graph.vertex_size());
        for v in graph.vertices() {
            let initial = if v == self.source { 0.0 } else { f64::INFINITY };
            self.store.set_weight(v, initial);
            open.push(v, Reverse(self.key(v)));
        }

        let mut settled = 0usize;
        while let Some((current, _)) = open.pop() {
            settled += 1;
            if Some(current) == self.destination {
                debug!(
                    source = %self.source,
                    destination = %current,
                    settled,
                    "到达目标顶点，提前结束"
                );
                break;
            }

            let base = self.store.weight(current);
            for succ in graph.successors(current) {
                let candidate = base + self.weights.edge_weight(current, succ);
                if candidate < self.store.weight(succ) {
                    self.store.set_weight(succ, candidate);
                    self.store.set_predecessor(succ, current);
                    open.push(succ, Reverse(self.key(succ)));
                    trace!(vertex = %succ, via = %current, weight = candidate, "relax");
                }
            }
        }

        debug!(source = %self.source, settled, "最短路径计算完成");
        self.solved = true;
    }

    fn key(&self, v: VertexId) -> SearchKey {
        SearchKey {
            estimate: self.store.weight(v) + self.weights.estimated_distance(v),
            vertex: v,
        }
    }

    /// 起点
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// 目标顶点
    pub fn destination(&self) -> Option<VertexId> {
        self.destination
    }

    /// v 的当前距离；不可达或不在图中时为正无穷
    pub fn weight(&self, v: VertexId) -> f64 {
        self.store.weight(v)
    }

    /// v 的前驱
    pub fn predecessor(&self, v: VertexId) -> Option<VertexId> {
        self.store.predecessor(v)
    }

    /// 边权与启发函数
    pub fn weights(&self) -> &W {
        &self.weights
    }

    /// 从起点到 v 的最短路径（含两端）
    pub fn path_to(&self, v: VertexId) -> Result<Vec<VertexId>> {
        if !self.solved {
            return Err(Error::PathsNotComputed);
        }
        if !self.store.weight(v).is_finite() {
            return Err(Error::NoPath(v.as_u64()));
        }

        let limit = self.graph.vertex_size();
        let mut path = vec![v];
        let mut current = v;
        while current != self.source {
            match self.store.predecessor(current) {
                Some(prev) if path.len() <= limit => {
                    path.push(prev);
                    current = prev;
                }
                _ => return Err(Error::NoPath(v.as_u64())),
            }
        }

        path.reverse();
        Ok(path)
    }

    /// 从起点到目标顶点的最短路径
    pub fn path_to_destination(&self) -> Result<Vec<VertexId>> {
        let destination = self.destination.ok_or(Error::NoDestination)?;
        self.path_to(destination)
    }
}
