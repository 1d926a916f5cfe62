//! 图索引
//!
//! 有向图与无向图共享的顶点/边簿记：存活顶点集合、邻接序列、
//! 按插入顺序记录的边日志，以及有向/无向两套边编码集合

use crate::graph::edge::{Edge, EdgeId};
use crate::graph::vertex::VertexId;
use smallvec::SmallVec;
use std::collections::{btree_set, BTreeSet, HashSet};

/// 单个顶点的后继序列（按边插入顺序）
pub(crate) type Adjacency = SmallVec<[VertexId; 4]>;

/// 后继迭代器
pub type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, VertexId>>;

/// 顶点迭代器（升序）
pub type Vertices<'a> = std::iter::Copied<btree_set::Iter<'a, VertexId>>;

/// 边迭代器（插入顺序）
pub type Edges<'a> = std::iter::Copied<std::slice::Iter<'a, Edge>>;

/// 图索引
#[derive(Debug, Clone, Default)]
pub struct GraphIndex {
    /// 存活顶点
    live: BTreeSet<VertexId>,
    /// 邻接序列，下标 i 对应句柄 i + 1
    adjacency: Vec<Adjacency>,
    /// 边日志
    edges: Vec<Edge>,
    /// 有向边编码
    directed_codes: HashSet<EdgeId>,
    /// 无向边编码（两个方向都记录）
    undirected_codes: HashSet<EdgeId>,
}

impl GraphIndex {
    // ==================== 顶点操作 ====================

    /// 分配顶点句柄：优先复用编号最小、邻接为空的已删除句柄
    pub(crate) fn add_vertex(&mut self) -> VertexId {
        let reusable = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(slot, adj)| (VertexId::from_index(slot), adj))
            .find(|(id, adj)| !self.live.contains(id) && adj.is_empty())
            .map(|(id, _)| id);

        let id = match reusable {
            Some(id) => id,
            None => {
                self.adjacency.push(Adjacency::new());
                VertexId::from_index(self.adjacency.len() - 1)
            }
        };
        self.live.insert(id);
        id
    }

    /// 删除顶点及其关联的所有边
    pub(crate) fn remove_vertex(&mut self, v: VertexId) {
        if !self.live.remove(&v) {
            return;
        }
        if let Some(adj) = self.slot_mut(v) {
            adj.clear();
        }
        for adj in &mut self.adjacency {
            adj.retain(|w| *w != v);
        }

        for edge in self.edges.iter().filter(|e| e.touches(v)) {
            let forward = EdgeId::of(edge.src(), edge.dst());
            let backward = EdgeId::of(edge.dst(), edge.src());
            for codes in [&mut self.directed_codes, &mut self.undirected_codes] {
                codes.remove(&forward);
                codes.remove(&backward);
            }
        }
        self.edges.retain(|e| !e.touches(v));
    }

    /// 顶点是否存活
    pub(crate) fn contains(&self, v: VertexId) -> bool {
        self.live.contains(&v)
    }

    /// 存活顶点数
    pub(crate) fn vertex_size(&self) -> usize {
        self.live.len()
    }

    /// 最大存活句柄
    pub(crate) fn max_vertex(&self) -> Option<VertexId> {
        self.live.last().copied()
    }

    /// 所有存活顶点（升序）
    pub(crate) fn vertices(&self) -> Vertices<'_> {
        self.live.iter().copied()
    }

    // ==================== 边操作 ====================

    /// 添加边，返回边编码；端点不存在或边已存在时仅返回编码
    pub(crate) fn add_edge(&mut self, u: VertexId, v: VertexId, directed: bool) -> EdgeId {
        let code = EdgeId::of(u, v);
        if !(self.contains(u) && self.contains(v)) || self.contains_edge(u, v, directed) {
            return code;
        }

        if directed {
            self.push_successor(u, v);
            self.directed_codes.insert(code);
        } else {
            self.push_successor(u, v);
            if u != v {
                self.push_successor(v, u);
            }
            self.undirected_codes.insert(code);
            self.undirected_codes.insert(EdgeId::of(v, u));
        }
        self.edges.push(Edge::new(u, v));
        code
    }

    /// 删除边 (u, v)；无向图同时删除 (v, u)
    pub(crate) fn remove_edge(&mut self, u: VertexId, v: VertexId, directed: bool) {
        if !self.contains_edge(u, v, directed) {
            return;
        }

        if directed {
            self.directed_codes.remove(&EdgeId::of(u, v));
            if let Some(pos) = self
                .edges
                .iter()
                .position(|e| e.src() == u && e.dst() == v)
            {
                self.edges.remove(pos);
            }
            if let Some(adj) = self.slot_mut(u) {
                adj.retain(|w| *w != v);
            }
        } else {
            self.undirected_codes.remove(&EdgeId::of(u, v));
            self.undirected_codes.remove(&EdgeId::of(v, u));
            self.edges.retain(|e| !e.joins(u, v));
            if let Some(adj) = self.slot_mut(u) {
                adj.retain(|w| *w != v);
            }
            if let Some(adj) = self.slot_mut(v) {
                adj.retain(|w| *w != u);
            }
        }
    }

    /// 边是否存在；无向图两个方向均可
    pub(crate) fn contains_edge(&self, u: VertexId, v: VertexId, directed: bool) -> bool {
        if !(self.contains(u) && self.contains(v)) {
            return false;
        }
        if directed {
            self.directed_codes.contains(&EdgeId::of(u, v))
        } else {
            self.undirected_codes.contains(&EdgeId::of(u, v))
                || self.undirected_codes.contains(&EdgeId::of(v, u))
        }
    }

    /// 边日志长度
    pub(crate) fn edge_size(&self) -> usize {
        self.edges.len()
    }

    /// 所有边（插入顺序）
    pub(crate) fn edges(&self) -> Edges<'_> {
        self.edges.iter().copied()
    }

    // ==================== 邻居查询 ====================

    /// 顶点的后继序列；不存在时为空
    pub(crate) fn adjacency(&self, v: VertexId) -> &[VertexId] {
        if !self.contains(v) {
            return &[];
        }
        self.slot(v).map(|adj| adj.as_slice()).unwrap_or(&[])
    }

    /// 后继迭代器
    pub(crate) fn successors(&self, v: VertexId) -> Successors<'_> {
        self.adjacency(v).iter().copied()
    }

    /// 出度
    pub(crate) fn out_degree(&self, v: VertexId) -> usize {
        self.adjacency(v).len()
    }

    /// 入度：扫描所有邻接序列，统计包含 v 的序列数
    pub(crate) fn scan_in_degree(&self, v: VertexId) -> usize {
        if !self.contains(v) {
            return 0;
        }
        self.adjacency.iter().filter(|adj| adj.contains(&v)).count()
    }

    /// 前驱迭代器：按句柄升序扫描所有邻接序列
    pub(crate) fn scan_predecessors(&self, v: VertexId) -> Predecessors<'_> {
        if !self.contains(v) {
            return Predecessors::adjacent(self.successors(v));
        }
        Predecessors {
            inner: PredecessorsInner::Scan {
                adjacency: &self.adjacency,
                target: v,
                slot: 0,
            },
        }
    }

    fn slot(&self, v: VertexId) -> Option<&Adjacency> {
        self.adjacency.get(v.index()?)
    }

    fn slot_mut(&mut self, v: VertexId) -> Option<&mut Adjacency> {
        let index = v.index()?;
        self.adjacency.get_mut(index)
    }

    fn push_successor(&mut self, u: VertexId, v: VertexId) {
        if let Some(adj) = self.slot_mut(u) {
            adj.push(v);
        }
    }
}

/// 前驱迭代器
#[derive(Debug, Clone)]
pub struct Predecessors<'a> {
    inner: PredecessorsInner<'a>,
}

#[derive(Debug, Clone)]
enum PredecessorsInner<'a> {
    /// 扫描全部邻接序列（有向图）
    Scan {
        adjacency: &'a [Adjacency],
        target: VertexId,
        slot: usize,
    },
    /// 直接复用后继序列（无向图）
    Adjacent(Successors<'a>),
}

impl<'a> Predecessors<'a> {
    /// 以后继序列作为前驱序列
    pub(crate) fn adjacent(successors: Successors<'a>) -> Self {
        Self {
            inner: PredecessorsInner::Adjacent(successors),
        }
    }
}

impl Iterator for Predecessors<'_> {
    type Item = VertexId;

    fn next(&mut self) -> Option<VertexId> {
        match &mut self.inner {
            PredecessorsInner::Scan {
                adjacency,
                target,
                slot,
            } => {
                while *slot < adjacency.len() {
                    let current = *slot;
                    *slot += 1;
                    if adjacency[current].contains(target) {
                        return Some(VertexId::from_index(current));
                    }
                }
                None
            }
            PredecessorsInner::Adjacent(successors) => successors.next(),
        }
    }
}
