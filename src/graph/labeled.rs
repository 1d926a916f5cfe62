//! 带标签的图
//!
//! 在任意 [`Graph`] 之上为顶点和边附加标签，自身也实现 [`Graph`]

use super::edge::EdgeId;
use super::graph::sealed::HasIndex;
use super::graph::Graph;
use super::index::{GraphIndex, Predecessors};
use super::vertex::VertexId;
use crate::error::{Error, Result};
use std::collections::HashMap;

/// 带标签的图
#[derive(Debug, Clone)]
pub struct LabeledGraph<G, VL, EL> {
    /// 底层图
    inner: G,
    /// 顶点标签
    vertex_labels: HashMap<VertexId, VL>,
    /// 边标签；无向图的键按 (小, 大) 规范化
    edge_labels: HashMap<(VertexId, VertexId), EL>,
}

impl<G: Graph, VL, EL> LabeledGraph<G, VL, EL> {
    /// 包装底层图
    pub fn new(inner: G) -> Self {
        Self {
            inner,
            vertex_labels: HashMap::new(),
            edge_labels: HashMap::new(),
        }
    }

    /// 添加带标签的顶点
    pub fn add_labeled(&mut self, label: VL) -> VertexId {
        let id = self.inner.add_vertex();
        self.vertex_labels.insert(id, label);
        id
    }

    /// 添加带标签的边；边已存在时替换标签
    pub fn add_labeled_edge(&mut self, u: VertexId, v: VertexId, label: EL) -> EdgeId {
        let code = self.inner.add_edge(u, v);
        if self.inner.contains_edge(u, v) {
            let key = self.edge_key(u, v);
            self.edge_labels.insert(key, label);
        }
        code
    }

    /// 获取顶点标签
    pub fn label(&self, v: VertexId) -> Option<&VL> {
        self.vertex_labels.get(&v)
    }

    /// 设置顶点标签
    pub fn set_label(&mut self, v: VertexId, label: VL) -> Result<()> {
        if !self.inner.contains(v) {
            return Err(Error::VertexNotFound(v.to_string()));
        }
        self.vertex_labels.insert(v, label);
        Ok(())
    }

    /// 获取边标签
    pub fn edge_label(&self, u: VertexId, v: VertexId) -> Option<&EL> {
        self.edge_labels.get(&self.edge_key(u, v))
    }

    /// 设置边标签
    pub fn set_edge_label(&mut self, u: VertexId, v: VertexId, label: EL) -> Result<()> {
        if !self.inner.contains_edge(u, v) {
            return Err(Error::EdgeNotFound(format!("({}, {})", u, v)));
        }
        let key = self.edge_key(u, v);
        self.edge_labels.insert(key, label);
        Ok(())
    }

    /// 底层图
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// 取出底层图，丢弃标签
    pub fn into_inner(self) -> G {
        self.inner
    }

    fn edge_key(&self, u: VertexId, v: VertexId) -> (VertexId, VertexId) {
        if self.inner.is_directed() || u <= v {
            (u, v)
        } else {
            (v, u)
        }
    }
}

impl<G: Graph, VL, EL> HasIndex for LabeledGraph<G, VL, EL> {
    fn index(&self) -> &GraphIndex {
        self.inner.index()
    }

    fn index_mut(&mut self) -> &mut GraphIndex {
        self.inner.index_mut()
    }
}

impl<G: Graph, VL, EL> Graph for LabeledGraph<G, VL, EL> {
    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn in_degree(&self, v: VertexId) -> usize {
        self.inner.in_degree(v)
    }

    fn predecessors(&self, v: VertexId) -> Predecessors<'_> {
        self.inner.predecessors(v)
    }

    fn remove_vertex(&mut self, v: VertexId) {
        self.inner.remove_vertex(v);
        self.vertex_labels.remove(&v);
        self.edge_labels.retain(|&(a, b), _| a != v && b != v);
    }

    fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        self.inner.remove_edge(u, v);
        let key = self.edge_key(u, v);
        self.edge_labels.remove(&key);
    }
}
