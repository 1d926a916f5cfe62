//! 图抽象
//!
//! 有向图与无向图共享 `GraphIndex` 的全部簿记逻辑，
//! 仅在 `is_directed`、`in_degree`、`predecessors` 三项能力上不同

use super::edge::EdgeId;
use super::index::{Edges, GraphIndex, Predecessors, Successors, Vertices};
use super::vertex::VertexId;

pub(crate) mod sealed {
    use super::GraphIndex;

    /// 共享簿记的访问入口，仅在 crate 内可见
    pub trait HasIndex {
        fn index(&self) -> &GraphIndex;

        fn index_mut(&mut self) -> &mut GraphIndex;
    }
}

/// 图
///
/// 对不存在的顶点或边做修改是静默的空操作；查询返回 0 / false。
/// 簿记只能经由本 trait 的方法修改，外部无法实现该 trait。
pub trait Graph: sealed::HasIndex {
    /// 是否为有向图（每种实现固定不变）
    fn is_directed(&self) -> bool;

    /// 入度
    fn in_degree(&self, v: VertexId) -> usize;

    /// 前驱
    fn predecessors(&self, v: VertexId) -> Predecessors<'_>;

    // ==================== 顶点操作 ====================

    /// 添加顶点，返回新句柄
    fn add_vertex(&mut self) -> VertexId {
        self.index_mut().add_vertex()
    }

    /// 删除顶点及其关联的边
    fn remove_vertex(&mut self, v: VertexId) {
        self.index_mut().remove_vertex(v)
    }

    /// 顶点是否存在
    fn contains(&self, v: VertexId) -> bool {
        self.index().contains(v)
    }

    /// 顶点数量
    fn vertex_size(&self) -> usize {
        self.index().vertex_size()
    }

    /// 最大顶点句柄；空图返回 None
    fn max_vertex(&self) -> Option<VertexId> {
        self.index().max_vertex()
    }

    /// 所有顶点（升序）
    fn vertices(&self) -> Vertices<'_> {
        self.index().vertices()
    }

    // ==================== 边操作 ====================

    /// 添加边 (u, v)，返回边编码
    fn add_edge(&mut self, u: VertexId, v: VertexId) -> EdgeId {
        let directed = self.is_directed();
        self.index_mut().add_edge(u, v, directed)
    }

    /// 删除边 (u, v)
    fn remove_edge(&mut self, u: VertexId, v: VertexId) {
        let directed = self.is_directed();
        self.index_mut().remove_edge(u, v, directed)
    }

    /// 边是否存在
    fn contains_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.index().contains_edge(u, v, self.is_directed())
    }

    /// 边数量
    fn edge_size(&self) -> usize {
        self.index().edge_size()
    }

    /// 所有边（插入顺序）
    fn edges(&self) -> Edges<'_> {
        self.index().edges()
    }

    // ==================== 邻居查询 ====================

    /// 出度
    fn out_degree(&self, v: VertexId) -> usize {
        self.index().out_degree(v)
    }

    /// 后继（插入顺序）
    fn successors(&self, v: VertexId) -> Successors<'_> {
        self.index().successors(v)
    }
}
