//! 道路地图
//!
//! 以有向带标签图保存地点和路段，并维护名称到顶点的查找表

use crate::error::{Error, Result};
use crate::graph::{DirectedGraph, Graph, LabeledGraph, VertexId};
use crate::types::{Direction, Location, Road};
use indexmap::IndexMap;
use tracing::trace;

/// 地图底层图类型
pub type RoadGraph = LabeledGraph<DirectedGraph, Location, Road>;

/// 道路地图
#[derive(Debug, Clone)]
pub struct RoadMap {
    graph: RoadGraph,
    /// 名称 -> 顶点，保持声明顺序
    sites: IndexMap<String, VertexId>,
}

impl Default for RoadMap {
    fn default() -> Self {
        Self::new()
    }
}

impl RoadMap {
    pub fn new() -> Self {
        Self {
            graph: LabeledGraph::new(DirectedGraph::new()),
            sites: IndexMap::new(),
        }
    }

    /// 添加地点，名称不可重复
    pub fn add_location(&mut self, name: &str, x: f64, y: f64) -> Result<VertexId> {
        if self.sites.contains_key(name) {
            return Err(Error::MapError(format!("multiple entries for {}", name)));
        }
        let id = self.graph.add_labeled(Location::new(name, x, y));
        self.sites.insert(name.to_string(), id);
        trace!(name, %id, "添加地点");
        Ok(id)
    }

    /// 添加道路及其反向路段
    pub fn add_road(
        &mut self,
        from: &str,
        name: &str,
        length: f64,
        direction: Direction,
        to: &str,
    ) -> Result<()> {
        let u = self.require(from)?;
        let v = self.require(to)?;
        let road = Road::new(name, direction, length);
        let back = road.reversed();
        self.graph.add_labeled_edge(u, v, road);
        self.graph.add_labeled_edge(v, u, back);
        trace!(from, to, road = name, "添加道路");
        Ok(())
    }

    fn require(&self, name: &str) -> Result<VertexId> {
        self.site(name)
            .ok_or_else(|| Error::MapError(format!("location {} not defined", name)))
    }

    /// 按名称查找地点顶点
    pub fn site(&self, name: &str) -> Option<VertexId> {
        self.sites.get(name).copied()
    }

    pub fn location(&self, v: VertexId) -> Option<&Location> {
        self.graph.label(v)
    }

    /// 从 u 到 v 的路段
    pub fn road(&self, u: VertexId, v: VertexId) -> Option<&Road> {
        self.graph.edge_label(u, v)
    }

    pub fn graph(&self) -> &RoadGraph {
        &self.graph
    }

    pub fn location_count(&self) -> usize {
        self.sites.len()
    }

    /// 按声明顺序列出地点名称
    pub fn location_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.sites.keys().map(String::as_str)
    }

    /// 路段数（双向各计一次）
    pub fn road_count(&self) -> usize {
        self.graph.edge_size()
    }
}
