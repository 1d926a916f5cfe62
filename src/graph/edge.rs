//! 边定义
//!
//! 边是顶点句柄的有序对；边 ID 由配对函数计算，用于去重

use crate::graph::vertex::VertexId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边 ID（配对编码）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId(pub u64);

impl EdgeId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// 计算 (u, v) 的边编码: ((u + v) * (u + v + 1)) / 2 + v
    pub fn of(u: VertexId, v: VertexId) -> Self {
        let sum = u.0.wrapping_add(v.0);
        let triangle = if sum % 2 == 0 {
            (sum / 2).wrapping_mul(sum.wrapping_add(1))
        } else {
            sum.wrapping_mul(sum.wrapping_add(1) / 2)
        };
        Self(triangle.wrapping_add(v.0))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl From<u64> for EdgeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 源顶点
    src: VertexId,
    /// 目标顶点
    dst: VertexId,
}

impl Edge {
    /// 创建新边
    pub fn new(src: VertexId, dst: VertexId) -> Self {
        Self { src, dst }
    }

    /// 获取边 ID
    pub fn id(&self) -> EdgeId {
        EdgeId::of(self.src, self.dst)
    }

    /// 获取源顶点 ID
    pub fn src(&self) -> VertexId {
        self.src
    }

    /// 获取目标顶点 ID
    pub fn dst(&self) -> VertexId {
        self.dst
    }

    /// 是否连接 u 与 v（忽略方向）
    pub fn joins(&self, u: VertexId, v: VertexId) -> bool {
        (self.src == u && self.dst == v) || (self.src == v && self.dst == u)
    }

    /// 是否以 v 为端点
    pub fn touches(&self, v: VertexId) -> bool {
        self.src == v || self.dst == v
    }
}

impl From<(VertexId, VertexId)> for Edge {
    fn from((src, dst): (VertexId, VertexId)) -> Self {
        Self::new(src, dst)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.src, self.dst)
    }
}
