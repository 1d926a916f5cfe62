//! 顶点定义
//!
//! 顶点由正整数句柄标识，0 保留为“无顶点”

use serde::{Deserialize, Serialize};
use std::fmt;

/// 顶点 ID（正整数句柄，删除后可被复用）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(pub u64);

impl VertexId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }

    /// 句柄对应的稠密数组下标（句柄 - 1）；0 号句柄没有下标
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()?.checked_sub(1)
    }

    /// 由稠密数组下标还原句柄
    pub(crate) fn from_index(index: usize) -> Self {
        Self(index as u64 + 1)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
