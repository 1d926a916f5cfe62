//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("边不存在: {0}")]
    EdgeNotFound(String),

    #[error("尚未计算最短路径，请先调用 set_paths()")]
    PathsNotComputed,

    #[error("未指定目标顶点")]
    NoDestination,

    #[error("顶点 {0} 不可达")]
    NoPath(u64),

    #[error("顶点编号不连续: 共 {count} 个顶点，最大编号 {max}")]
    NonCompactVertices { count: usize, max: u64 },

    #[error("地图错误: {0}")]
    MapError(String),

    #[error("行程错误: {0}")]
    TripError(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(#[from] serde_json::Error),
}
