//! # 统一错误处理模块
//!
//! 定义 ionlat 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// ionlat 统一错误类型
#[derive(Error, Debug)]
pub enum IonlatError {
    // ─────────────────────────────────────────────────────────────
    // 晶格构造错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid lattice dimension: {reason}")]
    InvalidDimension { reason: String },

    #[error("Degenerate lattice vectors: cell volume {volume:e} is zero")]
    DegenerateLattice { volume: f64 },

    // ─────────────────────────────────────────────────────────────
    // 势能计算错误
    // ─────────────────────────────────────────────────────────────
    #[error("Oppositely charged ions coincide (r = {distance}); Coulomb energy diverges")]
    CoincidentChargedPair { distance: f64 },

    #[error("Invalid pair distance: {distance} (must be a positive finite number)")]
    InvalidDistance { distance: f64 },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid repeat counts: {0}")]
    InvalidRepeats(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, IonlatError>;
