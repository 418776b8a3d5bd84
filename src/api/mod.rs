//! Внешний API покерного движка для рендереров (терминал, бот, реплеер).
//!
//! Здесь описываются:
//! - DTO (dto.rs) – удобные структуры для фронта;
//! - запросы (queries.rs) – сборка DTO из состояния движка, только чтение.

pub mod dto;
pub mod queries;

pub use dto::*;
pub use queries::*;
