//! Shape Calculator 核心
//!
//! 提供图形面积/周长计算、尺寸校验和计算会话状态机。
//!
//! # 架构设计
//!
//! 采用 "先校验、后计算" 的流水线：
//! - `DimensionSet`: 用户输入的尺寸（名称 → 数值）
//! - `validate`: 完整性检查 + 符号检查
//! - `Shape`: 按图形类型分派的面积/周长公式
//! - `Session`: 串联以上步骤，并记录结果和错误
//!
//! # 示例
//!
//! ```rust
//! use shapecalc_core::prelude::*;
//!
//! let mut session = Session::new();
//! session.set_dimension(Dimension::Radius, "5");
//!
//! let result = session.calculate().unwrap();
//! assert_eq!(result.area_text(), "78.54");
//! ```

pub mod dimension;
pub mod geometry;
pub mod input_parser;
pub mod session;
pub mod shape;
pub mod validate;

pub mod prelude {
    //! 常用类型的便捷导入
    pub use crate::dimension::{Dimension, DimensionSet};
    pub use crate::geometry::{Circle, ComputationResult, Rectangle, Shape, Square, Triangle};
    pub use crate::input_parser::{InputParser, ParseError};
    pub use crate::session::{CalculationFailure, Session};
    pub use crate::shape::ShapeKind;
    pub use crate::validate::{validate, Effect, Notice, ValidationError};
}
