//! 图形类型

use crate::dimension::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 支持的图形类型（封闭集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Circle,
    Rectangle,
    Square,
    Triangle,
}

impl ShapeKind {
    /// 所有图形，按选择器中的顺序
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Circle,
        ShapeKind::Rectangle,
        ShapeKind::Square,
        ShapeKind::Triangle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Square => "Square",
            ShapeKind::Triangle => "Triangle",
        }
    }

    /// 计算所需的尺寸字段
    ///
    /// 顺序即表单顺序，也是错误信息中列出字段的顺序。
    pub fn required_dimensions(&self) -> &'static [Dimension] {
        match self {
            ShapeKind::Circle => &[Dimension::Radius],
            ShapeKind::Rectangle => &[Dimension::Length, Dimension::Width],
            ShapeKind::Square => &[Dimension::Side],
            ShapeKind::Triangle => &[
                Dimension::Base,
                Dimension::Height,
                Dimension::SideA,
                Dimension::SideB,
                Dimension::SideC,
            ],
        }
    }

    /// 该图形是否需要指定尺寸
    pub fn requires(&self, dimension: Dimension) -> bool {
        self.required_dimensions().contains(&dimension)
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown shape: {0}")]
pub struct UnknownShape(pub String);

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownShape(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_dimensions() {
        assert_eq!(ShapeKind::Circle.required_dimensions(), &[Dimension::Radius]);
        assert_eq!(
            ShapeKind::Rectangle.required_dimensions(),
            &[Dimension::Length, Dimension::Width]
        );
        assert_eq!(ShapeKind::Square.required_dimensions(), &[Dimension::Side]);
        assert_eq!(ShapeKind::Triangle.required_dimensions().len(), 5);
        assert!(ShapeKind::Triangle.requires(Dimension::SideC));
        assert!(!ShapeKind::Square.requires(Dimension::Length));
    }

    #[test]
    fn test_parse_shape_name() {
        assert_eq!("circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!(" Triangle ".parse::<ShapeKind>(), Ok(ShapeKind::Triangle));
        assert_eq!(
            "hexagon".parse::<ShapeKind>(),
            Err(UnknownShape("hexagon".to_string()))
        );
    }

    #[test]
    fn test_default_is_circle() {
        assert_eq!(ShapeKind::default(), ShapeKind::Circle);
        assert_eq!(ShapeKind::ALL[0].to_string(), "Circle");
    }
}
