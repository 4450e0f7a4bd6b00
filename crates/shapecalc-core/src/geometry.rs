//! 几何模型
//!
//! 支持的图形：
//! - 圆 (Circle)
//! - 矩形 (Rectangle)
//! - 正方形 (Square)：等边矩形，复用矩形公式
//! - 三角形 (Triangle)
//!
//! 本模块不做任何校验，调用方负责保证输入完整且有效。

use crate::dimension::{Dimension, DimensionSet};
use crate::shape::ShapeKind;
use serde::{Deserialize, Serialize};

/// 图形枚举
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle(Circle),
    Rectangle(Rectangle),
    Square(Square),
    Triangle(Triangle),
}

impl Shape {
    /// 从尺寸集合构建图形
    ///
    /// 缺失的字段读作 NaN，结果同样为 NaN。
    pub fn from_dimensions(kind: ShapeKind, dims: &DimensionSet) -> Self {
        let v = |d: Dimension| dims.value_or_nan(d);
        match kind {
            ShapeKind::Circle => Shape::Circle(Circle::new(v(Dimension::Radius))),
            ShapeKind::Rectangle => {
                Shape::Rectangle(Rectangle::new(v(Dimension::Length), v(Dimension::Width)))
            }
            ShapeKind::Square => Shape::Square(Square::new(v(Dimension::Side))),
            ShapeKind::Triangle => Shape::Triangle(Triangle::new(
                v(Dimension::Base),
                v(Dimension::Height),
                [v(Dimension::SideA), v(Dimension::SideB), v(Dimension::SideC)],
            )),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Square(_) => ShapeKind::Square,
            Shape::Triangle(_) => ShapeKind::Triangle,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.area(),
            Shape::Rectangle(r) => r.area(),
            Shape::Square(s) => s.area(),
            Shape::Triangle(t) => t.area(),
        }
    }

    pub fn perimeter(&self) -> f64 {
        match self {
            Shape::Circle(c) => c.circumference(),
            Shape::Rectangle(r) => r.perimeter(),
            Shape::Square(s) => s.perimeter(),
            Shape::Triangle(t) => t.perimeter(),
        }
    }

    /// 同时计算面积和周长
    pub fn compute(&self) -> ComputationResult {
        ComputationResult {
            area: self.area(),
            perimeter: self.perimeter(),
        }
    }
}

/// 圆
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// 计算周长
    pub fn circumference(&self) -> f64 {
        2.0 * std::f64::consts::PI * self.radius
    }

    /// 计算面积
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius * self.radius
    }
}

/// 矩形
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub length: f64,
    pub width: f64,
}

impl Rectangle {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn area(&self) -> f64 {
        self.length * self.width
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * (self.length + self.width)
    }
}

/// 正方形
///
/// 内部保存一个长宽相等的矩形，面积和周长直接委托给矩形。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    pub fn new(side: f64) -> Self {
        Self {
            rect: Rectangle::new(side, side),
        }
    }

    pub fn side(&self) -> f64 {
        self.rect.length
    }

    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }

    pub fn area(&self) -> f64 {
        self.rect.area()
    }

    pub fn perimeter(&self) -> f64 {
        self.rect.perimeter()
    }
}

/// 三角形
///
/// 面积由底和高计算，周长由三条边计算，两组输入互相独立。
/// 不检查三角不等式，也不检查底/高与三边是否一致。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    pub base: f64,
    pub height: f64,
    /// 三条边 (sideA, sideB, sideC)
    pub sides: [f64; 3],
}

impl Triangle {
    pub fn new(base: f64, height: f64, sides: [f64; 3]) -> Self {
        Self {
            base,
            height,
            sides,
        }
    }

    pub fn area(&self) -> f64 {
        0.5 * self.base * self.height
    }

    pub fn perimeter(&self) -> f64 {
        self.sides.iter().sum()
    }
}

/// 计算结果
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComputationResult {
    pub area: f64,
    pub perimeter: f64,
}

impl ComputationResult {
    /// 面积，保留两位小数
    pub fn area_text(&self) -> String {
        format!("{:.2}", self.area)
    }

    /// 周长，保留两位小数
    pub fn perimeter_text(&self) -> String {
        format!("{:.2}", self.perimeter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_circle() {
        let c = Circle::new(5.0);
        assert!((c.area() - 78.539_816_339_744_83).abs() < EPS);
        assert!((c.circumference() - 31.415_926_535_897_93).abs() < EPS);
    }

    #[test]
    fn test_rectangle() {
        let r = Rectangle::new(4.0, 2.5);
        assert_eq!(r.area(), 10.0);
        assert_eq!(r.perimeter(), 13.0);
    }

    #[test]
    fn test_square_delegates_to_rectangle() {
        let s = Square::new(3.0);
        assert_eq!(s.side(), 3.0);
        assert_eq!(s.as_rectangle(), &Rectangle::new(3.0, 3.0));
        assert_eq!(s.area(), 9.0);
        assert_eq!(s.perimeter(), 12.0);
    }

    #[test]
    fn test_triangle_uses_disjoint_inputs() {
        // 三边 1,1,10 无法构成三角形，仍然照常计算
        let t = Triangle::new(6.0, 4.0, [1.0, 1.0, 10.0]);
        assert_eq!(t.area(), 12.0);
        assert_eq!(t.perimeter(), 12.0);
    }

    #[test]
    fn test_from_dimensions() {
        let dims: DimensionSet = [(Dimension::Length, 4.0), (Dimension::Width, 0.0)]
            .into_iter()
            .collect();
        let shape = Shape::from_dimensions(ShapeKind::Rectangle, &dims);
        assert_eq!(shape.kind(), ShapeKind::Rectangle);

        let result = shape.compute();
        assert_eq!(result.area_text(), "0.00");
        assert_eq!(result.perimeter_text(), "8.00");
    }

    #[test]
    fn test_missing_dimension_reads_as_nan() {
        let shape = Shape::from_dimensions(ShapeKind::Circle, &DimensionSet::new());
        assert!(shape.area().is_nan());
        assert!(shape.perimeter().is_nan());
    }
}
