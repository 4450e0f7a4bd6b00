//! 尺寸名称与尺寸集合

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 尺寸名称
///
/// `as_str` 返回的名称与表单字段名一致（如 `sideA`）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    Radius,
    Length,
    Width,
    Side,
    Base,
    Height,
    SideA,
    SideB,
    SideC,
}

impl Dimension {
    pub const ALL: [Dimension; 9] = [
        Dimension::Radius,
        Dimension::Length,
        Dimension::Width,
        Dimension::Side,
        Dimension::Base,
        Dimension::Height,
        Dimension::SideA,
        Dimension::SideB,
        Dimension::SideC,
    ];

    /// 字段名
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Radius => "radius",
            Dimension::Length => "length",
            Dimension::Width => "width",
            Dimension::Side => "side",
            Dimension::Base => "base",
            Dimension::Height => "height",
            Dimension::SideA => "sideA",
            Dimension::SideB => "sideB",
            Dimension::SideC => "sideC",
        }
    }

    /// 表单标签
    pub fn label(&self) -> &'static str {
        match self {
            Dimension::Radius => "Radius",
            Dimension::Length => "Length",
            Dimension::Width => "Width",
            Dimension::Side => "Side",
            Dimension::Base => "Base",
            Dimension::Height => "Height",
            Dimension::SideA => "Side A",
            Dimension::SideB => "Side B",
            Dimension::SideC => "Side C",
        }
    }

    /// 输入框占位提示
    pub fn placeholder(&self) -> &'static str {
        match self {
            Dimension::Radius => "Enter radius",
            Dimension::Length => "Enter length",
            Dimension::Width => "Enter width",
            Dimension::Side => "Enter side length",
            Dimension::Base => "Enter base",
            Dimension::Height => "Enter height",
            Dimension::SideA => "Enter side A",
            Dimension::SideB => "Enter side B",
            Dimension::SideC => "Enter side C",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown dimension: {0}")]
pub struct UnknownDimension(pub String);

impl FromStr for Dimension {
    type Err = UnknownDimension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownDimension(s.to_string()))
    }
}

/// 尺寸集合
///
/// 缺失的键表示空字段；无法解析的输入以 NaN 存储，
/// 由校验器视为缺失。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DimensionSet {
    values: BTreeMap<Dimension, f64>,
}

impl DimensionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 获取原始值（可能为 NaN）
    pub fn get(&self, dimension: Dimension) -> Option<f64> {
        self.values.get(&dimension).copied()
    }

    /// 获取可用于计算的值，空字段读作 NaN
    pub fn value_or_nan(&self, dimension: Dimension) -> f64 {
        self.get(dimension).unwrap_or(f64::NAN)
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        self.values.insert(dimension, value);
    }

    /// 清空字段，返回原值
    pub fn clear(&mut self, dimension: Dimension) -> Option<f64> {
        self.values.remove(&dimension)
    }

    pub fn contains(&self, dimension: Dimension) -> bool {
        self.values.contains_key(&dimension)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Dimension, f64)> + '_ {
        self.values.iter().map(|(d, v)| (*d, *v))
    }
}

impl FromIterator<(Dimension, f64)> for DimensionSet {
    fn from_iter<T: IntoIterator<Item = (Dimension, f64)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
