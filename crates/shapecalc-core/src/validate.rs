//! 尺寸校验
//!
//! 校验分两步，顺序固定：
//! 1. 完整性：必需字段缺失或不是有限数值 → `MissingDimensions`
//! 2. 符号：必需字段严格小于零 → `NegativeValue`（零是合法值）
//!
//! 校验失败不会 panic，而是返回错误；错误附带的 `Effect`
//! 描述会话需要执行的状态变更（清空字段、弹出通知）。

use crate::dimension::{Dimension, DimensionSet};
use crate::shape::ShapeKind;
use thiserror::Error;

/// 校验错误
///
/// `Display` 输出即为表单下方显示的提示文本。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter all dimensions. Missing: {}", field_list(.0))]
    MissingDimensions(Vec<Dimension>),

    #[error("Dimensions cannot be negative: {}", field_list(.0))]
    NegativeValue(Vec<Dimension>),
}

impl ValidationError {
    /// 涉及的字段（按必需字段顺序）
    pub fn fields(&self) -> &[Dimension] {
        match self {
            ValidationError::MissingDimensions(fields) => fields,
            ValidationError::NegativeValue(fields) => fields,
        }
    }

    /// 错误对应的状态变更
    ///
    /// 缺失字段只显示行内提示；负值会清空对应字段并额外弹出通知。
    pub fn effects(&self) -> Vec<Effect> {
        match self {
            ValidationError::MissingDimensions(_) => Vec::new(),
            ValidationError::NegativeValue(fields) => {
                let mut effects: Vec<Effect> =
                    fields.iter().copied().map(Effect::ClearField).collect();
                effects.push(Effect::Notify(Notice::negative_values(fields)));
                effects
            }
        }
    }
}

/// 校验失败引起的状态变更
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// 将字段重置为空
    ClearField(Dimension),
    /// 弹出临时通知
    Notify(Notice),
}

/// 临时通知内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    fn negative_values(fields: &[Dimension]) -> Self {
        Self {
            title: "Invalid input".to_string(),
            message: format!(
                "Negative values are not allowed. Cleared: {}",
                field_list(fields)
            ),
        }
    }
}

/// 校验尺寸集合
pub fn validate(kind: ShapeKind, dims: &DimensionSet) -> Result<(), ValidationError> {
    let required = kind.required_dimensions();

    let missing: Vec<Dimension> = required
        .iter()
        .copied()
        .filter(|d| !dims.get(*d).is_some_and(f64::is_finite))
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingDimensions(missing));
    }

    let negative: Vec<Dimension> = required
        .iter()
        .copied()
        .filter(|d| dims.value_or_nan(*d) < 0.0)
        .collect();
    if !negative.is_empty() {
        return Err(ValidationError::NegativeValue(negative));
    }

    Ok(())
}

fn field_list(fields: &[Dimension]) -> String {
    fields
        .iter()
        .map(Dimension::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(values: &[(Dimension, f64)]) -> DimensionSet {
        values.iter().copied().collect()
    }

    #[test]
    fn test_valid_circle() {
        assert_eq!(validate(ShapeKind::Circle, &dims(&[(Dimension::Radius, 5.0)])), Ok(()));
    }

    #[test]
    fn test_missing_fields_in_required_order() {
        let set = dims(&[(Dimension::Height, 4.0), (Dimension::SideB, 5.0)]);
        let err = validate(ShapeKind::Triangle, &set).unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingDimensions(vec![
                Dimension::Base,
                Dimension::SideA,
                Dimension::SideC,
            ])
        );
        assert_eq!(
            err.to_string(),
            "Please enter all dimensions. Missing: base, sideA, sideC"
        );
    }

    #[test]
    fn test_nan_counts_as_missing() {
        let set = dims(&[(Dimension::Length, f64::NAN), (Dimension::Width, 2.0)]);
        assert_eq!(
            validate(ShapeKind::Rectangle, &set),
            Err(ValidationError::MissingDimensions(vec![Dimension::Length]))
        );
    }

    #[test]
    fn test_missing_checked_before_negative() {
        let set = dims(&[(Dimension::Length, -5.0)]);
        assert_eq!(
            validate(ShapeKind::Rectangle, &set),
            Err(ValidationError::MissingDimensions(vec![Dimension::Width]))
        );
    }

    #[test]
    fn test_negative_fields() {
        let set = dims(&[(Dimension::Length, -1.0), (Dimension::Width, -2.0)]);
        let err = validate(ShapeKind::Rectangle, &set).unwrap_err();
        assert_eq!(err.fields(), &[Dimension::Length, Dimension::Width]);
        assert_eq!(err.to_string(), "Dimensions cannot be negative: length, width");
    }

    #[test]
    fn test_zero_is_valid() {
        let set = dims(&[(Dimension::Length, 4.0), (Dimension::Width, 0.0)]);
        assert_eq!(validate(ShapeKind::Rectangle, &set), Ok(()));
        assert_eq!(validate(ShapeKind::Square, &dims(&[(Dimension::Side, -0.0)])), Ok(()));
    }

    #[test]
    fn test_unrelated_fields_ignored() {
        let set = dims(&[(Dimension::Side, 2.0), (Dimension::Radius, -1.0)]);
        assert_eq!(validate(ShapeKind::Square, &set), Ok(()));
    }

    #[test]
    fn test_effects() {
        let missing = ValidationError::MissingDimensions(vec![Dimension::Width]);
        assert!(missing.effects().is_empty());

        let negative = ValidationError::NegativeValue(vec![Dimension::Side]);
        let effects = negative.effects();
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], Effect::ClearField(Dimension::Side));
        assert!(matches!(&effects[1], Effect::Notify(n) if n.message.ends_with("side")));
    }
}
