//! 计算会话
//!
//! 持有当前图形、尺寸、计算结果和错误。所有状态变更都通过
//! 显式的方法完成，便于脱离界面单独测试：
//! - `select_shape`: 切换图形，全部重置
//! - `set_dimension`: 编辑字段，清除错误
//! - `calculate`: 先校验后计算，失败时执行错误附带的 `Effect`

use crate::dimension::{Dimension, DimensionSet};
use crate::geometry::{ComputationResult, Shape};
use crate::input_parser::InputParser;
use crate::shape::ShapeKind;
use crate::validate::{validate, Effect, ValidationError};
use tracing::{debug, info, warn};

/// 计算失败
///
/// `effects` 已经作用于会话，返回给调用方用于同步界面
/// （清空输入框、弹出通知）。
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationFailure {
    pub error: ValidationError,
    pub effects: Vec<Effect>,
}

/// 计算会话
#[derive(Debug, Clone, Default)]
pub struct Session {
    shape: ShapeKind,
    dimensions: DimensionSet,
    result: Option<ComputationResult>,
    error: Option<ValidationError>,
    /// 预览动画代数，每次切换图形加一
    preview_epoch: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shape(shape: ShapeKind) -> Self {
        Self {
            shape,
            ..Self::default()
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    pub fn dimensions(&self) -> &DimensionSet {
        &self.dimensions
    }

    pub fn result(&self) -> Option<&ComputationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    pub fn preview_epoch(&self) -> u64 {
        self.preview_epoch
    }

    /// 切换图形
    ///
    /// 即使选择的是当前图形，也会清空尺寸、结果和错误。
    pub fn select_shape(&mut self, shape: ShapeKind) {
        info!("Shape selected: {}", shape);
        self.shape = shape;
        self.dimensions = DimensionSet::new();
        self.result = None;
        self.error = None;
        self.preview_epoch += 1;
    }

    /// 编辑字段
    ///
    /// 空输入清空字段，无法解析的输入存为 NaN。任何编辑都会清除错误，
    /// 已有的计算结果保持不变。
    pub fn set_dimension(&mut self, dimension: Dimension, text: &str) {
        match InputParser::parse_lenient(text) {
            Some(value) => self.dimensions.set(dimension, value),
            None => {
                self.dimensions.clear(dimension);
            }
        }
        debug!("Dimension {} set to {:?}", dimension, self.dimensions.get(dimension));
        self.error = None;
    }

    /// 校验并计算
    pub fn calculate(&mut self) -> Result<ComputationResult, CalculationFailure> {
        match validate(self.shape, &self.dimensions) {
            Ok(()) => {
                let result = Shape::from_dimensions(self.shape, &self.dimensions).compute();
                debug!(
                    "{} computed: area={:.2}, perimeter={:.2}",
                    self.shape, result.area, result.perimeter
                );
                self.result = Some(result);
                self.error = None;
                Ok(result)
            }
            Err(error) => {
                warn!("{} validation failed: {}", self.shape, error);
                let effects = error.effects();
                for effect in &effects {
                    if let Effect::ClearField(dimension) = effect {
                        self.dimensions.clear(*dimension);
                    }
                }
                self.error = Some(error.clone());
                Err(CalculationFailure { error, effects })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_empty() {
        let session = Session::new();
        assert_eq!(session.shape(), ShapeKind::Circle);
        assert!(session.dimensions().is_empty());
        assert!(session.result().is_none());
        assert!(session.error().is_none());
        assert_eq!(session.preview_epoch(), 0);
    }

    #[test]
    fn test_set_dimension_parses_text() {
        let mut session = Session::with_shape(ShapeKind::Square);
        session.set_dimension(Dimension::Side, "2.5");
        assert_eq!(session.dimensions().get(Dimension::Side), Some(2.5));

        session.set_dimension(Dimension::Side, "abc");
        assert!(session.dimensions().get(Dimension::Side).is_some_and(f64::is_nan));

        session.set_dimension(Dimension::Side, "");
        assert!(!session.dimensions().contains(Dimension::Side));
    }

    #[test]
    fn test_calculate_success_clears_error() {
        let mut session = Session::new();
        assert!(session.calculate().is_err());
        assert!(session.error().is_some());

        session.set_dimension(Dimension::Radius, "1");
        let result = session.calculate().unwrap();
        assert_eq!(result.area_text(), "3.14");
        assert!(session.error().is_none());
        assert_eq!(session.result(), Some(&result));
    }

    #[test]
    fn test_edit_clears_error_keeps_result() {
        let mut session = Session::new();
        session.set_dimension(Dimension::Radius, "2");
        session.calculate().unwrap();

        session.set_dimension(Dimension::Radius, "");
        assert!(session.calculate().is_err());
        assert!(session.error().is_some());
        assert!(session.result().is_some());

        session.set_dimension(Dimension::Radius, "3");
        assert!(session.error().is_none());
        assert!(session.result().is_some());
    }

    #[test]
    fn test_negative_clears_fields() {
        let mut session = Session::with_shape(ShapeKind::Rectangle);
        session.set_dimension(Dimension::Length, "-4");
        session.set_dimension(Dimension::Width, "2");

        let failure = session.calculate().unwrap_err();
        assert_eq!(
            failure.error,
            ValidationError::NegativeValue(vec![Dimension::Length])
        );
        assert!(failure.effects.contains(&Effect::ClearField(Dimension::Length)));
        assert!(!session.dimensions().contains(Dimension::Length));
        assert_eq!(session.dimensions().get(Dimension::Width), Some(2.0));
    }

    #[test]
    fn test_missing_leaves_fields_untouched() {
        let mut session = Session::with_shape(ShapeKind::Rectangle);
        session.set_dimension(Dimension::Length, "-4");

        let failure = session.calculate().unwrap_err();
        assert!(failure.effects.is_empty());
        assert_eq!(session.dimensions().get(Dimension::Length), Some(-4.0));
    }

    #[test]
    fn test_select_shape_resets_everything() {
        let mut session = Session::new();
        session.set_dimension(Dimension::Radius, "5");
        session.calculate().unwrap();

        session.select_shape(ShapeKind::Circle);
        assert!(session.dimensions().is_empty());
        assert!(session.result().is_none());
        assert_eq!(session.preview_epoch(), 1);
    }
}
