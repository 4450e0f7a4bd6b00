//! UI状态管理

use crate::toast::ToastQueue;
use shapecalc_core::dimension::Dimension;
use shapecalc_core::session::Session;
use shapecalc_core::shape::ShapeKind;
use shapecalc_core::validate::Effect;
use std::collections::BTreeMap;

/// 界面发出的命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SelectShape(ShapeKind),
    EditDimension(Dimension, String),
    Calculate,
    ToggleTheme,
}

/// UI状态
#[derive(Debug)]
pub struct UiState {
    /// 计算会话
    pub session: Session,

    /// 输入框中的原始文本
    field_text: BTreeMap<Dimension, String>,

    /// 临时通知
    pub toasts: ToastQueue,

    /// 深色主题
    pub dark_mode: bool,

    /// 预览动画开始时间及对应的会话代数
    preview_started: Option<(u64, f64)>,

    /// 结果面板出现的时间
    result_shown_at: Option<f64>,
}

impl UiState {
    pub fn new(shape: ShapeKind, dark_mode: bool, toast_seconds: f64) -> Self {
        Self {
            session: Session::with_shape(shape),
            field_text: BTreeMap::new(),
            toasts: ToastQueue::new(toast_seconds),
            dark_mode,
            preview_started: None,
            result_shown_at: None,
        }
    }

    /// 输入框文本
    pub fn field_text(&self, dimension: Dimension) -> &str {
        self.field_text
            .get(&dimension)
            .map(String::as_str)
            .unwrap_or("")
    }

    /// 执行命令，`now` 为当前 egui 时间（秒）
    pub fn apply(&mut self, command: Command, now: f64) {
        match command {
            Command::SelectShape(shape) => self.select_shape(shape),
            Command::EditDimension(dimension, text) => self.edit_dimension(dimension, text),
            Command::Calculate => self.calculate(now),
            Command::ToggleTheme => self.dark_mode = !self.dark_mode,
        }
    }

    /// 切换图形，清空所有输入框
    pub fn select_shape(&mut self, shape: ShapeKind) {
        self.session.select_shape(shape);
        self.field_text.clear();
        self.result_shown_at = None;
    }

    pub fn edit_dimension(&mut self, dimension: Dimension, text: String) {
        self.session.set_dimension(dimension, &text);
        if text.is_empty() {
            self.field_text.remove(&dimension);
        } else {
            self.field_text.insert(dimension, text);
        }
    }

    /// 计算，并把校验失败的 `Effect` 同步到界面
    pub fn calculate(&mut self, now: f64) {
        let had_result = self.session.result().is_some();
        match self.session.calculate() {
            Ok(_) => {
                if !had_result {
                    self.result_shown_at = Some(now);
                }
            }
            Err(failure) => {
                for effect in failure.effects {
                    match effect {
                        Effect::ClearField(dimension) => {
                            self.field_text.remove(&dimension);
                        }
                        Effect::Notify(notice) => self.toasts.push(notice, now),
                    }
                }
            }
        }
    }

    /// 当前预览动画已播放的时间
    ///
    /// 会话代数变化（切换图形）时重新计时。
    pub fn preview_elapsed(&mut self, now: f64) -> f64 {
        let epoch = self.session.preview_epoch();
        match self.preview_started {
            Some((started_epoch, started_at)) if started_epoch == epoch => now - started_at,
            _ => {
                self.preview_started = Some((epoch, now));
                0.0
            }
        }
    }

    /// 结果面板已显示的时间
    pub fn result_elapsed(&self, now: f64) -> Option<f64> {
        self.session.result()?;
        Some(self.result_shown_at.map_or(f64::INFINITY, |t| now - t))
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ShapeKind::Circle, true, 3.0)
    }
}
