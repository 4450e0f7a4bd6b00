//! Shape Calculator 用户界面
//!
//! 基于egui的即时模式GUI。

pub mod dimension_form;
pub mod header;
pub mod preview;
pub mod preview_panel;
pub mod results_panel;
pub mod shape_selector;
pub mod state;
pub mod toast;

pub use state::{Command, UiState};
pub use toast::{Toast, ToastQueue};
