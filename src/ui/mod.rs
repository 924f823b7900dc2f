//! UIモジュール
//!
//! ratatuiベースの画面描画

pub mod layout;
pub mod renderer;
pub mod theme;

// 公開API
pub use layout::ScreenLayout;
pub use renderer::Renderer;
pub use theme::Theme;
