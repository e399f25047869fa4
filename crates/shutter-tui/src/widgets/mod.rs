//! Custom widget components

mod crash_overlay;
mod header;
mod key_hints;
pub mod modal_overlay;
mod speed_input;
mod speed_list;
mod theme_control;

pub use crash_overlay::CrashOverlay;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use speed_input::SpeedInputField;
pub use speed_list::SpeedList;
pub use theme_control::{ThemeControl, THEME_CONTROL_WIDTH};
