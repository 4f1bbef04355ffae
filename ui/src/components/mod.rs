//! Page chrome shared by every platform shell.

mod copy_prompt;
mod navbar;

pub use copy_prompt::{copy_to_clipboard, CopyPrompt};
pub use navbar::{AppNavbar, SECTION_ANCHORS};
