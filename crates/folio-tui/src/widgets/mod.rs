//! Widget components for the TUI

pub mod ack_dialog;
pub mod hint_bar;
pub mod mobile_menu;
pub mod modal_overlay;
pub mod nav_bar;
pub mod scroll_top;
pub mod section_view;

pub use ack_dialog::AckDialog;
pub use hint_bar::HintBar;
pub use mobile_menu::MobileMenu;
pub use nav_bar::NavBar;
pub use scroll_top::ScrollTopButton;
pub use section_view::{body_lines, wrap_text, BodyContext, SectionView};
