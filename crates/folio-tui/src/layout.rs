//! Screen layout definitions for the TUI

use folio_core::SectionId;
use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the navigation bar (border + row + border)
pub const NAV_HEIGHT: u16 = 3;

/// Height of the drop-down menu: one row per section plus borders
pub const MENU_HEIGHT: u16 = SectionId::ALL.len() as u16 + 2;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub nav: Rect,

    /// Drop-down menu, present only while it is open
    pub menu: Option<Rect>,

    /// Section body (glass container)
    pub body: Rect,

    /// Key hint line
    pub hints: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, menu_open: bool) -> ScreenAreas {
    let menu_height = if menu_open { MENU_HEIGHT } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(NAV_HEIGHT),
        Constraint::Length(menu_height),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        menu: menu_open.then_some(chunks[1]),
        body: chunks[2],
        hints: chunks[3],
    }
}

/// Text area inside the body container: inside the border, one column of
/// padding on each side
pub fn body_content(body: Rect) -> Rect {
    Rect {
        x: body.x.saturating_add(2),
        y: body.y.saturating_add(1),
        width: body.width.saturating_sub(4),
        height: body.height.saturating_sub(2),
    }
}
