use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `size`-sized rectangle centered within `area`, shrunk to fit if
/// `area` is too small
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [centered] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(centered);
    centered
}
