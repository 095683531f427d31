/// Viewport width (px) from which the layout is treated as desktop.
pub const MOBILE_BREAKPOINT_PX: u32 = 768;

/// Layout mode derived from the last observed viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceMode {
    #[default]
    Desktop,
    Mobile,
}

impl DeviceMode {
    pub fn from_width(width: u32) -> Self {
        if width >= MOBILE_BREAKPOINT_PX {
            DeviceMode::Desktop
        } else {
            DeviceMode::Mobile
        }
    }
}

/// Visibility flags of the sidebar.
///
/// `mobile_open` drives only the mobile overlay; the fixed desktop sidebar
/// is always rendered and hidden below the breakpoint by CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarState {
    pub mode: DeviceMode,
    pub mobile_open: bool,
    pub desktop_collapsed: bool,
}

impl SidebarState {
    /// Applies a viewport width (mount or resize).
    ///
    /// Forces `mobile_open` to `true` at or above the breakpoint and to
    /// `false` below it. Returns whether `mobile_open` changed.
    pub fn on_resize(&mut self, width: u32) -> bool {
        self.mode = DeviceMode::from_width(width);
        let open = self.mode == DeviceMode::Desktop;
        let changed = self.mobile_open != open;
        self.mobile_open = open;
        changed
    }

    /// Dual-purpose toggle: collapses the desktop sidebar or opens/closes
    /// the mobile overlay depending on the stored device mode.
    pub fn toggle(&mut self) {
        match self.mode {
            DeviceMode::Desktop => self.desktop_collapsed = !self.desktop_collapsed,
            DeviceMode::Mobile => self.mobile_open = !self.mobile_open,
        }
    }

    pub fn close_mobile(&mut self) {
        self.mobile_open = false;
    }

    /// Whether the mobile overlay should be drawn right now.
    pub fn show_mobile_overlay(&self) -> bool {
        self.mode == DeviceMode::Mobile && self.mobile_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundaries() {
        assert_eq!(DeviceMode::from_width(767), DeviceMode::Mobile);
        assert_eq!(DeviceMode::from_width(768), DeviceMode::Desktop);
        assert_eq!(DeviceMode::from_width(0), DeviceMode::Mobile);
    }

    #[test]
    fn test_crossing_up_opens_exactly_once() {
        let mut s = SidebarState::default();
        assert!(!s.on_resize(767));
        assert!(!s.mobile_open);

        assert!(s.on_resize(768));
        assert!(s.mobile_open);

        assert!(!s.on_resize(900));
        assert!(!s.on_resize(768));
        assert!(s.mobile_open);
    }

    #[test]
    fn test_crossing_down_closes() {
        let mut s = SidebarState::default();
        s.on_resize(768);
        assert!(s.mobile_open);

        assert!(s.on_resize(767));
        assert!(!s.mobile_open);
        assert_eq!(s.mode, DeviceMode::Mobile);
    }

    #[test]
    fn test_toggle_on_desktop_only_collapses() {
        let mut s = SidebarState::default();
        s.on_resize(1024);
        let open_before = s.mobile_open;

        s.toggle();
        assert!(s.desktop_collapsed);
        assert_eq!(s.mobile_open, open_before);

        s.toggle();
        assert!(!s.desktop_collapsed);
    }

    #[test]
    fn test_toggle_on_mobile_only_opens_overlay() {
        let mut s = SidebarState::default();
        s.on_resize(500);

        s.toggle();
        assert!(s.mobile_open);
        assert!(!s.desktop_collapsed);
        assert!(s.show_mobile_overlay());

        s.toggle();
        assert!(!s.mobile_open);
        assert!(!s.desktop_collapsed);
    }

    #[test]
    fn test_resize_overrides_manual_close_on_desktop() {
        let mut s = SidebarState::default();
        s.on_resize(500);
        s.toggle();
        s.close_mobile();
        assert!(!s.mobile_open);

        s.on_resize(1200);
        assert!(s.mobile_open);
        assert!(!s.show_mobile_overlay());
    }

    #[test]
    fn test_collapse_survives_mobile_round_trip() {
        let mut s = SidebarState::default();
        s.on_resize(1024);
        s.toggle();
        s.on_resize(600);
        s.on_resize(1024);
        assert!(s.desktop_collapsed);
    }
}
