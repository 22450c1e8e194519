//! Page navigation.
//!
//! Press `Tab` to switch between the dashboard and the diagnostics view.
//!
//! # Pages
//!
//! - [`Page::Dashboard`]: avatar, readout, input panel, eco tips
//! - [`Page::Diagnostics`]: frame timing, scan counters, event log terminal

/// Available pages in the application.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Page {
    /// The air quality dashboard.
    #[default]
    Dashboard,

    /// Profiling metrics and the event log.
    Diagnostics,
}

impl Page {
    /// Toggle to the other page.
    #[inline]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Dashboard => Self::Diagnostics,
            Self::Diagnostics => Self::Dashboard,
        }
    }

    /// Short name for logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Diagnostics => "diagnostics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_default() {
        assert_eq!(Page::default(), Page::Dashboard);
    }

    #[test]
    fn test_page_toggle_cycle() {
        assert_eq!(Page::Dashboard.toggle(), Page::Diagnostics);
        assert_eq!(Page::Dashboard.toggle().toggle(), Page::Dashboard);
    }
}
