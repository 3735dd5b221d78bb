//! Previous / next page controls under the tile grid.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageStep {
    Previous,
    Next,
}

impl PageStep {
    /// Offset the page handler is called with.
    pub fn delta(self) -> i32 {
        match self {
            Self::Previous => -1,
            Self::Next => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PagerState {
    pub page: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

impl PagerState {
    pub fn new(page: u32, has_next: bool, has_previous: bool) -> Self {
        Self {
            page,
            has_next,
            has_previous,
        }
    }

    /// The pager is only drawn when there is somewhere to go.
    pub fn is_visible(&self) -> bool {
        self.has_next || self.has_previous
    }

    pub fn is_enabled(&self, step: PageStep) -> bool {
        match step {
            PageStep::Previous => self.has_previous,
            PageStep::Next => self.has_next,
        }
    }

    /// Page number after stepping, or `None` when that button is disabled.
    pub fn step(&self, step: PageStep) -> Option<u32> {
        if !self.is_enabled(step) {
            return None;
        }
        match step {
            PageStep::Previous => self.page.checked_sub(1),
            PageStep::Next => self.page.checked_add(1),
        }
    }
}
