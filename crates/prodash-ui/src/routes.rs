//! Routing definitions for the demo dashboard.

use prodash_core::{DemoState, demo_href};
use yew_router::prelude::*;

/// Dashboard pages.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing overview.
    #[at("/")]
    Overview,
    /// Campaign list.
    #[at("/campaigns")]
    Campaigns,
    /// Loyalty members.
    #[at("/members")]
    Members,
    /// Token management.
    #[at("/tokens")]
    Tokens,
    /// Merchant settings.
    #[at("/merchant")]
    Merchant,
    /// Fallback for unknown paths.
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Pages listed in the shell navigation, in display order.
    #[must_use]
    pub const fn nav() -> [Self; 5] {
        [
            Self::Overview,
            Self::Campaigns,
            Self::Members,
            Self::Tokens,
            Self::Merchant,
        ]
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Campaigns => "Campaigns",
            Self::Members => "Members",
            Self::Tokens => "Tokens",
            Self::Merchant => "Merchant",
            Self::NotFound => "Not found",
        }
    }

    /// Shareable link to this page for `state`.
    #[must_use]
    pub fn href(self, state: &DemoState) -> String {
        demo_href(&self.to_path(), state)
    }
}
