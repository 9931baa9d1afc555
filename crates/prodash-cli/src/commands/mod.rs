//! Command handlers grouped by concern.

mod css;
mod inspect;
mod link;
mod tenants;

pub(crate) use css::handle_css;
pub(crate) use inspect::{Inspection, handle_inspect};
#[cfg(test)]
pub(crate) use inspect::inspect;
pub(crate) use link::{LinkReport, handle_link};
pub(crate) use tenants::handle_tenants;
