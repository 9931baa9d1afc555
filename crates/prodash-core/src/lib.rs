#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls
)]
#![warn(
    missing_docs,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]

//! DOM-free demo context for the PRO Dashboard.
//!
//! Layout: `tenant.rs` and `theme.rs` (catalog and branding tokens), `model.rs`
//! (state, roles, scenarios, versions, change sets), `url.rs` (query codec), `context.rs`
//! and `store.rs` (state owner and notifications), `sync.rs` (URL reconciler).

pub mod context;
pub mod error;
pub mod model;
pub mod store;
pub mod sync;
pub mod tenant;
pub mod theme;
pub mod url;

pub use context::{DemoContext, DemoSnapshot, MAX_SAVED_INSTANCES};
pub use error::{DemoError, DemoResult};
pub use model::{DemoChanges, DemoDefaults, DemoState, Role, Scenario, Version};
pub use store::{DemoEvent, DemoStore, SubscriptionId};
pub use sync::{History, MemoryHistory, SyncReport, SyncTarget, UrlSync};
pub use tenant::{Branding, Palette, Tenant, TenantCatalog, TenantId};
pub use theme::{ThemeMode, ThemeTokens};
pub use url::{DerivedState, UrlSyncRecord, demo_href, demo_query, derive_state, derive_url};
