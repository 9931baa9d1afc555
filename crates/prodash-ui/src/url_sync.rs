//! Browser adapter for the demo URL reconciler.
//!
//! # Design
//! - `prodash_core::UrlSync` owns the decisions; this module feeds it the
//!   router location and `window.history`.
//! - URL writes always use `replaceState`, so history length never grows.
//! - Store-driven writes share one debounce `Timeout`; unmounting drops it.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::console;
use gloo::utils::window;
use gloo_timers::callback::Timeout;
use prodash_core::{History, UrlSync};
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::store::AppStore;

/// `History` over `window.location` and `window.history`.
pub(crate) struct WindowHistory;

impl History for WindowHistory {
    fn current_url(&self) -> String {
        let location = window().location();
        let path = location.pathname().unwrap_or_else(|_| "/".to_string());
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();
        format!("{path}{search}{hash}")
    }

    fn replace_url(&mut self, url: &str) {
        let result = window()
            .history()
            .and_then(|history| history.replace_state_with_url(&JsValue::NULL, "", Some(url)));
        if let Err(err) = result {
            console::error!("history.replaceState failed", url, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct UrlSyncProviderProps {
    /// Quiet period before a store change reaches the URL; zero writes at once.
    pub(crate) debounce_ms: u32,
    #[prop_or_default]
    pub(crate) children: Children,
}

#[function_component(UrlSyncProvider)]
pub(crate) fn url_sync_provider(props: &UrlSyncProviderProps) -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let sync = use_mut_ref(UrlSync::new);
    let timer = use_mut_ref(|| None as Option<Timeout>);
    let mounted = use_mut_ref(|| false);
    let location = use_location();
    let state = use_selector(|store: &AppStore| store.demo.state().clone());

    let location_key = location.map(|location| {
        (
            location.path().to_string(),
            location.query_str().to_string(),
            location.hash().to_string(),
        )
    });

    {
        let sync = sync.clone();
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let first = !mounted.replace(true);
                dispatch.reduce_mut(|store| {
                    let mut history = WindowHistory;
                    let mut sync = sync.borrow_mut();
                    let result = if first {
                        sync.mount(&mut history, &mut store.demo)
                    } else {
                        sync.navigate(&mut history, &mut store.demo)
                    };
                    if let Err(err) = result {
                        console::error!("demo url sync failed", err.to_string());
                    }
                });
                || ()
            },
            location_key,
        );
    }
    {
        let sync = sync.clone();
        let timer = timer.clone();
        let debounce_ms = props.debounce_ms;
        use_effect_with_deps(
            move |_| {
                if sync.borrow_mut().note_change() {
                    if debounce_ms == 0 {
                        flush(&sync);
                    } else {
                        let pending = sync.clone();
                        let handle = Timeout::new(debounce_ms, move || flush(&pending));
                        timer.borrow_mut().replace(handle);
                    }
                }
                || ()
            },
            state,
        );
    }
    use_effect_with_deps(
        move |_| {
            move || {
                timer.borrow_mut().take();
                sync.borrow_mut().cancel();
            }
        },
        (),
    );

    html! { <>{ for props.children.iter() }</> }
}

fn flush(sync: &Rc<RefCell<UrlSync>>) {
    let store = Dispatch::<AppStore>::new().get();
    sync.borrow_mut().flush(&mut WindowHistory, &store.demo);
}
