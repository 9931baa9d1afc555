//! App root: store seeding, theme application and routing.

use gloo::utils::document;
use prodash_config::DemoSettings;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::components::demo_selector::DemoSelector;
use crate::components::pages::switch;
use crate::components::shell::AppShell;
use crate::preferences::{load_theme_preference, persist_theme_preference};
use crate::routes::Route;
use crate::store::{AppStore, toggle_selector, toggle_theme};
use crate::theme::apply_theme;
use crate::url_sync::UrlSyncProvider;

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    pub(crate) debounce_ms: u32,
}

#[function_component(ProdashApp)]
pub(crate) fn prodash_app(props: &AppProps) -> Html {
    let theme = use_selector(|store: &AppStore| {
        (store.demo.tokens().clone(), store.demo.state().theme_mode)
    });

    use_effect_with_deps(
        move |theme| {
            let (tokens, mode) = &**theme;
            apply_theme(tokens, *mode);
            persist_theme_preference(*mode);
            || ()
        },
        theme,
    );

    html! {
        <BrowserRouter>
            <UrlSyncProvider debounce_ms={props.debounce_ms}>
                <DashboardFrame />
            </UrlSyncProvider>
        </BrowserRouter>
    }
}

#[function_component(DashboardFrame)]
fn dashboard_frame() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let active = use_route::<Route>().unwrap_or(Route::NotFound);
    let state = use_selector(|store: &AppStore| store.demo.state().clone());
    let client_name = use_selector(|store: &AppStore| store.demo.client_name().to_string());
    let tokens = use_selector(|store: &AppStore| store.demo.tokens().clone());
    let selector_open = use_selector(|store: &AppStore| store.ui.selector_open);

    let on_toggle_theme = {
        let dispatch = dispatch.clone();
        Callback::from(move |()| {
            dispatch.reduce_mut(|store| {
                toggle_theme(store);
            });
        })
    };
    let on_toggle_selector = Callback::from(move |()| {
        dispatch.reduce_mut(toggle_selector);
    });

    html! {
        <AppShell
            state={(*state).clone()}
            client_name={AttrValue::from((*client_name).clone())}
            tokens={(*tokens).clone()}
            active={active}
            selector_open={*selector_open}
            on_toggle_theme={on_toggle_theme}
            on_toggle_selector={on_toggle_selector}
            selector={html! { <DemoSelector /> }}
        >
            <Switch<Route> render={switch} />
        </AppShell>
    }
}

/// Seed the store from built-in settings and the stored theme preference,
/// then mount the app into `#root` (or `<body>` when absent).
pub fn run_app() {
    console_error_panic_hook::set_once();
    let settings = DemoSettings::builtin();
    Dispatch::<AppStore>::new().set(AppStore::seeded(&settings, load_theme_preference()));
    let props = AppProps {
        debounce_ms: settings.sync.debounce_ms,
    };
    if let Some(root) = document().get_element_by_id("root") {
        yew::Renderer::<ProdashApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<ProdashApp>::with_props(props).render();
    }
}
