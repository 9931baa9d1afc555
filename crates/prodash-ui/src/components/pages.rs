use prodash_core::Role;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_selector;

use crate::routes::Route;
use crate::store::AppStore;

pub(crate) fn switch(route: Route) -> Html {
    match route {
        Route::NotFound => html! { <NotFound /> },
        page => html! { <Page route={page} /> },
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct PageProps {
    pub(crate) route: Route,
}

#[function_component(Page)]
pub(crate) fn page(props: &PageProps) -> Html {
    let client_name = use_selector(|store: &AppStore| store.demo.client_name().to_string());
    let role = use_selector(|store: &AppStore| store.demo.state().role);
    let scenario = use_selector(|store: &AppStore| store.demo.state().scenario);

    html! {
        <section class="page">
            <header class="page-header">
                <h1>{props.route.label()}</h1>
                <p class="muted">{format!("{} · {}", *client_name, scenario.title())}</p>
            </header>
            <p>{audience(*role)}</p>
        </section>
    }
}

#[function_component(NotFound)]
pub(crate) fn not_found() -> Html {
    html! {
        <section class="page">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Overview}>{"Back to overview"}</Link<Route>>
        </section>
    }
}

const fn audience(role: Role) -> &'static str {
    match role {
        Role::Admin => "Program-wide view across every merchant location.",
        Role::Merchant => "Your locations, campaigns and members.",
        Role::Support => "Member lookups and case history for support agents.",
    }
}
