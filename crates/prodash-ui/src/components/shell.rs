use prodash_core::{DemoState, ThemeTokens, demo_query, url::QueryPairs};
use yew::prelude::*;
use yew_router::prelude::Link;

use crate::routes::Route;
use crate::theme::{inline_style, toggle_label};

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) state: DemoState,
    pub(crate) client_name: AttrValue,
    pub(crate) tokens: ThemeTokens,
    pub(crate) active: Route,
    pub(crate) selector_open: bool,
    pub(crate) on_toggle_theme: Callback<()>,
    pub(crate) on_toggle_selector: Callback<()>,
    pub(crate) selector: Html,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let query = demo_query(&props.state);
    let on_toggle_theme = {
        let cb = props.on_toggle_theme.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let on_toggle_selector = {
        let cb = props.on_toggle_selector.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div
            class={classes!("app-shell", format!("theme-{}", props.state.theme_mode.as_str()))}
            style={inline_style(&props.tokens)}
        >
            <aside class="sidebar">
                <div class="brand">
                    <strong>{props.client_name.clone()}</strong>
                    <span class="muted">{props.state.role.label()}</span>
                    <span class={classes!("badge", format!("version-{}", props.state.version.as_str()))}>
                        {props.state.version.label()}
                    </span>
                </div>
                <nav>
                    {for Route::nav().into_iter().map(|route| nav_item(route, &query, props.active))}
                </nav>
                <div class="sidebar-footer">
                    <button class="ghost" onclick={on_toggle_theme}>
                        {toggle_label(props.state.theme_mode)}
                    </button>
                    <button
                        class={classes!("ghost", props.selector_open.then_some("active"))}
                        onclick={on_toggle_selector}
                    >
                        {"Demo settings"}
                    </button>
                </div>
            </aside>
            <main class="content">
                if props.selector_open {
                    {props.selector.clone()}
                }
                {for props.children.iter()}
            </main>
        </div>
    }
}

fn nav_item(route: Route, query: &QueryPairs, active: Route) -> Html {
    let classes = classes!("nav-item", (active == route).then_some("active"));
    html! {
        <Link<Route, QueryPairs> to={route} query={Some(query.clone())} classes={classes}>
            {route.label()}
        </Link<Route, QueryPairs>>
    }
}
