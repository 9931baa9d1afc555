use prodash_core::{DemoState, Role, Scenario, ThemeMode, Version};
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

use crate::store::{
    AppStore, dismiss_error, go_to_instance, reset_demo, save_instance, select_client,
    select_role, select_scenario, select_theme, select_version,
};

type Reducer = fn(&mut AppStore, &str);

#[function_component(DemoSelector)]
pub(crate) fn demo_selector() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let state = use_selector(|store: &AppStore| store.demo.state().clone());
    let tenants = use_selector(|store: &AppStore| {
        store
            .demo
            .catalog()
            .iter()
            .map(|tenant| (tenant.id.to_string(), tenant.name.clone()))
            .collect::<Vec<_>>()
    });
    let last_error = use_selector(|store: &AppStore| store.ui.last_error.clone());
    let saved = use_selector(|store: &AppStore| {
        (
            store.demo.saved_instances().to_vec(),
            store.demo.current_instance(),
        )
    });

    let roles = Role::all()
        .iter()
        .map(|role| (role.as_str().to_string(), role.label().to_string()))
        .collect();
    let themes = ThemeMode::all()
        .iter()
        .map(|mode| (mode.as_str().to_string(), mode.as_str().to_string()))
        .collect();
    let scenarios = Scenario::all()
        .iter()
        .map(|scenario| (scenario.as_str().to_string(), scenario.title().to_string()))
        .collect();
    let versions = Version::all()
        .iter()
        .map(|version| (version.as_str().to_string(), version.label().to_string()))
        .collect();

    let on_dismiss = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(dismiss_error);
        })
    };
    let on_save = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|store| {
                save_instance(store);
            });
        })
    };
    let on_reset = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|store| {
                reset_demo(store);
            });
        })
    };
    let (instances, current) = &*saved;

    html! {
        <section class="demo-selector" aria-label="Demo settings">
            {select_field("Client", (*tenants).clone(), state.client_id.as_str(), &dispatch, |store, value| {
                select_client(store, value);
            })}
            {select_field("Role", roles, state.role.as_str(), &dispatch, |store, value| {
                select_role(store, value);
            })}
            {select_field("Theme", themes, state.theme_mode.as_str(), &dispatch, |store, value| {
                select_theme(store, value);
            })}
            {select_field("Scenario", scenarios, state.scenario.as_str(), &dispatch, |store, value| {
                select_scenario(store, value);
            })}
            {select_field("Version", versions, state.version.as_str(), &dispatch, |store, value| {
                select_version(store, value);
            })}
            <div class="actions">
                <button class="ghost" onclick={on_save}>{"Save instance"}</button>
                <button class="ghost" onclick={on_reset}>{"Reset to default"}</button>
            </div>
            if !instances.is_empty() {
                <ol class="saved-instances">
                    {for instances.iter().enumerate().map(|(index, instance)| {
                        saved_item(index, instance, *current == Some(index), &dispatch)
                    })}
                </ol>
            }
            if let Some(message) = (*last_error).clone() {
                <div class="alert error" role="alert">
                    <span>{message}</span>
                    <button class="ghost" onclick={on_dismiss}>{"Dismiss"}</button>
                </div>
            }
        </section>
    }
}

fn saved_item(
    index: usize,
    instance: &DemoState,
    active: bool,
    dispatch: &Dispatch<AppStore>,
) -> Html {
    let onclick = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            dispatch.reduce_mut(|store| {
                go_to_instance(store, index);
            });
        })
    };
    html! {
        <li class={classes!(active.then_some("active"))}>
            <button class="ghost" onclick={onclick}>
                {format!(
                    "{} / {} / {} / {} / {}",
                    instance.client_id,
                    instance.role.label(),
                    instance.theme_mode,
                    instance.scenario.title(),
                    instance.version.label(),
                )}
            </button>
        </li>
    }
}

fn select_field(
    label: &'static str,
    options: Vec<(String, String)>,
    current: &str,
    dispatch: &Dispatch<AppStore>,
    reducer: Reducer,
) -> Html {
    let onchange = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                dispatch.reduce_mut(|store| reducer(store, &value));
            }
        })
    };
    html! {
        <label class="field">
            <span>{label}</span>
            <select onchange={onchange}>
                {for options.into_iter().map(|(value, text)| {
                    let selected = value == current;
                    html! { <option value={value} selected={selected}>{text}</option> }
                })}
            </select>
        </label>
    }
}
