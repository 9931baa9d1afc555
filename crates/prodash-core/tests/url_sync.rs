use std::cell::RefCell;
use std::rc::Rc;

use prodash_core::{
    DemoContext, DemoStore, History, MemoryHistory, Role, Scenario, ThemeMode, UrlSync, Version,
};

#[test]
fn deep_link_loads_tenant_role_and_dark_branding() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/dashboard?clientId=cvs&role=ADMIN&theme=dark");
    let mut store = DemoStore::default();
    let report = UrlSync::new().mount(&mut history, &mut store)?;

    assert!(report.issues.is_empty());
    let state = store.state();
    assert_eq!(state.client_id.as_str(), "cvs");
    assert_eq!(state.role, Role::Admin);
    assert_eq!(state.theme_mode, ThemeMode::Dark);
    let tokens = store.context().tokens();
    assert_eq!(tokens.primary_color, "#dc4251");
    assert_eq!(tokens.secondary_color, "#5b85d6");
    assert_eq!(tokens.accent_color, "#fb923c");
    assert_eq!(tokens.background_color, "#f8fafc");
    assert_eq!(tokens.text_color, "#334155");
    Ok(())
}

#[test]
fn bare_path_gets_defaults_written_with_replace() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/dashboard");
    let mut store = DemoStore::default();
    let report = UrlSync::new().mount(&mut history, &mut store)?;

    assert!(report.changes.is_empty());
    assert_eq!(
        report.written.as_deref(),
        Some("/dashboard?clientId=deacons&role=merchant&theme=light&scenario=default&version=current")
    );
    assert_eq!(history.len(), 1);
    assert_eq!(history.replace_count(), 1);
    Ok(())
}

#[test]
fn repeated_theme_change_writes_once() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/");
    let mut store = DemoStore::default();
    let mut sync = UrlSync::new();
    sync.mount(&mut history, &mut store)?;
    let baseline = history.replace_count();

    for _ in 0..2 {
        if !store.set_theme_mode(ThemeMode::Dark).is_empty() {
            sync.note_change();
        }
        sync.flush(&mut history, store.context());
    }

    assert_eq!(history.replace_count(), baseline + 1);
    assert!(history.current_url().contains("theme=dark"));
    Ok(())
}

#[test]
fn rapid_changes_coalesce_into_one_write() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/campaigns");
    let mut store = DemoStore::default();
    let sync = Rc::new(RefCell::new(UrlSync::new()));
    sync.borrow_mut().mount(&mut history, &mut store)?;
    let baseline = history.replace_count();

    let scheduled = Rc::new(RefCell::new(0_u32));
    let (listener_sync, listener_scheduled) = (Rc::clone(&sync), Rc::clone(&scheduled));
    store.subscribe(move |_| {
        if listener_sync.borrow_mut().note_change() {
            *listener_scheduled.borrow_mut() += 1;
        }
    });

    store.set_client_id("cvs")?;
    store.set_role("support")?;
    store.set_scenario(Scenario::SupportFlow);
    let written = sync.borrow_mut().flush(&mut history, store.context());

    assert_eq!(*scheduled.borrow(), 1);
    assert_eq!(history.replace_count(), baseline + 1);
    assert_eq!(
        written.as_deref(),
        Some("/campaigns?clientId=cvs&role=support&theme=light&scenario=support-flow&version=current")
    );
    Ok(())
}

#[test]
fn invalid_tenant_mutation_leaves_state_and_url_untouched() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/?clientId=cvs");
    let mut store = DemoStore::default();
    let mut sync = UrlSync::new();
    sync.mount(&mut history, &mut store)?;
    let url = history.current_url();
    let before = store.snapshot();

    assert!(store.set_client_id("acme").is_err());
    assert_eq!(store.snapshot(), before);
    assert_eq!(sync.flush(&mut history, store.context()), None);
    assert_eq!(history.current_url(), url);
    Ok(())
}

#[test]
fn back_and_forward_apply_without_redundant_writes() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new(
        "/?clientId=deacons&role=merchant&theme=light&scenario=default&version=current",
    );
    let mut context = DemoContext::builtin();
    let mut sync = UrlSync::new();
    sync.mount(&mut history, &mut context)?;

    history.push(
        "/tokens?clientId=schwab&role=admin&theme=dark&scenario=token-management&version=current",
    );
    let report = sync.navigate(&mut history, &mut context)?;
    assert!(report.changes.tenant && report.changes.role && report.changes.theme);
    assert_eq!(report.written, None);
    assert_eq!(context.client_name(), "Charles Schwab");

    assert!(history.back());
    let report = sync.navigate(&mut history, &mut context)?;
    assert_eq!(context.state().role, Role::Merchant);
    assert_eq!(report.written, None);

    assert!(history.forward());
    sync.navigate(&mut history, &mut context)?;
    assert_eq!(context.state().scenario, Scenario::TokenManagement);
    assert_eq!(history.replace_count(), 0);
    Ok(())
}

#[test]
fn navigation_without_demo_params_keeps_store_state() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/?clientId=cvs&role=support&theme=dark&scenario=support-flow&version=upcoming");
    let mut context = DemoContext::builtin();
    let mut sync = UrlSync::new();
    sync.mount(&mut history, &mut context)?;

    history.push("/members?tab=vip");
    let report = sync.navigate(&mut history, &mut context)?;
    assert!(report.changes.is_empty());
    assert_eq!(context.state().client_id.as_str(), "cvs");
    assert_eq!(
        history.current_url(),
        "/members?clientId=cvs&role=support&theme=dark&scenario=support-flow&version=upcoming&tab=vip"
    );

    let again = sync.navigate(&mut history, &mut context)?;
    assert_eq!(again.written, None);
    Ok(())
}

#[test]
fn legacy_links_are_rewritten_to_canonical_form() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/?role=support&client=deacons-pizza&scenario=support-flow");
    let mut context = DemoContext::builtin();
    let report = UrlSync::new().mount(&mut history, &mut context)?;

    assert!(report.issues.is_empty());
    assert_eq!(context.state().client_id.as_str(), "deacons");
    assert_eq!(
        history.current_url(),
        "/?clientId=deacons&role=support&theme=light&scenario=support-flow&version=current"
    );
    Ok(())
}

#[test]
fn unknown_url_values_fall_back_to_defaults() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/?clientId=acme&role=owner&theme=dark");
    let mut context = DemoContext::builtin();
    let report = UrlSync::new().mount(&mut history, &mut context)?;

    assert_eq!(report.issues.len(), 2);
    assert_eq!(context.state().client_id.as_str(), "deacons");
    assert_eq!(context.state().role, Role::Merchant);
    assert_eq!(context.state().theme_mode, ThemeMode::Dark);
    Ok(())
}

#[test]
fn back_to_a_role_only_url_keeps_tenant_and_theme() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/x?role=admin");
    let mut store = DemoStore::default();
    let mut sync = UrlSync::new();
    sync.mount(&mut history, &mut store)?;
    history.push("/y");
    sync.navigate(&mut history, &mut store)?;

    if !store.set_client_id("cvs")?.is_empty() {
        sync.note_change();
    }
    store.set_theme_mode(ThemeMode::Dark);
    sync.flush(&mut history, store.context());
    let writes = sync.writes();

    assert!(history.back());
    assert_eq!(history.current_url(), "/x?clientId=deacons&role=admin&theme=light&scenario=default&version=current");
    history.push("/x?role=support");
    let report = sync.navigate(&mut history, &mut store)?;

    assert!(report.changes.role && !report.changes.tenant && !report.changes.theme);
    assert_eq!(store.state().client_id.as_str(), "cvs");
    assert_eq!(store.state().theme_mode, ThemeMode::Dark);
    assert_eq!(store.context().tokens().primary_color, "#dc4251");
    assert_eq!(
        report.written.as_deref(),
        Some("/x?clientId=cvs&role=support&theme=dark&scenario=default&version=current")
    );
    assert_eq!(sync.writes(), writes + 1);
    Ok(())
}

#[test]
fn version_deep_link_is_applied_and_saved() -> anyhow::Result<()> {
    let mut history = MemoryHistory::new("/?clientId=seven-eleven&version=Experimental");
    let mut store = DemoStore::default();
    UrlSync::new().mount(&mut history, &mut store)?;

    assert_eq!(store.state().version, Version::Experimental);
    assert_eq!(store.context().client_name(), "7-Eleven");
    assert_eq!(
        history.current_url(),
        "/?clientId=seven-eleven&role=merchant&theme=light&scenario=default&version=experimental"
    );
    assert!(store.save_current_instance());
    assert!(!store.save_current_instance());
    Ok(())
}
