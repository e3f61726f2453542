use room_core::scene::furniture;
use room_core::{InfoPanel, Registry};

#[test]
fn starts_closed_and_hidden() {
    let panel = InfoPanel::new();
    assert!(!panel.is_open());
    assert_eq!(panel.aria_hidden(), "true");
    assert!(panel.is_inert());
    assert!(panel.content().is_none());
}

#[test]
fn click_with_nothing_hovered_is_a_no_op() {
    let registry = Registry::with_items(furniture());
    let mut panel = InfoPanel::new();
    assert!(panel.click(None, &registry).is_none());
    assert!(!panel.is_open());
    assert_eq!(panel, InfoPanel::new());
}

#[test]
fn click_opens_with_item_content() {
    let registry = Registry::with_items(furniture());
    let shelf = registry.find("shelf");
    let mut panel = InfoPanel::new();

    let content = panel.click(shelf, &registry).unwrap().clone();
    assert_eq!(content.title, "三層書櫃");
    assert_eq!(content.link.as_deref(), Some("#shelf"));
    assert!(panel.is_open());
    assert_eq!(panel.shown_item(), shelf);
    assert_eq!(panel.aria_hidden(), "false");
    assert!(!panel.is_inert());
}

#[test]
fn empty_click_keeps_panel_open() {
    let registry = Registry::with_items(furniture());
    let mut panel = InfoPanel::new();
    panel.click(registry.find("desk"), &registry);
    assert!(panel.click(None, &registry).is_none());
    assert!(panel.is_open());
    assert_eq!(panel.shown_item(), registry.find("desk"));
}

#[test]
fn click_on_another_item_replaces_content() {
    let registry = Registry::with_items(furniture());
    let mut panel = InfoPanel::new();
    panel.click(registry.find("desk"), &registry);
    panel.click(registry.find("bed"), &registry);
    assert!(panel.is_open());
    let content = panel.content().unwrap();
    assert_eq!(content.title, "雙人床");
    assert_eq!(content.link, None);
}

#[test]
fn close_only_reports_a_real_transition() {
    let registry = Registry::with_items(furniture());
    let mut panel = InfoPanel::new();
    assert!(!panel.close());

    panel.click(registry.find("tank"), &registry);
    assert!(panel.close());
    assert!(!panel.is_open());
    assert_eq!(panel.aria_hidden(), "true");
    assert!(panel.is_inert());
    assert!(!panel.close());
}

#[test]
fn reopening_never_shows_stale_content() {
    let registry = Registry::with_items(furniture());
    let mut panel = InfoPanel::new();

    panel.click(registry.find("desk"), &registry);
    panel.close();
    let content = panel.click(registry.find("bed"), &registry).unwrap();
    assert_eq!(content.title, "雙人床");
    assert_eq!(content.text, "150×190cm，靠右牆。");
    assert_eq!(content.link, None);
}
