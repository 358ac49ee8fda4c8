use catalog_core::nav::{
    active_section, initial_section, update_nav, NavMsg, NavState, SectionId, SectionOffset,
};
use catalog_core::Effect;

const NAV_ITEMS: [&str; 5] = ["About", "Skills", "Projects", "Certifications", "Contact"];

fn offsets() -> Vec<SectionOffset> {
    vec![
        SectionOffset::new("about", 0),
        SectionOffset::new("skills", 600),
        SectionOffset::new("projects", 1400),
        SectionOffset::new("certifications", 2300),
        SectionOffset::new("contact", 3000),
    ]
}

fn measured(offsets: Vec<SectionOffset>, scroll_y: u32) -> NavMsg {
    NavMsg::SectionsMeasured { offsets, scroll_y }
}

fn home() -> NavState {
    let state = NavState::new(NAV_ITEMS, "", true);
    let (state, _) = update_nav(state, measured(offsets(), 0));
    state
}

fn active_label(state: &NavState) -> Option<&str> {
    state.active().map(SectionId::as_str)
}

#[test]
fn active_section_is_last_section_reached() {
    let sections = offsets();
    let at = |y| active_section(y, &sections).map(SectionId::as_str);

    assert_eq!(at(0), Some("about"));
    assert_eq!(at(499), Some("about"));
    assert_eq!(at(500), Some("skills"));
    assert_eq!(at(1299), Some("skills"));
    assert_eq!(at(1300), Some("projects"));
    assert_eq!(at(u32::MAX), Some("contact"));
}

#[test]
fn no_section_reached_yields_none() {
    let sections = vec![SectionOffset::new("about", 400)];
    assert_eq!(active_section(0, &sections), None);
    assert_eq!(active_section(1000, &[]), None);
}

#[test]
fn initial_section_prefers_known_hash() {
    let ids: Vec<SectionId> = NAV_ITEMS.iter().map(|l| SectionId::from_label(l)).collect();

    assert_eq!(
        initial_section("#certifications", &ids, true),
        Some(SectionId::new("certifications"))
    );
    assert_eq!(
        initial_section("#Contact", &ids, false),
        Some(SectionId::new("contact"))
    );
    assert_eq!(initial_section("", &ids, true), Some(SectionId::new("about")));
    assert_eq!(initial_section("#nowhere", &ids, true), Some(SectionId::new("about")));
    assert_eq!(initial_section("", &ids, false), None);
}

#[test]
fn scrolling_moves_the_highlight() {
    let state = home();
    assert_eq!(active_label(&state), Some("about"));

    let (mut state, effects) = update_nav(state, NavMsg::Scrolled { y: 2250 });
    assert!(effects.is_empty());
    assert_eq!(active_label(&state), Some("certifications"));
    assert!(state.consume_dirty());

    let (mut state, _) = update_nav(state, NavMsg::Scrolled { y: 2260 });
    assert!(!state.consume_dirty());

    let view = state.view();
    let active: Vec<&str> = view
        .items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.label.as_str())
        .collect();
    assert_eq!(active, vec!["Certifications"]);
}

#[test]
fn measuring_applies_the_current_scroll_position() {
    let state = NavState::new(NAV_ITEMS, "", true);
    assert_eq!(active_label(&state), Some("about"));

    let (mut state, effects) = update_nav(state, measured(offsets(), 1350));
    assert!(effects.is_empty());
    assert_eq!(active_label(&state), Some("projects"));
    assert!(state.consume_dirty());
}

#[test]
fn scrolling_above_every_section_keeps_previous_highlight() {
    let state = NavState::new(NAV_ITEMS, "#projects", true);
    let (state, _) = update_nav(
        state,
        measured(vec![SectionOffset::new("projects", 900)], 0),
    );
    let (state, _) = update_nav(state, NavMsg::Scrolled { y: 0 });
    assert_eq!(active_label(&state), Some("projects"));
}

#[test]
fn unmeasured_or_unknown_sections_are_ignored() {
    let state = NavState::new(NAV_ITEMS, "", true);
    let (state, _) = update_nav(
        state,
        measured(
            vec![
                SectionOffset::new("about", 0),
                SectionOffset::new("blog", 500),
            ],
            0,
        ),
    );
    let (state, _) = update_nav(state, NavMsg::Scrolled { y: 900 });
    assert_eq!(active_label(&state), Some("about"));
}

#[test]
fn scrolling_off_the_home_page_does_nothing() {
    let state = NavState::new(NAV_ITEMS, "", false);
    let (state, _) = update_nav(state, measured(offsets(), 2500));
    assert_eq!(state.active(), None);
    let (state, _) = update_nav(state, NavMsg::Scrolled { y: 2500 });
    assert_eq!(state.active(), None);
}

#[test]
fn menu_toggle_locks_and_unlocks_scroll() {
    let (state, effects) = update_nav(home(), NavMsg::MenuToggled);
    assert!(state.menu_open());
    assert_eq!(effects, vec![Effect::SetScrollLock { locked: true }]);

    let (state, effects) = update_nav(state, NavMsg::MenuToggled);
    assert!(!state.menu_open());
    assert_eq!(effects, vec![Effect::SetScrollLock { locked: false }]);
}

#[test]
fn clicking_an_item_closes_menu_and_scrolls() {
    let (state, _) = update_nav(home(), NavMsg::MenuToggled);
    let (state, effects) = update_nav(state, NavMsg::ItemClicked(SectionId::new("contact")));

    assert!(!state.menu_open());
    assert_eq!(active_label(&state), Some("contact"));
    assert_eq!(
        effects,
        vec![
            Effect::SetScrollLock { locked: false },
            Effect::ScrollToSection {
                section: SectionId::new("contact")
            },
        ]
    );

    let (state, effects) = update_nav(state, NavMsg::ItemClicked(SectionId::new("skills")));
    assert_eq!(
        effects,
        vec![Effect::ScrollToSection {
            section: SectionId::new("skills")
        }]
    );
    assert_eq!(active_label(&state), Some("skills"));
}

#[test]
fn clicking_unknown_item_is_ignored() {
    let before = home();
    let (after, effects) = update_nav(before.clone(), NavMsg::ItemClicked(SectionId::new("blog")));
    assert!(effects.is_empty());
    assert_eq!(before, after);
}
