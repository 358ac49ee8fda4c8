//! Navigation bar state: which page section is active, and the mobile menu.
//!
//! The active section is derived from the scroll offset alone, so it can be
//! computed without a browser by [`active_section`].

use std::fmt;

use catalog_logging::{catalog_debug, catalog_warn};

use crate::Effect;

/// Distance below the viewport top (px) at which a section counts as reached.
/// Covers the sticky header.
pub const SCROLL_OFFSET_PX: u32 = 100;

/// Anchor id of a page section, e.g. `certifications` for the "Certifications" item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SectionId(String);

impl SectionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Section anchor for a navigation label: the label lowercased.
    pub fn from_label(label: &str) -> Self {
        Self(label.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Top edge of a rendered section, in page coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionOffset {
    pub id: SectionId,
    pub top: u32,
}

impl SectionOffset {
    pub fn new(id: impl Into<String>, top: u32) -> Self {
        Self {
            id: SectionId::new(id),
            top,
        }
    }
}

/// The last section, in page order, whose top is at or above
/// `scroll_y + SCROLL_OFFSET_PX`. `None` when no section has been reached.
pub fn active_section(scroll_y: u32, sections: &[SectionOffset]) -> Option<&SectionId> {
    let probe = scroll_y.saturating_add(SCROLL_OFFSET_PX);
    sections
        .iter()
        .rev()
        .find(|section| section.top <= probe)
        .map(|section| &section.id)
}

/// Section highlighted when the page loads: the URL fragment if it names a
/// known section, otherwise the first section on the home page.
pub fn initial_section(hash: &str, sections: &[SectionId], is_home: bool) -> Option<SectionId> {
    let fragment = hash.trim_start_matches('#').to_lowercase();
    if let Some(section) = sections.iter().find(|s| s.as_str() == fragment) {
        return Some(section.clone());
    }
    if is_home {
        sections.first().cloned()
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavMsg {
    /// Host measured the section positions (on mount or after layout changes)
    /// while the page sat at `scroll_y`.
    SectionsMeasured {
        offsets: Vec<SectionOffset>,
        scroll_y: u32,
    },
    /// Page scrolled to `y`.
    Scrolled { y: u32 },
    /// User clicked a navigation item.
    ItemClicked(SectionId),
    /// User opened or closed the mobile menu.
    MenuToggled,
    NoOp,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    items: Vec<NavItem>,
    offsets: Vec<SectionOffset>,
    active: Option<SectionId>,
    menu_open: bool,
    is_home: bool,
    dirty: bool,
}

impl NavState {
    pub fn new<'a>(labels: impl IntoIterator<Item = &'a str>, hash: &str, is_home: bool) -> Self {
        let items: Vec<NavItem> = labels
            .into_iter()
            .map(|label| NavItem {
                id: SectionId::from_label(label),
                label: label.to_string(),
            })
            .collect();
        let ids: Vec<SectionId> = items.iter().map(|item| item.id.clone()).collect();
        Self {
            active: initial_section(hash, &ids, is_home),
            items,
            offsets: Vec::new(),
            menu_open: false,
            is_home,
            dirty: false,
        }
    }

    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn view(&self) -> NavViewModel {
        NavViewModel {
            items: self
                .items
                .iter()
                .map(|item| NavItemView {
                    id: item.id.clone(),
                    label: item.label.clone(),
                    active: self.active.as_ref() == Some(&item.id),
                })
                .collect(),
            menu_open: self.menu_open,
            dirty: self.dirty,
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn knows(&self, id: &SectionId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    /// Highlights the section reached at `scroll_y`. Only the home page
    /// follows the scroll position.
    fn highlight_at(&mut self, scroll_y: u32) {
        let reached = active_section(scroll_y, &self.offsets).cloned();
        match reached {
            Some(id) if self.is_home => self.set_active(id),
            _ => {}
        }
    }

    fn set_active(&mut self, id: SectionId) {
        if self.active.as_ref() != Some(&id) {
            catalog_debug!("Active section -> {}", id);
            self.active = Some(id);
            self.dirty = true;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavViewModel {
    pub items: Vec<NavItemView>,
    pub menu_open: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItemView {
    pub id: SectionId,
    pub label: String,
    pub active: bool,
}

/// Pure update function for the navigation bar.
pub fn update_nav(mut state: NavState, msg: NavMsg) -> (NavState, Vec<Effect>) {
    let effects = match msg {
        NavMsg::SectionsMeasured { offsets, scroll_y } => {
            // Sections missing from the page are simply not measured.
            let known: Vec<SectionOffset> = offsets
                .into_iter()
                .filter(|offset| state.knows(&offset.id))
                .collect();
            state.offsets = known;
            state.highlight_at(scroll_y);
            Vec::new()
        }
        NavMsg::Scrolled { y } => {
            state.highlight_at(y);
            Vec::new()
        }
        NavMsg::ItemClicked(id) => {
            if !state.knows(&id) {
                catalog_warn!("Ignoring click on unknown section `{}`", id);
                return (state, Vec::new());
            }
            let mut effects = Vec::with_capacity(2);
            if state.menu_open {
                state.menu_open = false;
                state.dirty = true;
                effects.push(Effect::SetScrollLock { locked: false });
            }
            state.set_active(id.clone());
            effects.push(Effect::ScrollToSection { section: id });
            effects
        }
        NavMsg::MenuToggled => {
            state.menu_open = !state.menu_open;
            state.dirty = true;
            vec![Effect::SetScrollLock {
                locked: state.menu_open,
            }]
        }
        NavMsg::NoOp => Vec::new(),
    };

    (state, effects)
}
