use crate::SectionId;

/// Instructions for the host. The core never performs them itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Lock or release scrolling of the page behind an overlay or menu.
    SetScrollLock { locked: bool },
    /// Scroll the page so that `section` is in view.
    ScrollToSection { section: SectionId },
}
