use crate::{CategorySelection, ItemId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User clicked a category button.
    CategorySelected(CategorySelection),
    /// User clicked a numbered page button. Out-of-range pages are clamped.
    PageRequested(i64),
    /// User clicked Next.
    NextPage,
    /// User clicked Previous.
    PreviousPage,
    /// Host viewport width changed.
    ViewportResized { width: u32 },
    /// User activated an item card to open its preview.
    ItemActivated(ItemId),
    /// User dismissed the preview overlay.
    PreviewDismissed(DismissReason),
    /// User toggled the long-form details of an item.
    DetailsToggled(ItemId),
    /// Fallback for placeholder wiring.
    NoOp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Backdrop,
    CloseButton,
    Escape,
}
