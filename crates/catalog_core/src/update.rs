use catalog_logging::catalog_trace;

use crate::state::PreviewChange;
use crate::{CatalogState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CatalogState, msg: Msg) -> (CatalogState, Vec<Effect>) {
    catalog_trace!("Catalog `{}` <- {:?}", state.catalog().name(), msg);
    let effects = match msg {
        Msg::CategorySelected(selection) => {
            state.select_category(selection);
            Vec::new()
        }
        Msg::PageRequested(page) => {
            state.go_to_page(page);
            Vec::new()
        }
        Msg::NextPage => {
            state.next_page();
            Vec::new()
        }
        Msg::PreviousPage => {
            state.previous_page();
            Vec::new()
        }
        Msg::ViewportResized { width } => {
            state.resize(width);
            Vec::new()
        }
        Msg::ItemActivated(id) => match state.open_preview(id) {
            // Replacing an open preview keeps the page locked; only Idle -> Open locks.
            PreviewChange::Opened => vec![Effect::SetScrollLock { locked: true }],
            PreviewChange::Replaced | PreviewChange::Unchanged | PreviewChange::Rejected => {
                Vec::new()
            }
        },
        Msg::PreviewDismissed(_reason) => {
            if state.close_preview() {
                vec![Effect::SetScrollLock { locked: false }]
            } else {
                Vec::new()
            }
        }
        Msg::DetailsToggled(id) => {
            state.toggle_details(id);
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
