use std::sync::Arc;

use catalog_core::{update, Catalog, CatalogConfig, CatalogState, Msg};

#[test]
fn update_is_noop() {
    let catalog = Arc::new(Catalog::new(CatalogConfig::certifications(), Vec::new()).unwrap());
    let state = CatalogState::new(catalog, 1280);
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
