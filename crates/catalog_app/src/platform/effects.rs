use catalog_core::Effect;
use catalog_logging::catalog_info;

/// Applies core effects to the terminal host. There is no page to scroll, so
/// the runner only tracks the lock for the status line.
#[derive(Debug, Default)]
pub struct EffectRunner {
    scroll_locked: bool,
}

impl EffectRunner {
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn apply(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SetScrollLock { locked } => {
                    catalog_info!("SetScrollLock locked={}", locked);
                    self.scroll_locked = locked;
                }
                Effect::ScrollToSection { section } => {
                    catalog_info!("ScrollToSection section={}", section);
                }
            }
        }
    }
}
