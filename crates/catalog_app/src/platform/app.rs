use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use catalog_core::{update, Catalog, CatalogState, Msg};
use catalog_logging::{catalog_info, catalog_warn};
use catalog_source::load_catalog;

use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::logging::{self, LogDestination};
use super::render::render;

const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::from_env());

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: catalog_app <catalog-file.ron|json>");
    };
    let catalog =
        load_catalog(&path).with_context(|| format!("loading catalog {}", path.display()))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut app = App::new(Arc::new(catalog), DEFAULT_VIEWPORT_WIDTH);
    app.run(stdin.lock(), &mut stdout.lock())?;
    Ok(())
}

struct App {
    state: CatalogState,
    effects: EffectRunner,
}

impl App {
    fn new(catalog: Arc<Catalog>, viewport_width: u32) -> Self {
        catalog_info!(
            "Mounting catalog `{}` at width {}",
            catalog.name(),
            viewport_width
        );
        Self {
            state: CatalogState::new(catalog, viewport_width),
            effects: EffectRunner::default(),
        }
    }

    fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> io::Result<()> {
        self.render(out)?;
        for line in input.lines() {
            match parse_command(&line?) {
                Ok(Command::Dispatch(msg)) => {
                    if self.dispatch_msg(msg) {
                        self.render(out)?;
                    }
                }
                Ok(Command::Help) => writeln!(out, "{HELP}")?,
                Ok(Command::Quit) => break,
                Err(err) => {
                    catalog_warn!("Rejected input: {}", err);
                    writeln!(out, "error: {err}")?;
                }
            }
        }
        Ok(())
    }

    /// Runs one message through the core. Returns whether a render is due.
    fn dispatch_msg(&mut self, msg: Msg) -> bool {
        let state = self.state.clone();
        let (state, effects) = update(state, msg);
        self.state = state;
        self.effects.apply(effects);
        self.state.consume_dirty()
    }

    fn render(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", render(&self.state.view()))?;
        if self.effects.scroll_locked() {
            writeln!(out, "(page scroll locked)")?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{
        CatalogConfig, CatalogItem, CategorySet, DefaultCategory, ItemsPerPage, PartialDate,
    };

    fn catalog() -> Arc<Catalog> {
        let config = CatalogConfig::new("Talks", CategorySet::new(["Meetup", "Podcast"], true))
            .with_default_category(DefaultCategory::All)
            .with_items_per_page(ItemsPerPage::Fixed(2));
        let items = vec![
            CatalogItem::new("a", "Meetup", "Rust Intro")
                .with_date(PartialDate::parse("March 2024").unwrap()),
            CatalogItem::new("b", "Podcast", "Async Talk")
                .with_date(PartialDate::parse("Jan 2024").unwrap()),
            CatalogItem::new("c", "Meetup", "Old Talk")
                .with_date(PartialDate::parse("December 2023").unwrap()),
        ];
        Arc::new(Catalog::new(config, items).unwrap())
    }

    fn session(input: &str) -> String {
        let mut app = App::new(catalog(), 1280);
        let mut out = Vec::new();
        app.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_initial_view_and_pages_forward() {
        let text = session("next\nquit\nnext\n");
        let renders: Vec<&str> = text.matches("== Talks ==").collect();
        assert_eq!(renders.len(), 2);
        assert!(text.contains("page 1/2, 3 items"), "{text}");
        assert!(text.contains("page 2/2, 3 items"), "{text}");
    }

    #[test]
    fn noop_input_does_not_rerender() {
        let text = session("\nprev\n");
        assert_eq!(text.matches("== Talks ==").count(), 1, "{text}");
    }

    #[test]
    fn preview_locks_scroll_until_closed() {
        let text = session("open b\nclose\n");
        assert!(text.contains("preview: Async Talk"), "{text}");
        assert_eq!(text.matches("(page scroll locked)").count(), 1, "{text}");
    }

    #[test]
    fn bad_input_is_reported_and_ignored() {
        let text = session("fly away\n");
        assert!(text.contains("error: unknown command `fly`"), "{text}");
    }
}
