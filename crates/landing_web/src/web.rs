use std::cell::RefCell;
use std::rc::Rc;

use landing::{Effect, PageConfig, PageController, PageError};
use leptos::prelude::document;
use tracing::{debug, error, info, warn};

mod config;
mod effects;
mod elements;
mod listeners;
mod logging;
mod probe;
mod timer;

use config::ConfigSource;
use elements::PageElements;
use timer::SubmitTimers;

/// Everything the bound listeners share. Held in one `Rc` for the life of the
/// page; the listeners are leaked into the JS heap with it.
pub(super) struct Page {
    pub(super) config: PageConfig,
    pub(super) controller: RefCell<PageController>,
    pub(super) elements: PageElements,
    pub(super) timers: RefCell<SubmitTimers>,
}

impl Page {
    /// Runs one controller handler, then applies what it returned. The
    /// controller borrow ends before any effect touches the DOM.
    pub(super) fn dispatch(
        self: &Rc<Self>,
        event: Option<&web_sys::Event>,
        handler: impl FnOnce(&mut PageController) -> Vec<Effect>,
    ) {
        let out = {
            let mut controller = self.controller.borrow_mut();
            handler(&mut controller)
        };
        effects::apply(self, event, out);
    }
}

pub fn start() {
    let doc = document();
    if doc.ready_state() == "loading" {
        let target: &web_sys::EventTarget = doc.as_ref();
        if let Err(e) = listeners::listen(target, "DOMContentLoaded", move |_ev| boot()) {
            // Logging is not up yet; fall back to the console directly.
            web_sys::console::error_1(&e.to_string().into());
        }
    } else {
        boot();
    }
}

fn boot() {
    let doc = document();
    let (cfg, source) = config::load_page_config(&doc);
    logging::init(cfg.log_level);

    match source {
        ConfigSource::Defaults => debug!("no page config block; using defaults"),
        ConfigSource::Page => debug!("loaded page config from #{}", config::CONFIG_ELEMENT_ID),
        ConfigSource::Fallback(e) => warn!("ignoring page config: {e}"),
    }

    match mount(cfg) {
        Ok(page) => info!(
            "landing page wired: {} nav links, contact form {}",
            page.elements.nav_links.len(),
            if page.elements.form.is_some() { "bound" } else { "absent" }
        ),
        Err(e) => error!("landing page not wired: {e}"),
    }
}

fn mount(cfg: PageConfig) -> Result<Rc<Page>, PageError> {
    let elements = PageElements::find(&document(), &cfg)?;
    let controller = PageController::new(cfg.clone());
    let init = controller.init_effects();

    let page = Rc::new(Page {
        config: cfg,
        controller: RefCell::new(controller),
        elements,
        timers: RefCell::new(SubmitTimers::default()),
    });

    effects::apply(&page, None, init);
    listeners::bind_all(&page)?;
    Ok(page)
}
