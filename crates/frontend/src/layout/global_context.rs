use crate::shared::dom;
use contracts::domain::a001_spice::Catalog;
use contracts::shared::config::StoreConfig;
use contracts::usecases::u002_storefront::{StoreCommand, StoreEffect, Storefront};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Page-wide state, provided once from `App` and copied into handlers.
#[derive(Clone, Copy)]
pub struct StoreContext {
    pub store: RwSignal<Storefront>,
    pub scroll_y: RwSignal<f64>,
    pub cart_bump: RwSignal<bool>,
    bump_seq: StoredValue<u64>,
}

impl StoreContext {
    pub fn new() -> Self {
        let catalog = Catalog::embedded().unwrap_or_else(|e| {
            log::error!("Catalog failed to load: {:#}", e);
            Catalog {
                categories: Vec::new(),
                cards: Vec::new(),
            }
        });

        Self {
            store: RwSignal::new(Storefront::new(catalog, StoreConfig::load())),
            scroll_y: RwSignal::new(dom::scroll_y()),
            cart_bump: RwSignal::new(false),
            bump_seq: StoredValue::new(0),
        }
    }

    /// Track window scroll for the header and the parallax layer
    pub fn init_scroll_tracking(&self) {
        let scroll_y = self.scroll_y;
        dom::add_window_listener("scroll", move |_| {
            scroll_y.set(dom::scroll_y());
        });
    }

    pub fn config(&self) -> StoreConfig {
        self.store.with_untracked(|s| s.config().clone())
    }

    /// Run a command against the store and carry out its effects
    pub fn dispatch(&self, command: StoreCommand) {
        log::trace!("dispatch {:?}", command);
        match self.store.try_update(|s| s.handle(command)) {
            Some(Ok(effects)) => {
                for effect in effects {
                    self.run_effect(effect);
                }
            }
            Some(Err(e)) => {
                log::warn!("cart: {}", e);
                let notice = self
                    .store
                    .with_untracked(|s| s.config().order.weight_required_notice.clone());
                dom::alert(&notice);
            }
            None => log::error!("store disposed, command dropped"),
        }
    }

    fn run_effect(&self, effect: StoreEffect) {
        match effect {
            StoreEffect::ScheduleTransition {
                card,
                ticket,
                delay_ms,
            } => {
                let this = *self;
                spawn_local(async move {
                    TimeoutFuture::new(delay_ms).await;
                    this.dispatch(StoreCommand::CompleteTransition { card, ticket });
                });
            }
            StoreEffect::BumpCart { duration_ms } => {
                let seq = self.bump_seq.get_value() + 1;
                self.bump_seq.set_value(seq);
                self.cart_bump.set(true);

                let this = *self;
                spawn_local(async move {
                    TimeoutFuture::new(duration_ms).await;
                    // a newer bump owns the flag now
                    if this.bump_seq.get_value() == seq {
                        this.cart_bump.set(false);
                    }
                });
            }
            StoreEffect::OpenUrl(url) => dom::open_in_new_tab(&url),
        }
    }
}
