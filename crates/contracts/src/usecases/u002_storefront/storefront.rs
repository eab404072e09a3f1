use super::command::StoreCommand;
use super::effect::StoreEffect;
use crate::domain::a001_spice::{Catalog, SpiceId};
use crate::domain::a002_cart::CartManager;
use crate::projections::p001_catalog_visibility::{CardPhase, CardVisibility, FilterState};
use crate::shared::config::StoreConfig;
use crate::shared::error::CartError;
use crate::usecases::u001_place_order::{compose_message, order_url};

/// Whole page state: filter, per-card fade phase, cart and modal flags.
#[derive(Debug, Clone)]
pub struct Storefront {
    config: StoreConfig,
    catalog: Catalog,
    filter: FilterState,
    visibility: Vec<CardVisibility>,
    cart: CartManager,
    cart_open: bool,
}

impl Storefront {
    pub fn new(catalog: Catalog, config: StoreConfig) -> Self {
        let visibility = vec![CardVisibility::default(); catalog.len()];
        Self {
            config,
            catalog,
            filter: FilterState::new(),
            visibility,
            cart: CartManager::new(),
            cart_open: false,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn cart(&self) -> &CartManager {
        &self.cart
    }

    pub fn phase(&self, id: SpiceId) -> CardPhase {
        self.visibility
            .get(id.index())
            .map(|v| v.phase())
            .unwrap_or(CardPhase::Hidden)
    }

    pub fn weight_modal_open(&self) -> bool {
        self.cart.is_selecting()
    }

    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// Apply one command.
    ///
    /// The only failure is confirming without a weight; state is untouched then.
    pub fn handle(&mut self, command: StoreCommand) -> Result<Vec<StoreEffect>, CartError> {
        let mut effects = Vec::new();
        match command {
            StoreCommand::SelectCategory(category) => {
                self.filter.set_category(category);
                self.refilter(&mut effects);
            }
            StoreCommand::Search(term) => {
                self.filter.set_search_term(&term);
                self.refilter(&mut effects);
            }
            StoreCommand::PickSpice(id) => {
                if let Some(card) = self.catalog.get(id) {
                    self.cart.begin_selection(card);
                }
            }
            StoreCommand::ChoosePreset(token) => self.cart.choose_preset(&token),
            StoreCommand::EnterCustomWeight(raw) => self.cart.enter_custom_weight(&raw),
            StoreCommand::ConfirmSelection => {
                self.cart.confirm()?;
                self.cart_open = false;
                effects.push(StoreEffect::BumpCart {
                    duration_ms: self.config.motion.bump_ms,
                });
            }
            StoreCommand::OpenCart => self.cart_open = true,
            StoreCommand::CloseModals => {
                self.cart.cancel_selection();
                self.cart_open = false;
            }
            StoreCommand::RemoveItem(id) => self.cart.remove(id),
            StoreCommand::ClearCart => self.cart.clear(),
            StoreCommand::SendOrder => {
                if let Some(message) = compose_message(self.cart.cart(), &self.config.order.preamble)
                {
                    let url = order_url(&self.config.order, &message);
                    log::info!("order: sending {} item(s)", self.cart.cart().len());
                    effects.push(StoreEffect::OpenUrl(url));
                }
            }
            StoreCommand::CompleteTransition { card, ticket } => {
                if let Some(v) = self.visibility.get_mut(card.index()) {
                    v.complete(ticket);
                }
            }
        }
        Ok(effects)
    }

    fn refilter(&mut self, effects: &mut Vec<StoreEffect>) {
        let motion = self.config.motion;
        for (card, v) in self.catalog.cards.iter().zip(self.visibility.iter_mut()) {
            let visible = self.filter.admits(card);
            if let Some(ticket) = v.set_target(visible) {
                effects.push(StoreEffect::ScheduleTransition {
                    card: card.id,
                    ticket,
                    delay_ms: if visible {
                        motion.show_delay_ms
                    } else {
                        motion.hide_delay_ms
                    },
                });
            }
        }
    }
}
