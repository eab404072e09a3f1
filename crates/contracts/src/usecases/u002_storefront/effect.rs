use crate::domain::a001_spice::SpiceId;
use crate::projections::p001_catalog_visibility::PhaseTicket;

/// Side effects the frontend has to carry out after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEffect {
    /// Send `CompleteTransition { card, ticket }` back after `delay_ms`
    ScheduleTransition {
        card: SpiceId,
        ticket: PhaseTicket,
        delay_ms: u32,
    },
    /// Play the add-to-cart acknowledgement on the cart button
    BumpCart { duration_ms: u32 },
    /// Open the messaging link in a new tab
    OpenUrl(String),
}
