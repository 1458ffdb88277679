//! Built-in widgets.
//!
//! Two component types ship with the crate, both leaves on the shared
//! component model:
//!
//! - [`flight_card`] - attribute-driven flight summary card
//! - [`search_card`] - static search ticket with an event-bridged input
//!
//! Each module exposes its `TAG` and a `define()` that registers the
//! type with [`crate::registry`].

pub mod flight_card;
pub mod search_card;

use crate::error::RegistryError;

/// Register both built-in widget types.
pub fn define_all() -> Result<(), RegistryError> {
    flight_card::define()?;
    search_card::define()?;
    Ok(())
}
