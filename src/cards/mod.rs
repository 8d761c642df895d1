//! Mutation cards: definitions, the catalog, active cards, and the registry.
//!
//! ## Key Types
//!
//! - `CardKind`: the six catalog cards
//! - `CardDefinition`: static card data plus its selection and effect functions
//! - `ActiveCard`: the stage-based selection state machine for a drawn card
//! - `CardRegistry`: the drawable cards and draw-eligibility filtering

pub mod catalog;
pub mod definition;
pub mod instance;
pub mod registry;

pub use catalog::CardKind;
pub use definition::{CardDefinition, SelectTarget, Selection, SelectionContext};
pub use instance::{ActiveCard, SelectionOutcome};
pub use registry::CardRegistry;
