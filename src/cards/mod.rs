//! Card system: definitions, records, lookup.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card data, shared as `CardRef`
//! - `CardRecord`: Untyped external record, validated into a `Card`
//! - `CardSource`: Injected name lookup capability
//! - `CardRegistry`: In-memory `CardSource`
//! - `ApiCardSource`: HTTP `CardSource`
//! - `Layered`: Local source with a fallback for misses

pub mod api;
pub mod catalog;
pub mod definition;
pub mod record;
pub mod registry;
pub mod source;

pub use definition::{total_power, Card, CardId, CardRef, Stats, BASIC, CREATURE, LAND, TOKEN};
pub use api::{ApiCardSource, DEFAULT_API_URL};
pub use record::CardRecord;
pub use registry::CardRegistry;
pub use source::{cards_from_records, load_cards_json, parse_cards_json, CardSource, Layered};
