mod direction;
mod frontier;
mod itinerary_enumerator;
mod partial_node;
mod search_bounds;
mod search_config;

pub use direction::Direction;
pub use frontier::Frontier;
pub use itinerary_enumerator::ItineraryEnumerator;
pub use partial_node::{FrontierKey, NodeId, PartialNode};
pub use search_bounds::SearchBounds;
pub use search_config::SearchConfig;
