//! Adapter Gateways - concrete repository implementations

pub mod placement_gateway;

pub use placement_gateway::FilePlacementGateway;
