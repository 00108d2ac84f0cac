/// Prefix shared by every agent detail route.
pub const AGENT_ROUTE_PREFIX: &str = "/store/agent";

/// Build the detail route for an agent listing.
///
/// The router matches this template literally, so neither segment is escaped.
pub fn agent_path(creator: &str, slug: &str) -> String {
    format!("{}/{}/{}", AGENT_ROUTE_PREFIX, creator, slug)
}
