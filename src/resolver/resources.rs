//! Icon name → resource id probing

use tracing::{debug, warn};

use crate::platform::{PlatformContext, ResourceId, ResourceKind};

/// Probe the platform resources for `name`
/// Kinds are tried in [`ResourceKind::PROBE_ORDER`]; the first hit wins.
pub fn resolve_resource<P>(platform: &P, name: &str) -> Option<ResourceId>
where
    P: PlatformContext + ?Sized,
{
    let package = platform.package_name();
    let catalog = platform.resources();

    let found = ResourceKind::PROBE_ORDER
        .iter()
        .find_map(|&kind| catalog.lookup(name, kind, package).map(|id| (kind, id)));

    match found {
        Some((kind, id)) => {
            debug!(name = %name, kind = %kind, id = id.0, "Resolved resource");
            Some(id)
        }
        None => {
            warn!(name = %name, package = %package, "Resource not found, falling back to SDK default");
            None
        }
    }
}
