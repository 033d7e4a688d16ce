pub mod cached;
pub mod ip;
pub mod permission;
pub mod simulated;

pub use cached::CachedPositionProvider;
pub use ip::IpApiSource;
pub use permission::{PermissionRequest, PromptPermission, StaticPermission};
pub use simulated::SimulatedSource;
