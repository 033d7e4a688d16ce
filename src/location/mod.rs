pub mod acquirer;
pub mod provider;
pub mod providers;
pub mod types;

pub use acquirer::{LocationAcquirer, PERMISSION_DENIED_MESSAGE};
pub use provider::{LocationError, PermissionProvider, PositionProvider, PositionSource};
pub use providers::{
    CachedPositionProvider, IpApiSource, PermissionRequest, PromptPermission, SimulatedSource,
    StaticPermission,
};
pub use types::{
    Accuracy, AcquisitionResult, Coordinates, LastKnownOptions, PermissionStatus, Position,
    PositionOptions,
};
