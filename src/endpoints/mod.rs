//! Endpoint groups. Each group shares the client's transport and maps its
//! methods one-to-one onto REST endpoints under a common path prefix.

pub mod aliases;
pub mod clusters;
pub mod collections;
pub mod points;
pub mod service;
pub mod snapshots;

pub use aliases::AliasesClient;
pub use clusters::ClustersClient;
pub use collections::CollectionsClient;
pub use points::PointsClient;
pub use service::ServiceClient;
pub use snapshots::SnapshotsClient;
