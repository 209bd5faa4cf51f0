//! Persistenz-Boundary: Outbox, Gateway und Change-Notifications.

pub mod changes;
pub mod gateway;
pub mod outbox;

pub use changes::{decode_remote_change, RemoteChange};
pub use gateway::{flush_outbox, PersistenceGateway, RemoteId};
pub use outbox::{PersistOp, SyncOutbox};
