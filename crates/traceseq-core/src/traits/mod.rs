//! Collaborator traits consumed by the provenance core, with default implementations.

pub mod checksum;
pub mod clock;
pub mod id_generator;

pub use checksum::{sha256_hex, ChecksumProvider, Sha256FileChecksum};
pub use clock::{Clock, FixedClock, SystemClock};
pub use id_generator::{IdGenerator, SequentialIdGenerator, UuidGenerator};
