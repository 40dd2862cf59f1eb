// Main library file for the in-memory hotel operations tracker

// Export modules for each subsystem
pub mod directory;
pub mod guests;
pub mod operations;
pub mod rooms;
pub mod service;

// Re-export key types for convenience
pub use directory::GuestDirectoryTree;
pub use guests::{Guest, GuestId, GuestRegistry, RegistryError};
pub use operations::{HotelConfig, HotelError, HotelSystem, PaymentReceipt, SystemReport};
pub use rooms::{AvailabilityPool, Room, RoomCategory, RoomInventory, TOTAL_ROOMS};
pub use service::{ServiceKind, ServiceQueue, ServiceQueueError, ServiceRequest};
