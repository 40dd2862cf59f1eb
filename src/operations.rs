// Booking and billing operations. HotelSystem owns the five shared
// structures (inventory, pool, registry, directory tree, service queue) and
// is the single entry point a presentation layer drives. One instance per
// session; no ambient globals, so independent systems can coexist in tests.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::directory::GuestDirectoryTree;
use crate::guests::{Guest, GuestId, GuestRegistry, RegistryError};
use crate::rooms::{AvailabilityPool, Room, RoomInventory, TOTAL_ROOMS};
use crate::service::{ServiceKind, ServiceQueue, ServiceQueueError, ServiceRequest};

#[derive(Error, Debug)]
pub enum HotelError {
    #[error("room {0} does not exist or is occupied")]
    RoomUnavailable(u32),

    #[error("room {0} is not occupied")]
    RoomNotOccupied(u32),

    #[error("guest {name} is already checked in to room {room}")]
    GuestAlreadyCheckedIn { name: String, room: u32 },

    #[error("no guest at index {0}")]
    InvalidSelection(usize),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    ServiceQueue(#[from] ServiceQueueError),
}

// Capacity knobs. Room bands and rates are fixed at startup and not
// configurable.
#[derive(Debug, Clone)]
pub struct HotelConfig {
    pub guest_capacity: usize,
    pub service_queue_capacity: usize,
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            guest_capacity: 200,
            service_queue_capacity: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentReceipt {
    pub room_number: u32,
    pub nights: u32,
    pub nightly_rate: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StayingGuest {
    pub name: String,
    pub room_number: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct SystemReport {
    pub generated_at: DateTime<Utc>,
    pub occupied_rooms: usize,
    pub available_rooms: usize,
    pub registered_guests: usize,
    // Name-sorted list of guests currently staying
    pub staying: Vec<StayingGuest>,
    // Full directory in inorder traversal, names only
    pub directory_inorder: Vec<String>,
    pub pending_service_requests: usize,
}

#[derive(Debug)]
pub struct HotelSystem {
    inventory: RoomInventory,
    pool: AvailabilityPool,
    registry: GuestRegistry,
    directory: GuestDirectoryTree,
    service_queue: ServiceQueue,
}

impl HotelSystem {
    // Builds the fixed 100-room inventory and seeds the availability pool.
    // Must be the only constructor; every other operation assumes it ran.
    pub fn new(config: HotelConfig) -> Self {
        let inventory = RoomInventory::initialize();
        let mut pool = AvailabilityPool::new();
        for number in 1..=TOTAL_ROOMS {
            pool.seed(number);
        }

        Self {
            inventory,
            pool,
            registry: GuestRegistry::with_capacity(config.guest_capacity),
            directory: GuestDirectoryTree::new(),
            service_queue: ServiceQueue::with_capacity(config.service_queue_capacity),
        }
    }

    pub fn register_guest(&mut self, name: &str, phone: &str) -> Result<GuestId, HotelError> {
        let id = self.registry.register(name, phone)?;
        self.directory.insert(id);
        info!(guest = name, "guest registered");
        Ok(id)
    }

    // Guest index addresses the current presentation order, i.e. name order
    // if the caller sorted first (the guest-chooser flow does).
    pub fn book(&mut self, room_number: u32, guest_index: usize) -> Result<(), HotelError> {
        match self.inventory.find(room_number) {
            Some(room) if !room.occupied => {}
            _ => return Err(HotelError::RoomUnavailable(room_number)),
        }

        let guest_id = self
            .registry
            .id_at(guest_index)
            .ok_or(HotelError::InvalidSelection(guest_index))?;

        // Rebooking a guest who is already staying is rejected rather than
        // silently overwriting their assignment and stranding the old room.
        if let Some(guest) = self.registry.get(guest_id) {
            if guest.is_staying() {
                return Err(HotelError::GuestAlreadyCheckedIn {
                    name: guest.name.clone(),
                    room: guest.assigned_room,
                });
            }
        }

        if let Some(room) = self.inventory.find_mut(room_number) {
            room.occupied = true;
        }
        self.pool.take(room_number);
        if let Some(guest) = self.registry.get_mut(guest_id) {
            guest.assigned_room = room_number;
            info!(room = room_number, guest = %guest.name, "room booked");
        }
        Ok(())
    }

    // Frees the room and resets the staying guest. Returns the guest that
    // was checked out, or None if no guest record matched the room.
    pub fn check_out(&mut self, room_number: u32) -> Result<Option<GuestId>, HotelError> {
        match self.inventory.find(room_number) {
            Some(room) if room.occupied => {}
            _ => return Err(HotelError::RoomNotOccupied(room_number)),
        }

        let guest_id = self.free_room(room_number);
        info!(room = room_number, "checked out");
        Ok(guest_id)
    }

    // Reports the total for the stay, then applies the same side effects as
    // check-out.
    pub fn process_payment(
        &mut self,
        room_number: u32,
        nights: u32,
    ) -> Result<PaymentReceipt, HotelError> {
        let nightly_rate = match self.inventory.find(room_number) {
            Some(room) if room.occupied => room.nightly_rate,
            _ => return Err(HotelError::RoomNotOccupied(room_number)),
        };

        if nights == 0 {
            return Err(HotelError::InvalidInput(
                "nights must be a positive number".to_string(),
            ));
        }

        let receipt = PaymentReceipt {
            room_number,
            nights,
            nightly_rate,
            total: nightly_rate * u64::from(nights),
        };

        self.free_room(room_number);
        info!(room = room_number, total = receipt.total, "payment processed");
        Ok(receipt)
    }

    // Shared checkout path. Caller has already verified the room is
    // occupied. A missing guest record for the room is tolerated drift: the
    // room is still freed.
    fn free_room(&mut self, room_number: u32) -> Option<GuestId> {
        if let Some(room) = self.inventory.find_mut(room_number) {
            room.occupied = false;
        }
        self.pool.release(room_number);

        match self.registry.search_by_room(room_number) {
            Some(guest_id) => {
                if let Some(guest) = self.registry.get_mut(guest_id) {
                    guest.assigned_room = 0;
                }
                Some(guest_id)
            }
            None => {
                warn!(room = room_number, "no guest record for checked-out room");
                None
            }
        }
    }

    pub fn request_service(
        &mut self,
        room_number: u32,
        kind: ServiceKind,
    ) -> Result<(), HotelError> {
        match self.inventory.find(room_number) {
            Some(room) if room.occupied => {}
            _ => return Err(HotelError::RoomNotOccupied(room_number)),
        }

        self.service_queue
            .enqueue(ServiceRequest::new(room_number, kind))?;
        info!(room = room_number, kind = %kind, "service requested");
        Ok(())
    }

    pub fn drain_service_requests(&mut self) -> Vec<ServiceRequest> {
        self.service_queue.drain_all()
    }

    pub fn pending_service_requests(&self) -> usize {
        self.service_queue.len()
    }

    // Explicit sort step for the guest-chooser flow. Search and report never
    // re-sort behind the caller's back.
    pub fn sort_guests_by_name(&mut self) {
        self.registry.sort_by_name();
    }

    pub fn find_guest_by_name(&mut self, name: &str) -> Option<&Guest> {
        self.registry.sort_by_name();
        let id = self.registry.search_by_name(name)?;
        self.registry.get(id)
    }

    pub fn guest(&self, id: GuestId) -> Option<&Guest> {
        self.registry.get(id)
    }

    pub fn guests_in_order(&self) -> Vec<&Guest> {
        self.registry.iter_in_order().map(|(_, guest)| guest).collect()
    }

    pub fn rooms(&self) -> &[Room] {
        self.inventory.list_all()
    }

    pub fn available_rooms(&self) -> Vec<&Room> {
        self.inventory.list_available().collect()
    }

    pub fn directory_inorder(&self) -> Vec<&Guest> {
        self.resolve(self.directory.traverse_inorder())
    }

    pub fn directory_preorder(&self) -> Vec<&Guest> {
        self.resolve(self.directory.traverse_preorder())
    }

    pub fn directory_postorder(&self) -> Vec<&Guest> {
        self.resolve(self.directory.traverse_postorder())
    }

    fn resolve(&self, ids: Vec<GuestId>) -> Vec<&Guest> {
        ids.into_iter().filter_map(|id| self.registry.get(id)).collect()
    }

    // Read-only aggregation, except for the explicit name sort it performs
    // as a prerequisite for the staying-guest listing.
    pub fn system_report(&mut self) -> SystemReport {
        self.registry.sort_by_name();

        let staying = self
            .registry
            .iter_in_order()
            .filter(|(_, guest)| guest.is_staying())
            .map(|(_, guest)| StayingGuest {
                name: guest.name.clone(),
                room_number: guest.assigned_room,
            })
            .collect();

        let directory_inorder = self
            .directory_inorder()
            .into_iter()
            .map(|guest| guest.name.clone())
            .collect();

        SystemReport {
            generated_at: Utc::now(),
            occupied_rooms: self.inventory.occupied_count(),
            available_rooms: self.inventory.available_count(),
            registered_guests: self.registry.len(),
            staying,
            directory_inorder,
            pending_service_requests: self.service_queue.len(),
        }
    }
}

impl Default for HotelSystem {
    fn default() -> Self {
        Self::new(HotelConfig::default())
    }
}
