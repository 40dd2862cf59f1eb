// Room inventory and availability pool.
// Rooms are created once at startup in four fixed bands; only the occupancy
// flag ever mutates afterwards.

use serde::{Deserialize, Serialize};

pub const STANDARD_ROOMS: u32 = 50;
pub const DELUXE_ROOMS: u32 = 30;
pub const SUITE_ROOMS: u32 = 15;
pub const VIP_ROOMS: u32 = 5;
pub const TOTAL_ROOMS: u32 = STANDARD_ROOMS + DELUXE_ROOMS + SUITE_ROOMS + VIP_ROOMS;

// Room categories with their fixed nightly rates (currency-agnostic units)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomCategory {
    Standard,
    Deluxe,
    Suite,
    Vip,
}

impl RoomCategory {
    pub fn nightly_rate(self) -> u64 {
        match self {
            RoomCategory::Standard => 500_000,
            RoomCategory::Deluxe => 750_000,
            RoomCategory::Suite => 1_000_000,
            RoomCategory::Vip => 1_500_000,
        }
    }

    // Band layout: 1-50 Standard, 51-80 Deluxe, 81-95 Suite, 96-100 VIP
    pub fn for_number(number: u32) -> Option<RoomCategory> {
        match number {
            1..=50 => Some(RoomCategory::Standard),
            51..=80 => Some(RoomCategory::Deluxe),
            81..=95 => Some(RoomCategory::Suite),
            96..=100 => Some(RoomCategory::Vip),
            _ => None,
        }
    }
}

impl std::fmt::Display for RoomCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RoomCategory::Standard => "Standard",
            RoomCategory::Deluxe => "Deluxe",
            RoomCategory::Suite => "Suite",
            RoomCategory::Vip => "VIP",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub number: u32,
    pub category: RoomCategory,
    pub nightly_rate: u64,
    pub occupied: bool,
}

// All rooms, kept in ascending number order for the lifetime of the system.
#[derive(Debug)]
pub struct RoomInventory {
    rooms: Vec<Room>,
}

impl RoomInventory {
    pub fn initialize() -> Self {
        let rooms = (1..=TOTAL_ROOMS)
            .map(|number| {
                // for_number covers the whole 1..=TOTAL_ROOMS range
                let category = RoomCategory::for_number(number).unwrap();
                Room {
                    number,
                    category,
                    nightly_rate: category.nightly_rate(),
                    occupied: false,
                }
            })
            .collect();
        Self { rooms }
    }

    pub fn find(&self, number: u32) -> Option<&Room> {
        self.rooms.iter().find(|room| room.number == number)
    }

    pub fn find_mut(&mut self, number: u32) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|room| room.number == number)
    }

    pub fn list_all(&self) -> &[Room] {
        &self.rooms
    }

    pub fn list_available(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter().filter(|room| !room.occupied)
    }

    pub fn occupied_count(&self) -> usize {
        self.rooms.iter().filter(|room| room.occupied).count()
    }

    pub fn available_count(&self) -> usize {
        self.rooms.len() - self.occupied_count()
    }
}

// LIFO pool of unoccupied room numbers. Booking takes a number out and
// checkout/payment releases it back, so the pool always mirrors the set of
// rooms whose occupied flag is false, each number at most once.
#[derive(Debug, Default)]
pub struct AvailabilityPool {
    stack: Vec<u32>,
}

impl AvailabilityPool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self, number: u32) {
        self.stack.push(number);
    }

    // Returns false if the number was already in the pool (double release).
    pub fn release(&mut self, number: u32) -> bool {
        if self.contains(number) {
            return false;
        }
        self.stack.push(number);
        true
    }

    // Removes a number handed out by booking. Returns false on a miss.
    pub fn take(&mut self, number: u32) -> bool {
        match self.stack.iter().position(|&n| n == number) {
            Some(idx) => {
                self.stack.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, number: u32) -> bool {
        self.stack.contains(&number)
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}
