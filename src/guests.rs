// Guest registry: an append-only arena of guest records plus a separate
// presentation order. Sorting permutes the order vector only, so a GuestId
// handed out at registration stays valid for the life of the registry (the
// directory tree relies on this).

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("guest capacity of {0} exceeded")]
    CapacityExceeded(usize),
}

// Stable handle into the registry arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GuestId(pub(crate) usize);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub name: String,
    pub phone: String,
    // 0 means not currently staying
    pub assigned_room: u32,
}

impl Guest {
    pub fn is_staying(&self) -> bool {
        self.assigned_room != 0
    }
}

#[derive(Debug)]
pub struct GuestRegistry {
    guests: Vec<Guest>,
    order: Vec<GuestId>,
    capacity: usize,
}

impl GuestRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            guests: Vec::new(),
            order: Vec::new(),
            capacity,
        }
    }

    pub fn register(&mut self, name: &str, phone: &str) -> Result<GuestId, RegistryError> {
        if self.guests.len() >= self.capacity {
            return Err(RegistryError::CapacityExceeded(self.capacity));
        }

        let id = GuestId(self.guests.len());
        self.guests.push(Guest {
            name: name.to_string(),
            phone: phone.to_string(),
            assigned_room: 0,
        });
        self.order.push(id);
        Ok(id)
    }

    pub fn get(&self, id: GuestId) -> Option<&Guest> {
        self.guests.get(id.0)
    }

    pub fn get_mut(&mut self, id: GuestId) -> Option<&mut Guest> {
        self.guests.get_mut(id.0)
    }

    pub fn len(&self) -> usize {
        self.guests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // Handle at a position in the current presentation order (the index a
    // guest-chooser flow displays).
    pub fn id_at(&self, index: usize) -> Option<GuestId> {
        self.order.get(index).copied()
    }

    pub fn iter_in_order(&self) -> impl Iterator<Item = (GuestId, &Guest)> {
        self.order.iter().map(move |&id| (id, &self.guests[id.0]))
    }

    // Case-sensitive lexicographic sort of the presentation order. Stable,
    // so equal names keep their pre-sort relative order.
    pub fn sort_by_name(&mut self) {
        let guests = &self.guests;
        self.order.sort_by(|a, b| guests[a.0].name.cmp(&guests[b.0].name));
    }

    // Binary search over the presentation order. Precondition: the registry
    // has been sorted by name via sort_by_name; callers own that step, this
    // never re-sorts (search must not mutate).
    pub fn search_by_name(&self, name: &str) -> Option<GuestId> {
        let mut left = 0;
        let mut right = self.order.len();

        while left < right {
            let mid = (left + right) / 2;
            let id = self.order[mid];
            match self.guests[id.0].name.as_str().cmp(name) {
                std::cmp::Ordering::Equal => return Some(id),
                std::cmp::Ordering::Less => left = mid + 1,
                std::cmp::Ordering::Greater => right = mid,
            }
        }
        None
    }

    // Linear scan in presentation order, first match wins.
    pub fn search_by_room(&self, room_number: u32) -> Option<GuestId> {
        self.order
            .iter()
            .copied()
            .find(|&id| self.guests[id.0].assigned_room == room_number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = GuestRegistry::with_capacity(10);
        let id = registry.register("Bob", "111").unwrap();

        let guest = registry.get(id).unwrap();
        assert_eq!(guest.name, "Bob");
        assert_eq!(guest.phone, "111");
        assert_eq!(guest.assigned_room, 0);
        assert!(!guest.is_staying());
    }

    #[test]
    fn test_capacity_exceeded() {
        let mut registry = GuestRegistry::with_capacity(2);
        registry.register("A", "1").unwrap();
        registry.register("B", "2").unwrap();

        let err = registry.register("C", "3").unwrap_err();
        assert_eq!(err, RegistryError::CapacityExceeded(2));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_sort_by_name_then_binary_search() {
        let mut registry = GuestRegistry::with_capacity(10);
        registry.register("Bob", "111").unwrap();
        registry.register("Alice", "222").unwrap();

        registry.sort_by_name();

        let names: Vec<&str> = registry
            .iter_in_order()
            .map(|(_, g)| g.name.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob"]);

        let alice = registry.search_by_name("Alice").unwrap();
        assert_eq!(registry.get(alice).unwrap().phone, "222");
        assert!(registry.search_by_name("Carol").is_none());
    }

    #[test]
    fn test_sort_is_stable_for_equal_names() {
        let mut registry = GuestRegistry::with_capacity(10);
        let first = registry.register("Ana", "1").unwrap();
        registry.register("Zoe", "2").unwrap();
        let second = registry.register("Ana", "3").unwrap();

        registry.sort_by_name();

        let order: Vec<GuestId> = registry.iter_in_order().map(|(id, _)| id).collect();
        assert_eq!(order[0], first);
        assert_eq!(order[1], second);
    }

    #[test]
    fn test_ids_survive_sorting() {
        let mut registry = GuestRegistry::with_capacity(10);
        let bob = registry.register("Bob", "111").unwrap();
        let alice = registry.register("Alice", "222").unwrap();

        registry.sort_by_name();

        // Handles still point at the same records after the permutation
        assert_eq!(registry.get(bob).unwrap().name, "Bob");
        assert_eq!(registry.get(alice).unwrap().name, "Alice");
        assert_eq!(registry.id_at(0), Some(alice));
        assert_eq!(registry.id_at(1), Some(bob));
    }

    #[test]
    fn test_search_by_room() {
        let mut registry = GuestRegistry::with_capacity(10);
        let a = registry.register("A", "1").unwrap();
        let b = registry.register("B", "2").unwrap();

        registry.get_mut(b).unwrap().assigned_room = 42;
        assert_eq!(registry.search_by_room(42), Some(b));
        assert_eq!(registry.search_by_room(7), None);

        // First match in presentation order wins
        registry.get_mut(a).unwrap().assigned_room = 42;
        assert_eq!(registry.search_by_room(42), Some(a));
    }
}
