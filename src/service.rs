// Service request queue: a fixed-capacity circular buffer with explicit
// front/rear/count cursors. Requests are processed strictly in arrival
// order and discarded once drained.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ServiceQueueError {
    #[error("service queue full ({0} pending requests)")]
    QueueFull(usize),
}

// Service kinds the presentation layer can request for a room
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    Breakfast,
    Lunch,
    Dinner,
    Beverage,
    Housekeeping,
    TowelChange,
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ServiceKind::Breakfast => "Breakfast",
            ServiceKind::Lunch => "Lunch",
            ServiceKind::Dinner => "Dinner",
            ServiceKind::Beverage => "Beverage",
            ServiceKind::Housekeeping => "Housekeeping",
            ServiceKind::TowelChange => "Towel Change",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRequest {
    pub line: String,
    pub requested_at: DateTime<Utc>,
}

impl ServiceRequest {
    pub fn new(room_number: u32, kind: ServiceKind) -> Self {
        Self {
            line: format!("Room {room_number}: {kind}"),
            requested_at: Utc::now(),
        }
    }
}

#[derive(Debug)]
pub struct ServiceQueue {
    slots: Box<[Option<ServiceRequest>]>,
    front: usize,
    rear: usize,
    count: usize,
}

impl ServiceQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "service queue capacity must be positive");
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: 0,
            // rear points at the last written slot; first enqueue wraps to 0
            rear: capacity - 1,
            count: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn enqueue(&mut self, request: ServiceRequest) -> Result<(), ServiceQueueError> {
        if self.count == self.slots.len() {
            return Err(ServiceQueueError::QueueFull(self.count));
        }
        self.rear = (self.rear + 1) % self.slots.len();
        self.slots[self.rear] = Some(request);
        self.count += 1;
        Ok(())
    }

    fn dequeue(&mut self) -> Option<ServiceRequest> {
        if self.count == 0 {
            return None;
        }
        let request = self.slots[self.front].take();
        self.front = (self.front + 1) % self.slots.len();
        self.count -= 1;
        request
    }

    // Processes everything currently queued, in arrival order. Not a
    // streaming consumer: requests enqueued afterwards need a new drain.
    pub fn drain_all(&mut self) -> Vec<ServiceRequest> {
        let mut drained = Vec::with_capacity(self.count);
        while let Some(request) = self.dequeue() {
            drained.push(request);
        }
        drained
    }
}
