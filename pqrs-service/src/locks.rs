//! Per-complaint serialization of read-modify-write cycles.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use uuid::Uuid;

type Registry = Arc<Mutex<HashMap<Uuid, Slot>>>;

#[derive(Debug)]
struct Slot {
    mutex: Arc<AsyncMutex<()>>,
    users: usize,
}

/// Keyed async mutex registry.
///
/// At most one guard per complaint id exists at a time; guards for different
/// ids never block each other. An entry lives while some task holds or awaits
/// it, including waiters whose `lock` future is dropped before it resolves.
#[derive(Debug, Default, Clone)]
pub struct ComplaintLocks {
    registry: Registry,
}

/// Registration of one holder or waiter; the entry goes away with the last one
#[derive(Debug)]
struct Ticket {
    id: Uuid,
    registry: Registry,
}

impl Drop for Ticket {
    fn drop(&mut self) {
        let mut registry = self.registry.lock();
        if let Some(slot) = registry.get_mut(&self.id) {
            slot.users -= 1;
            if slot.users == 0 {
                registry.remove(&self.id);
            }
        }
    }
}

/// Exclusive access to one complaint id, released on drop
#[derive(Debug)]
pub struct ComplaintGuard {
    // Field order matters: the mutex is released before the ticket is returned.
    _guard: OwnedMutexGuard<()>,
    ticket: Ticket,
}

impl ComplaintLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until `id` is free and takes it
    pub async fn lock(&self, id: Uuid) -> ComplaintGuard {
        let (mutex, ticket) = self.register(id);
        let guard = mutex.lock_owned().await;
        ComplaintGuard {
            _guard: guard,
            ticket,
        }
    }

    fn register(&self, id: Uuid) -> (Arc<AsyncMutex<()>>, Ticket) {
        let mut registry = self.registry.lock();
        let slot = registry.entry(id).or_insert_with(|| Slot {
            mutex: Arc::new(AsyncMutex::new(())),
            users: 0,
        });
        slot.users += 1;
        let ticket = Ticket {
            id,
            registry: self.registry.clone(),
        };
        (slot.mutex.clone(), ticket)
    }

    /// Number of ids currently held or awaited
    pub fn active(&self) -> usize {
        self.registry.lock().len()
    }
}

impl ComplaintGuard {
    pub fn id(&self) -> Uuid {
        self.ticket.id
    }
}
