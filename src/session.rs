// Explicit session context for the staff identity
// Replaces page-global session state: restore on startup, persist on login,
// clear on logout. The store trait abstracts wherever the staff record is
// persisted between launches.

use parking_lot::Mutex;
use tracing::info;

use crate::models::Staff;

pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Staff>;
    fn save(&self, staff: &Staff);
    fn clear(&self);
}

// In-memory store, used by tests and headless tooling
#[derive(Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<Staff>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn load(&self) -> Option<Staff> {
        self.slot.lock().clone()
    }

    fn save(&self, staff: &Staff) {
        *self.slot.lock() = Some(staff.clone());
    }

    fn clear(&self) {
        *self.slot.lock() = None;
    }
}

#[derive(Debug, Default)]
pub struct SessionContext {
    staff: Option<Staff>,
}

impl SessionContext {
    // Startup path: attempt restore from the persisted store
    pub fn restore(store: &dyn SessionStore) -> Self {
        let staff = store.load();
        if let Some(staff) = &staff {
            info!(staff = %staff.name, "restored staff session");
        }
        Self { staff }
    }

    pub fn login(&mut self, store: &dyn SessionStore, staff: Staff) {
        store.save(&staff);
        info!(staff = %staff.name, "staff logged in");
        self.staff = Some(staff);
    }

    pub fn logout(&mut self, store: &dyn SessionStore) {
        store.clear();
        self.staff = None;
    }

    pub fn staff(&self) -> Option<&Staff> {
        self.staff.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.staff.is_some()
    }

    // The admin dashboard is gated on an authenticated session
    pub fn is_admin(&self) -> bool {
        self.staff.as_ref().map_or(false, |staff| staff.is_admin)
    }
}
