//! Process-wide collection of user records.
//!
//! Records are kept in creation order and looked up by linear scan. Every
//! operation runs inside a single critical section of one [`Mutex`], so a
//! lookup and the mutation that follows it can't interleave with another
//! request.

use std::sync::{Mutex, MutexGuard, PoisonError};

use userbox_logging::debug_or_trace;

use crate::{
    UserError,
    models::{NewUser, User, UserUpdate},
};

#[derive(Debug)]
struct Users {
    records: Vec<User>,
    next_id: i64,
}

impl Default for Users {
    fn default() -> Self {
        Self {
            records: vec![],
            next_id: 1,
        }
    }
}

impl Users {
    fn position(&self, id: i64) -> Option<usize> {
        self.records.iter().position(|user| user.id == id)
    }
}

/// In-memory user store shared by all request handlers.
///
/// Ids come from a monotonic counter starting at 1 and are never handed out
/// twice, even after the record that held them was deleted.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Mutex<Users>,
}

impl UserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section leaves `Users` consistent, so a poisoned lock is
    // still safe to use.
    fn lock(&self) -> MutexGuard<'_, Users> {
        self.users.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a snapshot of every record in creation order.
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.lock().records.clone()
    }

    #[must_use]
    pub fn get(&self, id: i64) -> Option<User> {
        let users = self.lock();
        users.position(id).map(|index| users.records[index].clone())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Assigns the next id to `user` and appends it.
    ///
    /// Returns the created record along with a snapshot of the whole store
    /// taken in the same critical section.
    pub fn create(&self, user: NewUser) -> (User, Vec<User>) {
        let mut users = self.lock();

        let id = users.next_id;
        users.next_id += 1;

        let user = user.into_user(id);
        users.records.push(user.clone());
        let snapshot = users.records.clone();
        drop(users);

        debug_or_trace!(
            ("Created user id={id}"),
            ("Created user {user:?} (total={})", snapshot.len())
        );

        (user, snapshot)
    }

    /// Removes the record with the given id, keeping the order of the rest.
    ///
    /// # Errors
    ///
    /// * If no record has the given id
    pub fn delete(&self, id: i64) -> Result<User, UserError> {
        let mut users = self.lock();

        let Some(index) = users.position(id) else {
            return Err(UserError::NotFound { id });
        };

        let user = users.records.remove(index);
        drop(users);

        log::debug!("Deleted user id={id}");

        Ok(user)
    }

    /// Applies `update` to the record with the given id and returns the
    /// updated record.
    ///
    /// # Errors
    ///
    /// * If no record has the given id
    pub fn update(&self, id: i64, update: UserUpdate) -> Result<User, UserError> {
        if update.is_empty() {
            log::trace!("Empty update for user id={id}");
        }

        let mut users = self.lock();

        let Some(index) = users.position(id) else {
            return Err(UserError::NotFound { id });
        };

        let user = &mut users.records[index];
        update.apply_to(user);
        let user = user.clone();
        drop(users);

        debug_or_trace!(("Updated user id={id}"), ("Updated user {user:?}"));

        Ok(user)
    }
}
