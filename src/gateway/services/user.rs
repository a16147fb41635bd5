//! User Service - business logic for the user registry

use crate::core_types::UserId;
use crate::models::{NewUser, User};
use crate::store::RecordStore;

use super::ServiceError;

pub struct UserService<'a> {
    users: &'a RecordStore<User>,
}

impl<'a> UserService<'a> {
    pub fn new(users: &'a RecordStore<User>) -> Self {
        Self { users }
    }

    pub fn list(&self) -> Vec<User> {
        self.users.list()
    }

    pub fn create(&self, draft: NewUser) -> User {
        let user = self.users.create(draft);
        tracing::info!("[USER] Created user {} ({:?})", user.id, user.name);
        user
    }

    pub fn get(&self, id: UserId) -> Result<User, ServiceError> {
        self.users
            .get(id)
            .ok_or(ServiceError::NotFound { kind: "User", id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_then_get() {
        let store = RecordStore::new();
        let service = UserService::new(&store);

        let ana = service.create(NewUser {
            name: "Ana".to_string(),
        });
        assert_eq!(ana.id, 1);
        assert_eq!(service.get(1).unwrap(), ana);
        assert_eq!(service.list(), vec![ana]);
    }

    #[test]
    fn test_get_missing() {
        let store = RecordStore::new();
        let service = UserService::new(&store);
        let err = service.get(5).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { id: 5, .. }));
        assert_eq!(err.to_string(), "User 5 not found");
    }
}
