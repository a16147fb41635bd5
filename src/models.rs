//! Registry records
//!
//! `User` and `Order` are the stored records; `NewUser` and `NewOrder` are
//! their drafts, i.e. what a client sends on create. Drafts carry no `id`:
//! an `id` field in a request body is ignored and the store assigns one.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core_types::{OrderId, RecordId, UserId};
use crate::store::Record;

// ============================================================================
// User
// ============================================================================

/// A registered user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    #[schema(example = 1)]
    pub id: UserId,
    #[schema(example = "Ana")]
    pub name: String,
}

/// User create request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewUser {
    #[schema(example = "Ana")]
    pub name: String,
}

impl Record for User {
    type Draft = NewUser;

    fn from_draft(id: RecordId, draft: NewUser) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }
}

// ============================================================================
// Order
// ============================================================================

/// An order placed by a user.
///
/// `user_id` is checked against the user registry only when the order is
/// created; nothing keeps it in sync afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(example = 1)]
    pub id: OrderId,
    #[schema(example = 1)]
    pub user_id: UserId,
    #[schema(example = "Pen")]
    pub product_name: String,
}

/// Order create request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct NewOrder {
    #[schema(example = 1)]
    pub user_id: UserId,
    #[schema(example = "Pen")]
    pub product_name: String,
}

impl Record for Order {
    type Draft = NewOrder;

    fn from_draft(id: RecordId, draft: NewOrder) -> Self {
        Self {
            id,
            user_id: draft.user_id,
            product_name: draft.product_name,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_wire_format() {
        let user = User::from_draft(
            1,
            NewUser {
                name: "Ana".to_string(),
            },
        );
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "name": "Ana"}));
    }

    #[test]
    fn test_order_wire_format() {
        let order = Order::from_draft(
            7,
            NewOrder {
                user_id: 1,
                product_name: "Pen".to_string(),
            },
        );
        let json = serde_json::to_value(&order).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 7, "user_id": 1, "product_name": "Pen"})
        );
    }

    #[test]
    fn test_draft_ignores_client_id() {
        let draft: NewUser = serde_json::from_str(r#"{"id": 42, "name": "Bo"}"#).unwrap();
        assert_eq!(draft.name, "Bo");

        let user = User::from_draft(3, draft);
        assert_eq!(user.id(), 3);
    }

    #[test]
    fn test_draft_rejects_missing_or_mistyped_fields() {
        assert!(serde_json::from_str::<NewUser>("{}").is_err());
        assert!(serde_json::from_str::<NewOrder>(r#"{"product_name": "Pen"}"#).is_err());
        assert!(
            serde_json::from_str::<NewOrder>(r#"{"user_id": "1", "product_name": "Pen"}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<NewOrder>(r#"{"user_id": -1, "product_name": "Pen"}"#)
                .is_err()
        );
    }
}
