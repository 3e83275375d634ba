#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub age: i64,
}

/// A user that hasn't been assigned an id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub age: i64,
}

impl NewUser {
    #[must_use]
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            age: self.age,
        }
    }
}

/// Partial update of a [`User`]. Fields left as `None` are not touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub age: Option<i64>,
}

impl UserUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none()
    }

    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(age) = self.age {
            user.age = age;
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn ann() -> User {
        User {
            id: 1,
            name: "Ann".to_string(),
            age: 30,
        }
    }

    #[test_log::test]
    fn new_user_into_user_uses_given_id() {
        let user = NewUser {
            name: "Bob".to_string(),
            age: 42,
        }
        .into_user(7);

        assert_eq!(
            user,
            User {
                id: 7,
                name: "Bob".to_string(),
                age: 42,
            }
        );
    }

    #[test_log::test]
    fn apply_to_only_changes_provided_fields() {
        let mut user = ann();

        UserUpdate {
            name: None,
            age: Some(31),
        }
        .apply_to(&mut user);

        assert_eq!(user.name, "Ann");
        assert_eq!(user.age, 31);
    }

    #[test_log::test]
    fn apply_to_changes_both_fields() {
        let mut user = ann();

        UserUpdate {
            name: Some("Anna".to_string()),
            age: Some(29),
        }
        .apply_to(&mut user);

        assert_eq!(user.id, 1);
        assert_eq!(user.name, "Anna");
        assert_eq!(user.age, 29);
    }

    #[test_log::test]
    fn empty_update_is_a_no_op() {
        let update = UserUpdate::default();
        assert!(update.is_empty());

        let mut user = ann();
        update.apply_to(&mut user);

        assert_eq!(user, ann());
    }
}
