// src/bench/row.rs

use uuid::Uuid;

/// Field values shared by every row an insert run writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTemplate {
    pub name: &'static str,
    /// Local part of the email; the loop index is appended to it.
    pub email_base: &'static str,
    pub password: &'static str,
    pub dob: &'static str,
    pub address: &'static str,
    pub city: &'static str,
    pub state_id: i32,
    pub zip: &'static str,
    pub country_id: i32,
    pub account_type: &'static str,
    pub closest_airport: &'static str,
}

pub static JOHN_SMITH: RowTemplate = RowTemplate {
    name: "John Smith",
    email_base: "john.smith",
    password: "password123",
    dob: "1990-01-01",
    address: "123 Main St",
    city: "Springfield",
    state_id: 1,
    zip: "12345",
    country_id: 1,
    account_type: "standard",
    closest_airport: "JFK",
};

impl RowTemplate {
    /// Row for loop iteration `index`: a fresh v4 id and `{email_base}{index}@email.com`.
    pub fn row(&self, index: u64) -> SyntheticRow<'_> {
        SyntheticRow {
            id: Uuid::new_v4(),
            email: format!("{}{}@email.com", self.email_base, index),
            template: self,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SyntheticRow<'a> {
    pub id: Uuid,
    pub email: String,
    pub template: &'a RowTemplate,
}

impl SyntheticRow<'_> {
    /// The id in the hyphenated text form it is stored as.
    pub fn id_string(&self) -> String {
        self.id.hyphenated().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_email_uses_loop_index() {
        assert_eq!(JOHN_SMITH.row(0).email, "john.smith0@email.com");
        assert_eq!(JOHN_SMITH.row(42).email, "john.smith42@email.com");
    }

    #[test]
    fn test_ids_are_distinct() {
        let ids: HashSet<Uuid> = (0..1000).map(|i| JOHN_SMITH.row(i).id).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_template_fields_carried_through() {
        let row = JOHN_SMITH.row(7);
        assert_eq!(row.template, &JOHN_SMITH);
        assert_eq!(row.id.get_version_num(), 4);
        assert_eq!(row.id_string().len(), 36);
    }
}
