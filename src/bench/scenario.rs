// src/bench/scenario.rs

/// A named benchmark: the table it touches and the exact statement it issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub table: &'static str,
    pub sql: &'static str,
}

/// Read benchmark: a filtered COUNT over `userinfo`.
pub const USERINFO_COUNT: Scenario = Scenario {
    name: "userinfo_count",
    table: "userinfo",
    sql: "SELECT COUNT(*) FROM userinfo WHERE name = 'John Brown' AND state_id = 1;",
};

/// Write benchmark: one UUID-keyed row per statement into `userinfouuid`.
pub const USERINFOUUID_INSERT: Scenario = Scenario {
    name: "userinfouuid_insert",
    table: "userinfouuid",
    sql: "INSERT INTO userinfouuid (uuid, name, email, password, dob, address, city, state_id, zip, country_id, account_type, closest_airport) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_has_twelve_placeholders() {
        assert_eq!(USERINFOUUID_INSERT.sql.matches('?').count(), 12);
        assert!(USERINFOUUID_INSERT.sql.contains(USERINFOUUID_INSERT.table));
    }

    #[test]
    fn test_select_is_parameterless() {
        assert_eq!(USERINFO_COUNT.sql.matches('?').count(), 0);
        assert!(USERINFO_COUNT.sql.contains(USERINFO_COUNT.table));
    }
}
