use crate::{DatabaseResult, query::QueryHelper};

const TABLES: [(&str, &str); 4] = [
    (
        "student_registrations",
        "CREATE TABLE IF NOT EXISTS student_registrations (id INT AUTO_INCREMENT PRIMARY KEY, name VARCHAR(100) NOT NULL, gender VARCHAR(20), sport VARCHAR(50), department VARCHAR(100), contact VARCHAR(30), email VARCHAR(100))",
    ),
    (
        "admins",
        "CREATE TABLE IF NOT EXISTS admins (id INT AUTO_INCREMENT PRIMARY KEY, username VARCHAR(50) NOT NULL UNIQUE, password VARCHAR(255) NOT NULL)",
    ),
    (
        "players",
        "CREATE TABLE IF NOT EXISTS players (id INT AUTO_INCREMENT PRIMARY KEY, name VARCHAR(100), team VARCHAR(100), position VARCHAR(50), matches INT, goals INT, assists INT)",
    ),
    (
        "contacts",
        "CREATE TABLE IF NOT EXISTS contacts (id INT AUTO_INCREMENT PRIMARY KEY, name VARCHAR(100), email VARCHAR(100), message TEXT)",
    ),
];

/// Creates any of the four site tables that do not exist yet and returns
/// the names of the tables now present, in creation order.
pub async fn create_tables(helper: &QueryHelper) -> DatabaseResult<Vec<&'static str>> {
    let mut ensured = Vec::with_capacity(TABLES.len());
    for (name, ddl) in TABLES {
        helper.execute(ddl, Vec::new(), false).await?;
        ensured.push(name);
    }
    Ok(ensured)
}

/// Returns false when an admin with that username already exists.
pub async fn insert_admin(
    helper: &QueryHelper,
    username: &str,
    password: &str,
) -> DatabaseResult<bool> {
    let existing = helper
        .fetch(
            "SELECT id FROM admins WHERE username = ?",
            vec![username.into()],
        )
        .await?;
    if !existing.is_empty() {
        return Ok(false);
    }

    helper
        .modify(
            "INSERT INTO admins (username, password) VALUES (?, ?)",
            vec![username.into(), password.into()],
        )
        .await?;
    Ok(true)
}
