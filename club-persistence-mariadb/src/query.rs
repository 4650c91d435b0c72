use sqlx::{
    MySql, Pool,
    mysql::MySqlArguments,
    query::Query,
};

use crate::{
    DatabaseError, DatabaseResult,
    row::{Row, decode_row},
};

/// A positional statement parameter, bound to a `?` placeholder.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Null,
    Int(i64),
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(v: i64) -> Self {
        SqlParam::Int(v)
    }
}

impl From<String> for SqlParam {
    fn from(v: String) -> Self {
        SqlParam::Text(v)
    }
}

impl From<&str> for SqlParam {
    fn from(v: &str) -> Self {
        SqlParam::Text(v.to_string())
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlParam::Null, Into::into)
    }
}

#[derive(Debug, PartialEq)]
pub enum QueryOutcome {
    Rows(Vec<Row>),
    Affected(u64),
    Nothing,
}

/// Runs single parameterized statements against the pool. Each call holds
/// its connection only for the statement's duration.
#[derive(Clone)]
pub struct QueryHelper {
    pool: Pool<MySql>,
}

impl QueryHelper {
    pub fn new(pool: Pool<MySql>) -> Self {
        Self { pool }
    }

    /// Mutating statements run in their own transaction and report the
    /// affected-row count once committed. Otherwise `SELECT`s return their
    /// rows and anything else returns [`QueryOutcome::Nothing`].
    pub async fn execute(
        &self,
        sql: &str,
        params: Vec<SqlParam>,
        mutating: bool,
    ) -> DatabaseResult<QueryOutcome> {
        if mutating {
            // dropping an uncommitted transaction rolls it back
            let mut tx = self.pool.begin().await.map_err(DatabaseError::Connection)?;
            let result = bind_params(sqlx::query(sql), params)
                .execute(&mut *tx)
                .await
                .map_err(DatabaseError::Query)?;
            tx.commit().await.map_err(DatabaseError::Query)?;
            return Ok(QueryOutcome::Affected(result.rows_affected()));
        }

        let mut conn = self.pool.acquire().await.map_err(DatabaseError::Connection)?;
        let query = bind_params(sqlx::query(sql), params);
        if is_select(sql) {
            let rows = query
                .fetch_all(&mut *conn)
                .await
                .map_err(DatabaseError::Query)?;
            let rows = rows.iter().map(decode_row).collect::<DatabaseResult<Vec<Row>>>()?;
            Ok(QueryOutcome::Rows(rows))
        } else {
            query
                .execute(&mut *conn)
                .await
                .map_err(DatabaseError::Query)?;
            Ok(QueryOutcome::Nothing)
        }
    }

    pub async fn fetch(&self, sql: &str, params: Vec<SqlParam>) -> DatabaseResult<Vec<Row>> {
        match self.execute(sql, params, false).await? {
            QueryOutcome::Rows(rows) => Ok(rows),
            _ => Ok(Vec::new()),
        }
    }

    pub async fn modify(&self, sql: &str, params: Vec<SqlParam>) -> DatabaseResult<u64> {
        match self.execute(sql, params, true).await? {
            QueryOutcome::Affected(count) => Ok(count),
            _ => Ok(0),
        }
    }
}

fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: Vec<SqlParam>,
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Null => query.bind(None::<String>),
            SqlParam::Int(v) => query.bind(v),
            SqlParam::Text(v) => query.bind(v),
        };
    }
    query
}

fn is_select(sql: &str) -> bool {
    sql.trim_start()
        .get(..6)
        .is_some_and(|keyword| keyword.eq_ignore_ascii_case("select"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_select() {
        assert!(is_select("SELECT * FROM players"));
        assert!(is_select("\n   select id from admins"));
        assert!(!is_select("DELETE FROM contacts WHERE id = ?"));
        assert!(!is_select("CREATE TABLE IF NOT EXISTS admins (id INT)"));
        assert!(!is_select("sel"));
    }

    #[test]
    fn test_param_conversion() {
        assert_eq!(SqlParam::from(Some(3i64)), SqlParam::Int(3));
        assert_eq!(SqlParam::from(None::<i64>), SqlParam::Null);
        assert_eq!(SqlParam::from(Some("x".to_string())), SqlParam::Text("x".into()));
        assert_eq!(SqlParam::from("y"), SqlParam::Text("y".into()));
    }

    #[tokio::test]
    async fn test_unreachable_database_fails_acquisition() {
        use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};

        let options = MySqlConnectOptions::new().host("127.0.0.1").port(1);
        let pool = MySqlPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(std::time::Duration::from_secs(2))
            .connect_lazy_with(options);
        let helper = QueryHelper::new(pool);

        let result = helper.fetch("SELECT * FROM players", Vec::new()).await;
        assert!(matches!(result, Err(DatabaseError::Connection(..))));
        let result = helper.modify("DELETE FROM players", Vec::new()).await;
        assert!(matches!(result, Err(DatabaseError::Connection(..))));
    }
}
