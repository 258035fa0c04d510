use sqlx::{
    postgres::{PgArguments, PgRow},
    query::QueryAs,
    Postgres,
};
use uuid::Uuid;

#[derive(Clone)]
pub enum SqlxBinds {
    Uuid(Uuid),
}

pub fn binds_query_as<'a, T: for<'r> sqlx::FromRow<'r, PgRow>>(
    stmt: &'a str,
    binds: Vec<SqlxBinds>,
) -> QueryAs<'a, Postgres, T, PgArguments> {
    let mut q: QueryAs<'_, Postgres, T, PgArguments> = sqlx::query_as(stmt);
    for bind in binds {
        q = match bind {
            SqlxBinds::Uuid(val) => q.bind(val),
        };
    }
    q
}

pub fn query_builder(
    select: Option<&str>,
    table_name: &str,
    wheres: &[String],
    order_by: &[&str],
    limit: Option<u32>,
    offset: Option<u32>,
) -> String {
    let mut stmt = format!("SELECT {} FROM {}", select.unwrap_or("*"), table_name);
    if !wheres.is_empty() {
        stmt.push_str(" WHERE ");
        stmt.push_str(&wheres.join(" AND "));
    }
    if !order_by.is_empty() {
        stmt.push_str(" ORDER BY ");
        stmt.push_str(&order_by.join(", "));
    }
    if let Some(limit) = limit {
        stmt.push_str(&format!(" LIMIT {}", limit));
    }
    if let Some(offset) = offset {
        stmt.push_str(&format!(" OFFSET {}", offset));
    }
    stmt
}

#[cfg(test)]
mod tests {
    use super::query_builder;

    #[test]
    fn test_query_builder() {
        assert_eq!(
            query_builder(None, "public.profile", &[], &[], None, None),
            "SELECT * FROM public.profile"
        );
        assert_eq!(
            query_builder(
                Some("count(id)"),
                "public.profile",
                &["id = $1".to_string(), "channel = $2".to_string()],
                &["created_date DESC", "id DESC"],
                Some(5),
                Some(10),
            ),
            "SELECT count(id) FROM public.profile WHERE id = $1 AND channel = $2 ORDER BY created_date DESC, id DESC LIMIT 5 OFFSET 10"
        );
    }
}
