use super::*;
use crate::error::BuildError;
use crate::spec::{ColumnRef, Field, Op, Pagination, QuerySpec, SortField, SortOrder};
use chrono::NaiveDate;
use uuid::Uuid;

#[test]
fn test_where_empty() {
    let (sql, args) = build_where(&[]).unwrap();
    assert_eq!(sql, "");
    assert!(args.is_empty());
}

#[test]
fn test_where_single_condition() {
    let filters = vec![Field::eq("status", "active")];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE status = $1");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_where_consecutive_placeholders() {
    let filters = vec![
        Field::eq("a", 1i32),
        Field::eq("b", 2i32),
        Field::eq("c", 3i32),
    ];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE a = $1 AND b = $2 AND c = $3");
    assert_eq!(args.len(), filters.len());
}

#[test]
fn test_where_or_chaining() {
    let filters = vec![Field::eq("role", "admin").or(), Field::eq("role", "owner")];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE role = $1 OR role = $2");
}

#[test]
fn test_where_alias_and_lowercasing() {
    let filters = vec![Field::gt("Age", 18i32).source("U")];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE u.age > $1");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_where_null_checks_take_no_params() {
    let filters = vec![
        Field::is_null("deleted_at"),
        Field::is_not_null("confirmed_at"),
        Field::eq("status", "active"),
    ];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(
        sql,
        "WHERE deleted_at IS NULL AND confirmed_at IS NOT NULL AND status = $1"
    );
    assert_eq!(args.len(), 1);
}

#[test]
fn test_where_between() {
    let filters = vec![
        Field::between("age", 18i32, 65i32),
        Field::eq("status", "active"),
    ];
    let (sql, args) = build_where(&filters).unwrap();
    // BETWEEN takes two consecutive placeholders; the next field continues at $3.
    assert_eq!(sql, "WHERE age BETWEEN $1 AND $2 AND status = $3");
    assert_eq!(args.len(), 3);
}

#[test]
fn test_where_between_missing_bound() {
    let filters = vec![Field::new("age", Op::Between)];
    let err = build_where(&filters).unwrap_err();
    assert!(matches!(err, BuildError::MalformedRange { .. }));

    let mut half = Field::new("age", Op::Between);
    half.from_value = Some(crate::param::Param::new(18i32));
    let err = build_where(&[half]).unwrap_err();
    assert!(err.is_malformed_range());
}

#[test]
fn test_where_missing_value() {
    let filters = vec![Field::new("age", Op::Gt)];
    let err = build_where(&filters).unwrap_err();
    assert!(err.is_missing_value());
}

#[test]
fn test_where_in_integers_aliased() {
    let filters = vec![
        Field::in_list("age", vec![1i32, 2, 3]).source("t"),
        Field::eq("status", "active"),
    ];
    let (sql, args) = build_where(&filters).unwrap();
    // The inline list consumes no placeholder slots.
    assert_eq!(sql, "WHERE t.age IN (1,2,3) AND status = $1");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_where_in_unsigned_and_bigint() {
    let filters = vec![Field::in_list("a", vec![7u64]).or(), Field::in_list("b", vec![9i64])];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE a IN (7) OR b IN (9)");
    assert!(args.is_empty());
}

#[test]
fn test_where_in_empty_list_fails_closed() {
    let filters = vec![Field::in_list("age", Vec::<i32>::new())];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE age = ''");
    assert!(args.is_empty());
}

#[test]
fn test_where_in_missing_list_fails_closed() {
    let filters = vec![Field::new("age", Op::In)];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE age = ''");
}

#[test]
fn test_where_not_in_strings() {
    let filters = vec![Field::not_in("name", vec!["ana", "luis"])];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE name NOT IN ('ana','luis')");
    assert!(args.is_empty());
}

#[test]
fn test_where_in_string_escapes_quotes() {
    let filters = vec![Field::in_list("name", vec!["O'Brien"])];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE name IN ('O''Brien')");
}

#[test]
fn test_where_in_uuids() {
    let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
    let filters = vec![Field::in_list("id", vec![id])];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE id IN ('550e8400-e29b-41d4-a716-446655440000')");
}

#[test]
fn test_where_in_dates_unpadded() {
    let dates = vec![
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap(),
        NaiveDate::from_ymd_opt(2024, 11, 21).unwrap(),
    ];
    let filters = vec![Field::in_list("created_on", dates)];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE created_on IN ('2024-3-7','2024-11-21')");
}

#[test]
fn test_where_cross_column_comparison() {
    let filters = vec![
        Field::cmp_column("id", Op::Eq, ColumnRef::new("user_id").source("o")).source("u"),
        Field::eq("status", "active").source("u"),
    ];
    let (sql, args) = build_where(&filters).unwrap();
    // Column-to-column comparison consumes no placeholder slot.
    assert_eq!(sql, "WHERE u.id = o.user_id AND u.status = $1");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_where_group_balanced() {
    let filters = vec![
        Field::eq("a", 1i32).open_group(),
        Field::eq("b", 2i32).close_group(),
    ];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE (a = $1 AND b = $2)");
}

#[test]
fn test_where_group_auto_closes_at_end() {
    let filters = vec![Field::eq("a", 1i32).open_group(), Field::eq("b", 2i32)];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE (a = $1 AND b = $2)");
}

#[test]
fn test_where_nested_groups_auto_close() {
    let filters = vec![
        Field::eq("a", 1i32).open_group(),
        Field::eq("b", 2i32).open_group(),
    ];
    let (sql, _) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE (a = $1 AND (b = $2))");
}

#[test]
fn test_where_bare_paren_takes_no_separator() {
    let filters = vec![
        Field::open_paren(),
        Field::eq("a", 1i32).or(),
        Field::eq("b", 2i32).close_group(),
    ];
    let (sql, args) = build_where(&filters).unwrap();
    assert_eq!(sql, "WHERE ( a = $1 OR b = $2)");
    assert_eq!(args.len(), 2);
}

#[test]
fn test_where_bare_paren_consumes_no_slot_when_seeded() {
    let filters = vec![
        Field::open_paren(),
        Field::eq("a", 1i32).or(),
        Field::eq("b", 2i32).close_group(),
    ];
    let (sql, _) = build_where_with_sequence(&filters, 5).unwrap();
    assert_eq!(sql, "WHERE ( a = $5 OR b = $6)");
}

#[test]
fn test_where_with_sequence() {
    let filters = vec![Field::eq("a", 1i32), Field::between("b", 2i32, 3i32)];
    let (sql, args) = build_where_with_sequence(&filters, 3).unwrap();
    assert_eq!(sql, "WHERE a = $3 AND b BETWEEN $4 AND $5");
    assert_eq!(args.len(), 3);
}

#[test]
fn test_order_by_empty() {
    assert_eq!(build_order_by(&[]), "");
}

#[test]
fn test_order_by() {
    let sorts = vec![
        SortField {
            name: "name".to_string(),
            ..SortField::default()
        },
        SortField::desc("age"),
    ];
    assert_eq!(build_order_by(&sorts), "ORDER BY name ASC, age DESC");
}

#[test]
fn test_order_by_alias_and_lowercasing() {
    let sorts = vec![SortField::desc("Created_At").source("u")];
    assert_eq!(build_order_by(&sorts), "ORDER BY u.created_at DESC");
    assert_eq!(sorts[0].order, SortOrder::Desc);
}

#[test]
fn test_pagination_unset() {
    assert_eq!(build_pagination(&Pagination::default()), "");
}

#[test]
fn test_pagination_page_and_limit() {
    assert_eq!(
        build_pagination(&Pagination::new(2, 10)),
        "LIMIT 10 OFFSET 10"
    );
}

#[test]
fn test_pagination_clamps_to_max_limit() {
    assert_eq!(
        build_pagination(&Pagination::new(0, 500)),
        "LIMIT 100 OFFSET 0"
    );
    assert_eq!(
        build_pagination(&Pagination::new(2, 50).max_limit(20)),
        "LIMIT 20 OFFSET 20"
    );
}

#[test]
fn test_pagination_defaults_limit_to_max() {
    assert_eq!(
        build_pagination(&Pagination::new(3, 0)),
        "LIMIT 100 OFFSET 200"
    );
}

#[test]
fn test_insert() {
    let sql = build_insert("users", &["username", "email"]);
    assert_eq!(
        sql,
        "INSERT INTO users (id,username,email) VALUES ($1,$2,$3) RETURNING created_at"
    );
}

#[test]
fn test_insert_no_id() {
    let sql = build_insert_no_id("users", &["username", "email"]);
    assert_eq!(
        sql,
        "INSERT INTO users (username,email) VALUES ($1,$2) RETURNING id, created_at"
    );
}

#[test]
fn test_update_by_id() {
    let sql = build_update_by_id("users", &["username", "email"]);
    assert_eq!(
        sql,
        "UPDATE users SET username = $1, email = $2, updated_at = now() WHERE id = $3"
    );
    assert_eq!(build_update_by_id("users", &[]), "");
}

#[test]
fn test_update_by_field() {
    let fields = vec![
        Field::eq("status", "inactive"),
        // No value bound: keeps its placeholder slot, contributes no argument.
        Field::new("note", Op::Eq),
    ];
    let (sql, args) = build_update_by("users", "tenant_id", &fields);
    assert_eq!(
        sql,
        "UPDATE users SET status = $1, note = $2, updated_at = now() WHERE tenant_id = $3"
    );
    assert_eq!(args.len(), 1);

    let (sql, args) = build_update_by("users", "tenant_id", &[]);
    assert_eq!(sql, "");
    assert!(args.is_empty());
}

#[test]
fn test_select_fields() {
    assert_eq!(
        build_select("users", &["id", "username"]),
        "SELECT id, username FROM users"
    );
    assert_eq!(build_select("users", &[]), "");
}

#[test]
fn test_columns_aliased() {
    assert_eq!(
        columns_aliased(&["username", "email"], "u"),
        "u.id, u.username, u.email, u.created_at, u.updated_at"
    );
    assert_eq!(columns_aliased(&[], "u"), "");
}

#[test]
fn test_build_query() {
    let spec = QuerySpec::new()
        .filter(Field::eq("status", "active").source("u"))
        .sort(SortField::desc("created_at").source("u"))
        .paginate(2, 20);

    let (sql, args) = build_query("SELECT * FROM users u", &spec).unwrap();
    assert_eq!(
        sql,
        "SELECT * FROM users u WHERE u.status = $1 ORDER BY u.created_at DESC LIMIT 20 OFFSET 20"
    );
    assert_eq!(args.len(), 1);
}

#[test]
fn test_build_query_skips_empty_clauses() {
    let spec = QuerySpec::new();
    let (sql, args) = build_query("SELECT * FROM users", &spec).unwrap();
    assert_eq!(sql, "SELECT * FROM users");
    assert!(args.is_empty());

    let spec = QuerySpec::new().paginate(1, 10);
    let (sql, _) = build_query("SELECT * FROM users", &spec).unwrap();
    assert_eq!(sql, "SELECT * FROM users LIMIT 10 OFFSET 0");
    assert!(!sql.contains("  "));
}

#[test]
fn test_build_query_with_sequence() {
    let spec = QuerySpec::new().filter(Field::eq("status", "active"));
    let (sql, args) = build_query_with_sequence("SELECT * FROM users", &spec, 3).unwrap();
    assert_eq!(sql, "SELECT * FROM users WHERE status = $3");
    assert_eq!(args.len(), 1);
}

#[test]
fn test_builds_are_idempotent() {
    let spec = QuerySpec::new()
        .filter(Field::between("age", 18i32, 65i32))
        .filter(Field::in_list("role_id", vec![1i32, 2]))
        .sort(SortField::asc("name"))
        .paginate(1, 10);

    let (first_sql, first_args) = build_query("SELECT * FROM users", &spec).unwrap();
    let (second_sql, second_args) = build_query("SELECT * FROM users", &spec).unwrap();
    assert_eq!(first_sql, second_sql);
    assert_eq!(first_args.len(), second_args.len());
}
