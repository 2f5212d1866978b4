use rusqlite::types::Value;
use rusqlite::Connection;
use tracing::info;
use tracing_subscriber::EnvFilter;
use u64text::sql::register;
use u64text::{encode, ExtensionConfig, Scheme};

const SAMPLES: [&str; 5] = [
    "9223372036854775807",  // i64::MAX
    "9223372036854775808",  // i64::MAX + 1
    "18446744073709551615", // u64::MAX
    "9007199254740992",     // 2^53
    "9007199254740993",     // 2^53 + 1
];

fn render(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Integer(i) => format!("{i} (INTEGER)"),
        Value::Real(r) => format!("{r:.0} (REAL)"),
        Value::Text(t) => format!("{t:?} (TEXT)"),
        Value::Blob(b) => format!("<{} byte blob>", b.len()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let scheme: Scheme = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => Scheme::Canonical,
    };
    let conn = Connection::open_in_memory()?;
    register(&conn, &ExtensionConfig::new().with_scheme(scheme))?;
    info!(%scheme, "in-memory database ready");

    let values = SAMPLES.join("), (");

    println!("=== Native INTEGER column ===\n");
    conn.execute_batch(&format!(
        "CREATE TABLE native(n INTEGER); INSERT INTO native VALUES ({values});"
    ))?;
    let mut stmt = conn.prepare("SELECT n FROM native ORDER BY n")?;
    let rows = stmt.query_map([], |row| row.get::<_, Value>(0))?;
    for row in rows {
        println!("  {}", render(&row?));
    }
    println!("\n  Values above i64::MAX come back as rounded doubles.");

    if !scheme.includes_canonical() {
        println!("\n=== Raw scheme ===\n");
        for pair in SAMPLES.windows(2) {
            let cmp: i64 = conn.query_row(
                "SELECT u64_cmp(?1, ?2)",
                [pair[0], pair[1]],
                |row| row.get(0),
            )?;
            println!("  u64_cmp({}, {}) = {cmp}", pair[0], pair[1]);
        }
        return Ok(());
    }

    println!("\n=== TEXT COLLATE U64TEXT column ===\n");
    let quoted = SAMPLES
        .iter()
        .map(|s| format!("(u64_to_text('{s}'))"))
        .collect::<Vec<_>>()
        .join(", ");
    conn.execute_batch(&format!(
        "CREATE TABLE canonical(n TEXT COLLATE U64TEXT CHECK (is_u64text(n)));
         INSERT INTO canonical VALUES {quoted};"
    ))?;
    let mut stmt = conn.prepare("SELECT n, u64text_display(n) FROM canonical ORDER BY n")?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
    })?;
    for row in rows {
        let (stored, shown) = row?;
        println!("  {stored} -> {shown:>20}");
    }

    println!("\n=== Constraint ===\n");
    match conn.execute("INSERT INTO canonical VALUES ('42')", []) {
        Ok(_) => println!("  ✗ non-canonical '42' was accepted"),
        Err(e) => println!("  ✓ non-canonical '42' rejected: {e}"),
    }

    println!("\n=== Codec ===\n");
    let max = encode(u64::MAX);
    println!("  encode(u64::MAX) = {} ({} bytes)", max.as_str(), max.as_bytes().len());
    println!("  display           = {max}");

    Ok(())
}
