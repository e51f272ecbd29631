use tracing_subscriber::EnvFilter;
use unitconv::{Config, Session};

// Usage: session [CATEGORY [FROM TO] VALUE...]
//   cargo run --example session -- temperature c f 100 37 -40
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // UNITCONV_HISTORY_CAP / UNITCONV_STRICT are read from the .env file
    // or the environment.
    let config = Config::from_env()?;
    let mut session = Session::with_config(&config)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut values = args.as_slice();

    if let [category, rest @ ..] = values {
        session.select_category(category)?;
        values = rest;
    }
    if let [from, to, rest @ ..] = values {
        if session.engine().unit_info(session.category().id, from).is_ok() {
            session.set_from_unit(from)?;
            session.set_to_unit(to)?;
            values = rest;
        }
    }

    // ── Catalog ─────────────────────────────────────────────────────
    println!("=== {} ===", session.category().name);
    for unit in session.category().units {
        println!("  {:<4} {}", unit.id, unit.name);
    }
    println!();

    // ── Conversions ─────────────────────────────────────────────────
    for raw in values {
        session.set_input(raw.as_str())?;
        match session.result() {
            Some(r) => println!("{r}"),
            None => println!("{raw:?}: no result"),
        }
    }

    // ── History ─────────────────────────────────────────────────────
    println!("\nHistory (newest first):");
    for entry in session.history() {
        println!("  {entry}");
    }
    Ok(())
}
