use chrono::{Local, TimeZone};
use unitconv::{Config, ConvertError, Engine, History, InputMode, Session};

fn session() -> Session {
    Session::new(Engine::new().unwrap()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Category / unit selection
// ═══════════════════════════════════════════════════════════════════

#[test]
fn starts_on_first_category_with_first_two_units() {
    let s = session();
    assert_eq!(s.category().id, "length");
    assert_eq!(s.from_unit().id, "km");
    assert_eq!(s.to_unit().id, "m");
    assert_eq!(s.result(), None);
    assert!(s.history().is_empty());
}

#[test]
fn category_switch_resets_units() {
    let mut s = session();
    s.set_from_unit("mi").unwrap();
    s.set_to_unit("in").unwrap();

    for (category, from, to) in [
        ("weight", "t", "kg"),
        ("temperature", "c", "f"),
        ("volume", "l", "ml"),
        ("time", "s", "min"),
        ("digital", "b", "kb"),
        ("length", "km", "m"),
    ] {
        s.select_category(category).unwrap();
        assert_eq!(s.from_unit().id, from, "source after selecting {category}");
        assert_eq!(s.to_unit().id, to, "destination after selecting {category}");
    }
}

#[test]
fn category_switch_reconverts_current_input() {
    let mut s = session();
    s.set_input("100").unwrap();
    assert_eq!(s.result_text(), Some("100000.000000"));

    s.select_category("temperature").unwrap();
    assert_eq!(s.result_text(), Some("212.000000"));
    assert_eq!(s.result().unwrap().category_name, "Temperatura");
}

#[test]
fn reselecting_current_category_keeps_units() {
    let mut s = session();
    s.set_to_unit("ft").unwrap();
    s.select_category("length").unwrap();
    assert_eq!(s.to_unit().id, "ft");
}

#[test]
fn units_from_another_category_are_rejected() {
    let mut s = session();
    let err = s.set_from_unit("kg").unwrap_err();
    assert_eq!(err, ConvertError::UnknownUnit { category: "length".into(), unit: "kg".into() });
    assert_eq!(s.from_unit().id, "km");
}

#[test]
fn unknown_category_leaves_state_untouched() {
    let mut s = session();
    s.set_input("1").unwrap();
    assert!(s.select_category("speed").is_err());
    assert_eq!(s.category().id, "length");
    assert_eq!(s.result_text(), Some("1000.000000"));
}

#[test]
fn swap_units_inverts_the_conversion() {
    let mut s = session();
    s.set_input("1").unwrap();
    s.swap_units().unwrap();
    assert_eq!(s.from_unit().id, "m");
    assert_eq!(s.to_unit().id, "km");
    assert_eq!(s.result_text(), Some("0.001000"));
}

// ═══════════════════════════════════════════════════════════════════
//  Input handling
// ═══════════════════════════════════════════════════════════════════

#[test]
fn empty_input_is_a_no_op() {
    let mut s = session();
    s.set_input("").unwrap();
    s.set_input("  ").unwrap();
    assert_eq!(s.result(), None);
    assert!(s.history().is_empty());
}

#[test]
fn invalid_input_clears_previous_result() {
    let mut s = session();
    s.set_input("5").unwrap();
    assert!(s.result().is_some());
    s.set_input("5x").unwrap();
    assert_eq!(s.result(), None);
    assert_eq!(s.history().len(), 1);
}

#[test]
fn unchanged_input_does_not_reconvert() {
    let mut s = session();
    s.set_input("3").unwrap();
    s.set_input("3").unwrap();
    s.set_to_unit("m").unwrap();
    assert_eq!(s.history().len(), 1);
}

#[test]
fn reset_clears_input_and_result_but_keeps_history() {
    let mut s = session();
    s.set_input("3").unwrap();
    s.reset();
    assert_eq!(s.input(), "");
    assert_eq!(s.result_text(), None);
    assert_eq!(s.history().len(), 1);
}

#[test]
fn strict_session_reports_invalid_input() {
    let mut s = Session::with_config(&Config::new().input_mode(InputMode::Strict)).unwrap();
    s.set_input("2").unwrap();
    let err = s.set_input("two").unwrap_err();
    assert!(matches!(err, ConvertError::InvalidInput(_)));
    assert_eq!(s.input(), "two");
    assert_eq!(s.result(), None);
}

#[test]
fn strict_session_allows_selection_before_input() {
    let mut s = Session::with_config(&Config::new().strict()).unwrap();
    s.select_category("time").unwrap();
    assert_eq!(s.category().id, "time");
    s.set_from_unit("h").unwrap();
    s.set_to_unit("d").unwrap();
    s.swap_units().unwrap();
    assert_eq!(s.result(), None);

    s.set_input("48").unwrap();
    s.set_input("").unwrap();
    assert_eq!(s.result(), None);
    assert_eq!(s.history().len(), 1);
}

// ═══════════════════════════════════════════════════════════════════
//  History
// ═══════════════════════════════════════════════════════════════════

#[test]
fn history_keeps_five_most_recent_newest_first() {
    let mut s = session();
    for n in 1..=7 {
        s.set_input(n.to_string()).unwrap();
    }
    let from: Vec<_> = s.history().iter().map(|e| e.from.as_str()).collect();
    assert_eq!(
        from,
        ["7 Chilometri", "6 Chilometri", "5 Chilometri", "4 Chilometri", "3 Chilometri"]
    );
}

#[test]
fn history_entry_describes_the_conversion() {
    let mut s = session();
    s.select_category("digital").unwrap();
    s.set_from_unit("mb").unwrap();
    s.set_input("1").unwrap();

    let entry = s.history().latest().unwrap();
    assert_eq!(entry.from, "1 Megabytes");
    assert_eq!(entry.to, "1024.000000 Kilobytes");
    assert_eq!(entry.category, "Dati");
    assert_eq!(entry.summary(), "Dati: 1 Megabytes → 1024.000000 Kilobytes");
}

#[test]
fn history_capacity_follows_config() {
    let mut s = Session::with_config(&Config::new().history_cap(2)).unwrap();
    for n in 1..=4 {
        s.set_input(n.to_string()).unwrap();
    }
    assert_eq!(s.history().len(), 2);
    assert_eq!(s.history().capacity(), 2);
    assert_eq!(s.history().latest().unwrap().from, "4 Chilometri");
}

#[test]
fn clear_history_empties_the_list() {
    let mut s = session();
    s.set_input("1").unwrap();
    s.clear_history();
    assert!(s.history().is_empty());
    assert_eq!(s.result_text(), Some("1000.000000"));
}

#[test]
fn zero_capacity_config_is_rejected() {
    let err = Session::with_config(&Config::new().history_cap(0)).unwrap_err();
    assert!(matches!(err, ConvertError::InvalidConfig(_)));
}

#[test]
fn entries_are_stamped_with_time_of_day() {
    let engine = Engine::new().unwrap();
    let result = engine.convert("time", "h", "min", "2").unwrap().unwrap();
    let at = Local.with_ymd_and_hms(2026, 10, 17, 14, 5, 9).unwrap();

    let mut history = History::with_capacity(3);
    history.push(result.history_entry_at(at));

    let entry = history.latest().unwrap();
    assert_eq!(entry.time_label(), "14:05:09");
    assert_eq!(entry.to_string(), "[14:05:09] Tempo: 2 Ore → 120.000000 Minuti");
}

#[test]
fn very_large_capacity_does_not_preallocate() {
    let cfg = Config::from_lookup(|key| {
        (key == "UNITCONV_HISTORY_CAP").then(|| "1000000000000".to_string())
    })
    .unwrap();
    let mut s = Session::with_config(&cfg).unwrap();
    s.set_input("1").unwrap();
    assert_eq!(s.history().len(), 1);
    assert_eq!(s.history().capacity(), 1_000_000_000_000);

    let history = History::with_capacity(usize::MAX);
    assert!(history.is_empty());
    assert_eq!(history.capacity(), usize::MAX);
}
