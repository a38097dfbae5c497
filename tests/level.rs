use corelog::Level;

#[test]
fn ordering_follows_severity() {
    let all = Level::all();
    assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn display_and_label() {
    assert_eq!(Level::Warn.to_string(), "warn");
    assert_eq!(Level::Warn.label(), "WARN");
    assert_eq!(Level::Trace.as_str(), "trace");
}

#[test]
fn parses_aliases_case_insensitively() {
    assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("verbose".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!(" Warning ".parse::<Level>().unwrap(), Level::Warn);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
}

#[test]
fn rejects_unknown() {
    let err = "loud".parse::<Level>().unwrap_err();
    assert_eq!(err.to_string(), "unknown log level: 'loud'");
}

#[test]
fn default_is_info() {
    assert_eq!(Level::default(), Level::Info);
}

#[test]
fn threshold_admits_same_and_higher() {
    assert!(Level::Warn.admits(Level::Warn));
    assert!(Level::Warn.admits(Level::Error));
    assert!(!Level::Warn.admits(Level::Info));
    assert!(Level::Trace.admits(Level::Trace));
}
