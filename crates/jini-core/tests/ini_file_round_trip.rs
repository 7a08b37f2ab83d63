use std::fs;

use jini_core::{Entry, Ini, IniError, LineBreak, LoadOptions, SaveOptions};
use tempfile::tempdir;

const LF_SAMPLE: &str = concat!(
    "; global comment\n",
    "name=demo\n",
    "[server]\n",
    "host= example.org\n",
    "port=8080\n",
    ";ports below 1024 need root\n",
    "banner=Welcome\n",
    "  to the\n",
    "  server\n",
    "[empty]\n",
    "\n",
    "[paths]\n",
    "root=/srv/www\n",
);

#[test]
fn test_round_trip_lf_is_byte_identical() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("in.ini");
    let dst = dir.path().join("out.ini");
    fs::write(&src, LF_SAMPLE).unwrap();

    let ini = Ini::load(&src, false).expect("load should succeed");
    assert_eq!(ini.line_break(), LineBreak::Lf);
    ini.save_to(&dst).expect("save should succeed");

    assert_eq!(fs::read(&dst).unwrap(), LF_SAMPLE.as_bytes());
}

#[test]
fn test_round_trip_crlf_is_byte_identical() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("in.ini");
    let dst = dir.path().join("out.ini");
    let crlf = LF_SAMPLE.replace('\n', "\r\n");
    fs::write(&src, &crlf).unwrap();

    let ini = Ini::load(&src, false).expect("load should succeed");
    assert_eq!(ini.line_break(), LineBreak::CrLf);
    assert_eq!(
        ini.get("server", "banner", ""),
        ("Welcome\r\n  to the\r\n  server".to_string(), true)
    );
    ini.save_to(&dst).expect("save should succeed");

    assert_eq!(fs::read(&dst).unwrap(), crlf.as_bytes());
}

#[test]
fn test_values_keep_raw_spacing() {
    let ini = Ini::parse(LF_SAMPLE);
    assert_eq!(
        ini.get("server", "host", ""),
        (" example.org".to_string(), true)
    );
    assert_eq!(ini.get("", "name", ""), ("demo".to_string(), true));
}

#[test]
fn test_comment_preserved() {
    let ini = Ini::parse(";hello\n");
    assert_eq!(ini.sections()[0].entries, vec![Entry::comment("hello")]);
    assert_eq!(ini.to_text(), ";hello\n");
}

#[test]
fn test_missing_file_without_create_is_not_found() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.ini");

    let err = Ini::load(&path, false).unwrap_err();
    assert!(matches!(err, IniError::NotFound { .. }));
    assert_eq!(err.path(), path.as_path());
}

#[test]
fn test_missing_file_with_create_saves_empty() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("fresh.ini");

    let ini = Ini::load(&path, true).expect("load should succeed");
    assert_eq!(ini.file_name(), path.as_path());
    assert_eq!(ini.section_names().collect::<Vec<_>>(), vec![""]);

    ini.save().expect("save should succeed");
    assert_eq!(fs::read(&path).unwrap(), b"");
}

#[test]
fn test_edit_and_save_in_place() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("app.ini");
    fs::write(&path, "[a]\nx=1\n;note\ny=2\n").unwrap();

    let mut ini = Ini::load(&path, false).unwrap();
    ini.set("a", "x", "42");
    ini.set("b", "new", "yes");
    ini.del_key("a", "y");
    ini.save().expect("save should succeed");

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "[a]\nx=42\n;note\n[b]\nnew=yes\n"
    );

    let reloaded = Ini::load(&path, false).unwrap();
    assert_eq!(reloaded.get("a", "x", ""), ("42".to_string(), true));
    assert!(!reloaded.has_key("a", "y"));
}

#[test]
fn test_atomic_save() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("atomic.ini");
    fs::write(&path, "k=old\n").unwrap();

    let mut ini = Ini::load(&path, false).unwrap();
    ini.set("", "k", "new");
    ini.save_to_with(&path, &SaveOptions::new().atomic(true))
        .expect("atomic save should succeed");

    assert_eq!(fs::read_to_string(&path).unwrap(), "k=new\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_default_line_break_for_new_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("win.ini");

    let options = LoadOptions::new()
        .create_if_missing(true)
        .default_line_break(LineBreak::CrLf);
    let mut ini = Ini::load_with(&path, &options).unwrap();
    ini.set("a", "x", "1");
    ini.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[a]\r\nx=1\r\n");
}

#[test]
fn test_invalid_utf8_is_loaded_lossily() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bytes.ini");
    fs::write(&path, b"k=\xff\xfe\n").unwrap();

    let ini = Ini::load(&path, false).expect("parsing never fails");
    assert!(ini.has_key("", "k"));
}

#[test]
fn test_model_snapshot() {
    let ini = Ini::parse("[a]\n;c\nx=1\n");
    let json = serde_json::to_value(ini.section("a").unwrap()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "name": "a",
            "entries": [
                {"kind": "comment", "text": "c"},
                {"kind": "key_value", "key": "x", "value": "1"}
            ]
        })
    );
}

#[test]
fn test_round_trip_keeps_leading_blank_equals_line() {
    let text = "[a]\n  =x\nk=v\n";
    let ini = Ini::parse(text);

    assert_eq!(ini.keys("a").collect::<Vec<_>>(), vec!["k"]);
    assert_eq!(ini.to_text(), text);
}

#[test]
fn test_round_trip_keeps_empty_brackets() {
    let text = "a=1\n[]\nb=2\n";
    let ini = Ini::parse(text);

    assert_eq!(ini.section_names().collect::<Vec<_>>(), vec![""]);
    assert_eq!(ini.to_text(), text);
}
