//! Session flow tests: the interactive loop driven end to end.

use std::io::Cursor;

use palette_gen::PaletteSession;
use palletron::models::AppConfig;
use palletron::repl::Repl;

fn repl_with(colors: &[&str]) -> Repl {
    Repl::with_session(
        AppConfig::default(),
        PaletteSession::from_hex(colors).unwrap(),
    )
}

fn run(repl: &mut Repl, commands: &str) -> String {
    let mut out = Vec::new();
    repl.run(Cursor::new(commands), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_lock_survives_scheme_switches() {
    let mut repl = repl_with(&["#112233", "#445566", "#778899"]);
    let out = run(
        &mut repl,
        "lock 0\nregen pastel\nregen monochromatic\nregen complementary 5\nquit\n",
    );

    assert!(out.contains("locked swatch 0"));
    assert_eq!(
        repl.session().palette().get(0).unwrap().to_string(),
        "#112233"
    );
    assert_eq!(repl.session().palette().len(), 5);
}

#[test]
fn test_unlock_releases_swatch_for_regeneration() {
    let mut repl = repl_with(&["#112233", "#445566", "#778899"]);
    run(&mut repl, "lock 0\nlock 0\nquit\n");
    assert!(!repl.session().is_locked(0));
}

#[test]
fn test_css_export_from_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.css");

    let mut repl = repl_with(&["#112233", "#445566", "#778899"]);
    let out = run(&mut repl, &format!("css {}\nquit\n", path.display()));

    assert!(out.contains("wrote"));
    let css = std::fs::read_to_string(&path).unwrap();
    assert!(css.contains("--color-1: #112233;"));
    assert!(css.contains("--color-3: #778899;"));
}

#[test]
fn test_png_export_from_session() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("palette.png");

    let mut repl = repl_with(&["#112233", "#445566", "#778899"]);
    let out = run(&mut repl, &format!("png {}\nquit\n", path.display()));

    assert!(out.contains("wrote"), "output was: {}", out);
    let bytes = std::fs::read(&path).unwrap();
    assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]);
}

#[test]
fn test_help_lists_commands() {
    let mut repl = repl_with(&["#112233", "#445566", "#778899"]);
    let out = run(&mut repl, "help\nquit\n");
    for command in ["show", "regen", "lock", "copy", "png", "css", "quit"] {
        assert!(out.contains(command), "help is missing '{}'", command);
    }
}
