use std::path::{Path, PathBuf};

use urban_defender::assets::{AssetError, AssetPaths};
use urban_defender::diagnostics::*;

fn capture(f: impl FnOnce(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut buf = Vec::new();
    f(&mut buf).expect("write report");
    String::from_utf8(buf).expect("utf8")
}

#[test]
fn probe_lists_cwd_and_every_path() {
    let paths = AssetPaths::under(Path::new("/opt/game"));
    let text = capture(|out| report_probe(out, Path::new("/home/me"), &paths));

    assert!(text.contains("Current working directory: "));
    assert!(text.contains("/home/me"));
    assert!(text.contains("Trying to load images from:"));
    assert!(text.contains("/opt/game/assets/player.png"));
    assert!(text.contains("/opt/game/assets/enemy.png"));
    assert!(text.contains("/opt/game/assets/bullet.png"));
}

#[test]
fn success_line() {
    let text = capture(|out| report_loaded(out));
    assert!(text.contains("All images loaded successfully!"));
}

#[test]
fn failure_has_type_message_path_and_remediation() {
    let err = AssetError::NotFound { path: PathBuf::from("/opt/game/assets/enemy.png") };
    let text = capture(|out| report_failure(out, &err));

    assert!(text.contains("Error loading images:"));
    assert!(text.contains("Error type: FileNotFound"));
    assert!(text.contains("Error message: Cannot find file: /opt/game/assets/enemy.png"));
    assert!(text.contains("Please ensure that:"));
    assert!(text.contains("1. The 'assets' folder exists"));
    assert!(text.contains("3. The image files have correct permissions"));
}
