use rstest::rstest;
use xform_fs::NormalizedPath;

#[test]
fn test_normalize_backslashes_to_forward() {
    let path = NormalizedPath::new("C:\\site\\Web.config");
    assert_eq!(path.as_str(), "C:/site/Web.config");
}

#[test]
fn test_join_paths() {
    let base = NormalizedPath::new("/agent");
    let joined = base.join("ExtTemp\\WindowsSDK\\Resources\\ctt.exe");
    assert_eq!(joined.as_str(), "/agent/ExtTemp/WindowsSDK/Resources/ctt.exe");
}

#[test]
fn test_join_onto_trailing_slash() {
    let base = NormalizedPath::new("/agent/");
    assert_eq!(base.join("tool").as_str(), "/agent/tool");
}

#[test]
fn test_parent() {
    let path = NormalizedPath::new("/src/site/Web.config");
    assert_eq!(path.parent().unwrap().as_str(), "/src/site");
}

#[test]
fn test_file_name() {
    let path = NormalizedPath::new("/src/site/Web.Release.config");
    assert_eq!(path.file_name(), Some("Web.Release.config"));
}

#[test]
fn test_extension_of_dotfile_is_whole_name() {
    let path = NormalizedPath::new("/src/.config");
    assert_eq!(path.extension(), Some("config"));
}

#[rstest]
#[case("/src/Web.config", "Release.config", "/src/Web.Release.config")]
#[case("/src/Web.config", ".Release.config", "/src/Web.Release.config")]
#[case("/src/Web.config", ".config", "/src/Web.config")]
#[case("/src/Web.Release.config", "Release.config", "/src/Web.Release.Release.config")]
#[case("/src/settings", "Test.config", "/src/settings.Test.config")]
#[case("/src/.config", "Test.config", "/src/.Test.config")]
#[case("/src/.config", ".config", "/src/.config")]
#[case("/src/Web.config", "", "/src/Web")]
#[case("Web.config", "Production.config", "Web.Production.config")]
fn test_change_extension(#[case] input: &str, #[case] ext: &str, #[case] expected: &str) {
    let path = NormalizedPath::new(input);
    assert_eq!(path.change_extension(ext).as_str(), expected);
}

#[rstest]
#[case("/src/site/Web.config", "/src", Some("site/Web.config"))]
#[case("/src/site/Web.config", "/src/", Some("site/Web.config"))]
#[case("/src/Web.config", "/", Some("src/Web.config"))]
#[case("/src", "/src", None)]
#[case("/other/Web.config", "/src", None)]
#[case("/srcx/Web.config", "/src", None)]
fn test_strip_root(#[case] input: &str, #[case] root: &str, #[case] expected: Option<&str>) {
    let path = NormalizedPath::new(input);
    let stripped = path.strip_root(&NormalizedPath::new(root));
    assert_eq!(stripped.as_ref().map(NormalizedPath::as_str), expected);
}

#[test]
fn test_eq_ignore_case() {
    let a = NormalizedPath::new("C:/Site/WEB.config");
    let b = NormalizedPath::new("c:\\site\\web.CONFIG");
    assert!(a.eq_ignore_case(&b));
    assert_ne!(a, b);
}

#[test]
fn test_serializes_as_plain_string() {
    let path = NormalizedPath::new("C:\\site\\Web.config");
    assert_eq!(
        serde_json::to_string(&path).unwrap(),
        "\"C:/site/Web.config\""
    );
}
