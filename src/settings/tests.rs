use super::*;

use assert_matches::assert_matches;

use crate::error::Error;

#[test]
fn test_embedded_defaults() {
    let settings = Settings::load(Vec::<Source>::new()).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.include, "*.*");
    assert_eq!(settings.exclude, "");
    assert!(settings.exclude_generated_t4);
}

#[test]
fn test_load_yaml() {
    let settings = Settings::load([Source::File("src/testing/assets/configs/csharp.yaml".into())]).unwrap();
    assert_eq!(settings.include, "*.cs;*.xaml");
    assert_eq!(settings.exclude, "*.Designer.cs;*.g.cs");
    assert!(settings.exclude_generated_t4);
}

#[test]
fn test_load_layered() {
    let settings = Settings::load([
        Source::File("src/testing/assets/configs/csharp.yaml".into()),
        Source::File("src/testing/assets/configs/keep-t4.toml".into()),
    ])
    .unwrap();
    assert_eq!(settings.include, "*.cs;*.xaml");
    assert!(!settings.exclude_generated_t4);
}

#[test]
fn test_missing_required_file() {
    let result = Settings::load([Source::File("src/testing/assets/configs/missing.yaml".into())]);
    assert_matches!(result, Err(Error::Config(_)));
}

#[test]
fn test_missing_named_file_is_skipped() {
    let settings = Settings::load([Source::Named("src/testing/assets/configs/missing".into())]).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_named_file_extension_is_detected() {
    let settings = Settings::load([Source::Named("src/testing/assets/configs/keep-t4".into())]).unwrap();
    assert!(!settings.exclude_generated_t4);
}
