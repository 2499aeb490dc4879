use super::*;

#[test]
fn test_at_without_default() {
    let settings = at(["src/testing/assets/configs/csharp.yaml"]).no_default(true).load().unwrap();
    assert_eq!(settings.include, "*.cs;*.xaml");
}

#[test]
fn test_sources_order() {
    let loader = at(["a.yaml", "b.toml"]).no_default(true);
    assert_eq!(
        loader.sources(),
        vec![Source::File("a.yaml".into()), Source::File("b.toml".into())]
    );
}

#[test]
fn test_sources_with_default() {
    let sources = at(["a.yaml"]).sources();
    assert_eq!(sources.last(), Some(&Source::File("a.yaml".into())));
    if let Some(dir) = config_dir() {
        assert_eq!(sources.len(), 2);
        assert_matches::assert_matches!(&sources[0], Source::Named(name) if name.starts_with(&*dir.to_string_lossy()));
    }
}
