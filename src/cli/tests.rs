use clap::CommandFactory;

use super::*;

fn parse(args: &[&str]) -> Opt {
    Opt::try_parse_from(std::iter::once("filesel").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_defaults_come_from_settings() {
    let opt = parse(&[]);
    assert_eq!(opt.apply(Settings::default()), Settings::default());
    assert_eq!(opt.delimiter(), Delimiter::Lf);
    assert!(opt.paths.is_empty());
}

#[test]
fn test_patterns_override_settings() {
    let opt = parse(&["-i", "*.cs;*.vb", "--exclude", "*.g.cs", "src/a.cs"]);
    let settings = opt.apply(Settings::default());
    assert_eq!(settings.include, "*.cs;*.vb");
    assert_eq!(settings.exclude, "*.g.cs");
    assert_eq!(opt.paths, vec![PathBuf::from("src/a.cs")]);
}

#[test]
fn test_empty_include() {
    let opt = parse(&["--include", ""]);
    assert_eq!(opt.apply(Settings::default()).include, "");
}

#[test]
fn test_last_pattern_wins() {
    let opt = parse(&["-i", "*.cs", "-i", "*.txt"]);
    assert_eq!(opt.include.as_deref(), Some("*.txt"));
}

#[test]
fn test_generated_t4_flags() {
    let settings = Settings::default();
    assert!(!parse(&["--no-exclude-generated-t4"]).apply(settings.clone()).exclude_generated_t4);
    assert!(
        parse(&["--no-exclude-generated-t4", "--exclude-generated-t4"])
            .apply(settings.clone())
            .exclude_generated_t4
    );
    assert!(
        !parse(&["--exclude-generated-t4", "--no-exclude-generated-t4"])
            .apply(settings)
            .exclude_generated_t4
    );
}

#[test]
fn test_configs() {
    let opt = parse(&["--config", "a.yaml", "--config", "b.yaml"]);
    assert_eq!(opt.configs(), (&["a.yaml".to_owned(), "b.yaml".to_owned()][..], false));

    let opt = parse(&["--config", "a.yaml", "--config", "-", "--config", "b.yaml"]);
    assert_eq!(opt.configs(), (&["b.yaml".to_owned()][..], true));

    let opt = parse(&["--config", "a.yaml", "--config="]);
    assert_eq!(opt.configs(), (&[][..], true));
}

#[test]
fn test_null_delimiter() {
    assert_eq!(parse(&["-z"]).delimiter(), Delimiter::Nul);
}
