use declarg::derive::*;
use declarg::prelude::*;
use declarg::{ConfigError, ParseError};
use rand::seq::SliceRandom;
use rand::thread_rng;
use rstest::rstest;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, DeclargChoices)]
enum Verbs {
    #[default]
    Verb1,
    Verb2,
    Verb3,
}

#[derive(Debug, Default, PartialEq, DeclargParser)]
struct Options {
    #[declarg(verb)]
    verb: Option<Verbs>,
    #[declarg(short = 'i')]
    int: Option<i32>,
    #[declarg(short = 'f')]
    flag: bool,
    #[declarg(short = 'o', valid_values = "First;Second")]
    opt: Option<String>,
    #[declarg(name = "only-verb1", only_for_verbs = "Verb1;Verb3")]
    scoped: Option<i32>,
    #[declarg(short = 'q', mutually_exclusive = "noise")]
    quiet: bool,
    #[declarg(short = 'v', mutually_exclusive = "noise")]
    verbose: bool,
    #[declarg(mutually_exclusive = "NOISE")]
    level: Option<i32>,
}

#[derive(Debug, Default, DeclargParser)]
struct Requirements {
    #[declarg(verb)]
    verb: Option<Verbs>,
    #[declarg(required)]
    requiredstring: String,
    #[declarg(required, only_for_verbs = "Verb2")]
    scopedstring: Option<String>,
    #[declarg]
    optbool: bool,
}

#[derive(Debug, Default, DeclargParser)]
struct RequiredVerb {
    #[declarg(verb, required)]
    verb: Option<Verbs>,
    #[declarg]
    int: i32,
}

#[derive(Debug, Default, DeclargParser)]
struct RequiredBool {
    #[declarg(required)]
    flag: bool,
}

#[derive(Debug, Default, DeclargParser)]
struct BadDefault {
    #[declarg(default_value = "abc")]
    int: i32,
}

#[derive(Debug, Default, DeclargParser)]
struct Empty {
    not_an_option: i32,
}

fn messages(errors: &[ParseError]) -> Vec<String> {
    errors.iter().map(|error| error.to_string()).collect()
}

#[rstest]
#[case(vec!["--int", "xyz"], "Invalid value for option 'int' (expected int): xyz", Some("int"))]
#[case(vec!["-i", "1.5"], "Invalid value for option 'int' (expected int): 1.5", Some("int"))]
#[case(vec!["--moot"], "Unknown option 'moot'", None)]
#[case(vec!["-x"], "Unknown option 'x'", None)]
#[case(vec!["verb1", "stray"], "Value without option: 'stray'", None)]
#[case(vec!["--int"], "Missing value for option 'int'", Some("int"))]
#[case(vec!["-if"], "Cannot set option 'int' with multiple switch (only boolean options supported)", Some("int"))]
#[case(vec!["--int", "1", "-i", "2"], "Option 'int' set multiple times", Some("int"))]
#[case(vec!["--opt", "Third"], "Invalid value for option 'opt': Third", Some("opt"))]
#[case(vec!["verb4"], "Invalid value for verb option: verb4", Some("verb"))]
#[case(vec!["--only-verb1", "1"], "Option 'only-verb1' can be set only for specific verbs but no verb has been specified", Some("only-verb1"))]
#[case(vec!["verb2", "--only-verb1", "1"], "Option 'only-verb1' is not valid for verb Verb2", Some("only-verb1"))]
fn single_error(
    #[case] tokens: Vec<&str>,
    #[case] expected: &str,
    #[case] option_name: Option<&str>,
) {
    // Execute
    let (_, errors) = Options::parse_tokens(&tokens).unwrap();

    // Verify
    assert_eq!(messages(&errors), vec![expected]);
    assert_eq!(errors[0].option_name(), option_name);
}

#[test]
fn invalid_value_keeps_default() {
    // Execute
    let (options, errors) = Options::parse_tokens(&["--int", "xyz", "--opt", "Third"]).unwrap();

    // Verify
    assert_eq!(errors.len(), 2);
    assert_eq!(options, Options::default());
}

#[test]
fn only_for_verbs_applies() {
    // Execute
    let (options, errors) = Options::parse_str("verb3 --only-verb1 4").unwrap();

    // Verify
    assert!(errors.is_empty());
    assert_eq!(options.scoped, Some(4));
}

#[test]
fn not_valid_for_verb_resets() {
    // Execute
    let (options, errors) = Options::parse_str("verb2 --only-verb1 4 -i 2").unwrap();

    // Verify
    assert_eq!(
        messages(&errors),
        vec!["Option 'only-verb1' is not valid for verb Verb2"]
    );
    assert_eq!(options.scoped, None);
    assert_eq!(options.int, Some(2));
}

#[test]
fn collects_every_error() {
    // Execute
    let (options, errors) =
        Options::parse_str("verb1 --moot -i xyz stray --opt=Third -f").unwrap();

    // Verify
    assert_eq!(
        messages(&errors),
        vec![
            "Unknown option 'moot'",
            "Invalid value for option 'int' (expected int): xyz",
            "Value without option: 'stray'",
            "Invalid value for option 'opt': Third",
        ]
    );
    assert_eq!(options.verb, Some(Verbs::Verb1));
    assert!(options.flag);
}

#[test]
fn required() {
    // Execute
    let (_, errors) = Requirements::parse_tokens(&["--optbool"]).unwrap();

    // Verify
    assert_eq!(
        messages(&errors),
        vec![
            "Required option 'requiredstring' not set",
            "Required option 'scopedstring' not set",
        ]
    );
}

#[rstest]
#[case(vec!["verb1", "--requiredstring", "a"], vec![])]
#[case(vec!["verb2", "--requiredstring", "a"], vec!["Required option 'scopedstring' not set"])]
#[case(vec!["verb2", "--requiredstring", "a", "--scopedstring", "b"], vec![])]
#[case(vec!["verb3"], vec!["Required option 'requiredstring' not set"])]
fn required_for_verb(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
    // Execute
    let (_, errors) = Requirements::parse_tokens(&tokens).unwrap();

    // Verify
    assert_eq!(messages(&errors), expected);
}

#[test]
fn required_verb() {
    // Execute
    let (_, errors) = RequiredVerb::parse_tokens(&["--int", "1"]).unwrap();

    // Verify
    assert_eq!(messages(&errors), vec!["Required verb option not set"]);
}

#[rstest]
#[case(vec!["-q", "-v"], vec!["Option 'quiet' cannot be used with option 'verbose'"])]
#[case(vec!["-qv"], vec!["Option 'quiet' cannot be used with option 'verbose'"])]
#[case(vec!["--level", "2", "-v"], vec!["Option 'verbose' cannot be used with option 'level'"])]
#[case(vec!["-q", "-v", "--level", "2"], vec![
    "Option 'quiet' cannot be used with option 'verbose'",
    "Option 'quiet' cannot be used with option 'level'",
    "Option 'verbose' cannot be used with option 'level'",
])]
#[case(vec!["-q", "-f"], vec![])]
fn mutually_exclusive(#[case] tokens: Vec<&str>, #[case] expected: Vec<&str>) {
    // Execute
    let (_, errors) = Options::parse_tokens(&tokens).unwrap();

    // Verify
    assert_eq!(messages(&errors), expected);
}

#[test]
fn mutually_exclusive_any_order() {
    // Setup
    let mut groups = vec![vec!["-q"], vec!["--verbose"], vec!["-f"], vec!["--int", "3"]];

    for _ in 0..10 {
        groups.shuffle(&mut thread_rng());
        let tokens: Vec<&str> = groups.concat();

        // Execute
        let (_, errors) = Options::parse_tokens(&tokens).unwrap();

        // Verify
        assert_eq!(
            messages(&errors),
            vec!["Option 'quiet' cannot be used with option 'verbose'"],
            "tokens: {tokens:?}"
        );
    }
}

#[rstest]
#[case(RequiredBool::parser().err(), ConfigError::RequiredBool("flag".to_string()))]
#[case(BadDefault::parser().err(), ConfigError::InvalidDefault { name: "int".to_string(), value: "abc".to_string() })]
#[case(Empty::parser().err(), ConfigError::NoOptions)]
fn config_error(#[case] error: Option<ConfigError>, #[case] expected: ConfigError) {
    assert_eq!(error, Some(expected));
}

#[test]
fn config_error_from_parse() {
    // Execute
    let error = BadDefault::parse_str("--int 1").unwrap_err();

    // Verify
    assert_eq!(
        error.to_string(),
        "Config error: invalid default value for option 'int': abc."
    );
}
