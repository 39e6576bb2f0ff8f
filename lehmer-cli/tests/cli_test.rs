use clap::Parser;
use lehmer_cli::{parse_seed, render, run, Args, Command};

#[test]
fn test_parse_seed_forms() {
    assert_eq!(parse_seed("42"), Ok(42));
    assert_eq!(parse_seed("4294967295"), Ok(u32::MAX));
    assert_eq!(parse_seed("-1"), Ok(u32::MAX));
    assert_eq!(parse_seed("0xE120FC15"), Ok(0xE120_FC15));
    assert!(parse_seed("4294967296").is_err());
    assert!(parse_seed("seed").is_err());
}

#[test]
fn test_args_parse_int_command() {
    let args = Args::try_parse_from(["lehmer", "--seed", "-1", "-n", "3", "int", "--min", "-5", "--max", "5"]).unwrap();
    assert_eq!(args.seed, Some(u32::MAX));
    assert_eq!(args.count, 3);
    assert_eq!(args.command, Command::Int { min: -5, max: 5 });
}

#[test]
fn test_int_sequence_output() {
    let lines = render(42, 5, &Command::Int { min: 0, max: 100 }).unwrap();
    assert_eq!(lines, vec!["28", "98", "0", "20", "40"]);
}

#[test]
fn test_raw_output() {
    let lines = render(0, 2, &Command::Raw).unwrap();
    assert_eq!(lines, vec!["0x1322d6d0", "0x3f10a9aa"]);
}

#[test]
fn test_bytes_output() {
    let lines = render(12345, 1, &Command::Bytes { len: 8 }).unwrap();
    assert_eq!(lines, vec!["e7c7e081996b5ea9"]);
}

#[test]
fn test_double_output() {
    let lines = render(42, 2, &Command::Double { min: 0.0, max: 1.0 }).unwrap();
    assert_eq!(lines, vec!["0.9725813355698673", "0.4695479056028528"]);
}

#[test]
fn test_once_is_stateless() {
    let command = Command::Once { min: 0, max: 100 };
    assert_eq!(render(42, 10, &command).unwrap(), vec!["28"]);
    assert_eq!(render(42, 10, &command).unwrap(), vec!["28"]);
}

#[test]
fn test_invalid_range_is_an_error() {
    let err = render(1, 3, &Command::Int { min: 10, max: 3 }).unwrap_err();
    assert!(format!("{:#}", err).contains("empty range [10, 3)"));

    assert!(render(1, 1, &Command::OnceDouble { min: 5.0, max: 5.0 }).is_err());
}

#[test]
fn test_once_double_fractional_bounds() {
    let args = Args::try_parse_from(["lehmer", "--seed", "42", "once-double", "--min", "0.5", "--max", "0.75"]).unwrap();
    assert_eq!(args.command, Command::OnceDouble { min: 0.5, max: 0.75 });

    let lines = run(&args).unwrap();
    let value: f64 = lines[0].parse().unwrap();
    assert!((0.5..0.75).contains(&value));
    assert_eq!(lines, vec![(0.9725813355698673 * 0.25 + 0.5).to_string()]);
}

#[test]
fn test_zero_count() {
    let args = Args::try_parse_from(["lehmer", "--seed", "42", "-n", "0", "once"]).unwrap();
    assert_eq!(run(&args).unwrap(), vec!["28"]);
    assert_eq!(render(42, 0, &Command::OnceDouble { min: 0.0, max: 1.0 }).unwrap().len(), 1);

    let err = render(42, 0, &Command::Raw).unwrap_err();
    assert!(err.to_string().contains("--count must be at least 1"));
    assert!(render(42, 0, &Command::Int { min: 0, max: 10 }).is_err());
}

#[test]
fn test_run_without_seed() {
    let args = Args::try_parse_from(["lehmer", "-n", "4", "double"]).unwrap();
    let lines = run(&args).unwrap();
    assert_eq!(lines.len(), 4);
    for line in lines {
        let value: f64 = line.parse().unwrap();
        assert!((0.0..1.0).contains(&value));
    }
}
