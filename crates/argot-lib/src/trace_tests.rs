use crate::{
    Arg, Binding, Colors, DEFAULT_CUSTOMIZATION, NoopTracer, Opt, Outcome, Parser, PrintTracer,
    TokenStream,
};

#[test]
fn records_each_step() {
    let verbose = Opt::flag(&Binding::new(false)).names(["-v", "--verbose"]);
    let file = Arg::new(&Binding::new(String::new()), "file");
    let input = TokenStream::from_args(["-v", "notes.txt"], &DEFAULT_CUSTOMIZATION);
    let mut tracer = PrintTracer::new(Colors::OFF);

    let start = input.cursor();
    let miss = file
        .parse_traced(start, &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();
    let state = verbose
        .parse_traced(miss.remaining(), &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();
    let state = file
        .parse_traced(state.remaining(), &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();
    verbose
        .parse_traced(state.remaining(), &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();

    assert_eq!(
        tracer.lines(),
        [
            "  0  [<file>]  no match",
            "  0  -v|--verbose  matched -> 1",
            "  1  [<file>]  matched -> 2",
            "  2  -v|--verbose  no match",
        ]
    );
}

#[test]
fn records_failures() {
    let mut tracer = PrintTracer::default();
    let input = TokenStream::from_args(["--level"], &DEFAULT_CUSTOMIZATION);

    let unnamed = Opt::flag(&Binding::new(false));
    assert!(
        unnamed
            .parse_traced(input.cursor(), &DEFAULT_CUSTOMIZATION, &mut tracer)
            .is_err()
    );

    let level = Opt::value(&Binding::new(0u8), "n").name("--level");
    assert!(
        level
            .parse_traced(input.cursor(), &DEFAULT_CUSTOMIZATION, &mut tracer)
            .is_err()
    );

    assert_eq!(
        tracer.dump(),
        "  -    invalid: No options supplied to opt\n  0  --level  rejected: Expected argument following --level"
    );
}

#[test]
fn records_short_circuit() {
    let help = Opt::flag_fn(|_| Ok(Outcome::ShortCircuitAll)).name("--help");
    let input = TokenStream::from_args(["--help"], &DEFAULT_CUSTOMIZATION);
    let mut tracer = PrintTracer::default();
    help.parse_traced(input.cursor(), &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();
    assert_eq!(tracer.lines(), ["  0  --help  short-circuit -> 1"]);
}

#[test]
fn writes_collected_lines() {
    let flag = Opt::flag(&Binding::new(false)).name("-v");
    let input = TokenStream::from_args(["x", "-v"], &DEFAULT_CUSTOMIZATION);
    let mut tracer = PrintTracer::default();
    let miss = flag
        .parse_traced(input.cursor(), &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();
    flag.parse_traced(miss.remaining().advance(), &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();

    let mut out = Vec::new();
    tracer.write_to(&mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "  0  -v  no match\n  1  -v  matched -> 2\n"
    );
    tracer.print();
}

#[test]
fn colored_lines() {
    let flag = Opt::flag(&Binding::new(false)).name("-v");
    let input = TokenStream::from_args(["-v"], &DEFAULT_CUSTOMIZATION);
    let mut tracer = PrintTracer::new(Colors::ON);
    flag.parse_traced(input.cursor(), &DEFAULT_CUSTOMIZATION, &mut tracer)
        .unwrap();

    let lines = tracer.into_lines();
    assert_eq!(lines, ["\x1b[2m  0\x1b[0m  -v  \x1b[32mmatched\x1b[0m -> 1"]);
}

#[test]
fn noop_tracer_matches_plain_parse() {
    let count = Binding::new(0u32);
    let opt = Opt::value(&count, "n").name("-n");
    let input = TokenStream::from_args(["-n", "3"], &DEFAULT_CUSTOMIZATION);

    let traced = opt
        .parse_traced(input.cursor(), &DEFAULT_CUSTOMIZATION, &mut NoopTracer)
        .unwrap();
    let plain = opt.parse(input.cursor(), &DEFAULT_CUSTOMIZATION).unwrap();
    assert_eq!(traced, plain);
    assert_eq!(count.get(), 3);
}
