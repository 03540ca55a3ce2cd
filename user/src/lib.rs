//! Test-case loop behind the `derange` binary.
//!
//! Input: the number of cases, then for each case a length followed by that
//! many integers of any size. Output per case: `NO`, or `YES`, the length of
//! the remaining sequence and the sequence itself.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use derange::{Derange, Reduction};
use input::{scan, ReadError, Source};
use log::{debug, info, trace, warn};
use num_bigint::BigInt;
use str_sep::SpaceSep;
use thiserror::Error;
use yes_no::YESNO;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum Engine {
    /// Keep the sorted copy up to date between removals.
    #[default]
    Incremental,
    /// Sort from scratch after every removal.
    Naive,
}

impl Engine {
    pub fn derange_traced<T: Ord + Clone>(self, a: &[T]) -> Reduction<T> {
        match self {
            Engine::Incremental => a.derange_traced(),
            Engine::Naive => {
                let (removed, rest) = naive_derange::derange_traced(a);
                Reduction { removed, rest }
            }
        }
    }
}

#[derive(Clone, Debug, Default, Parser)]
#[command(name = "derange")]
#[command(about = "Remove first fixed points until none is left")]
pub struct Args {
    #[arg(long, value_enum, default_value_t = Engine::Incremental)]
    pub engine: Engine,
    /// Fail on malformed or truncated input instead of stopping quietly.
    #[arg(long)]
    pub strict: bool,
    /// Read stdin line by line instead of all at once.
    #[arg(long)]
    pub streaming: bool,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Read(#[from] ReadError),
    #[error("failed to write output")]
    Write(#[from] io::Error),
}

pub fn write_verdict<W: Write, T: Display>(
    out: &mut W,
    res: Option<&[T]>,
) -> io::Result<()> {
    writeln!(out, "{}", YESNO(res.is_some()))?;
    if let Some(d) = res {
        writeln!(out, "{}", d.len())?;
        writeln!(out, "{}", SpaceSep(d))?;
    }
    Ok(())
}

/// Solves test cases until the input is exhausted or malformed.
///
/// Verdicts are written as soon as each case is read, so everything before
/// an input error is already in `out` when the error is returned.
pub fn run<R: BufRead, S: Source<R>, W: Write>(
    mut source: S,
    out: &mut W,
    engine: Engine,
) -> Result<usize, Error> {
    scan! {
        from &mut source,
        t: usize,
    }
    debug!("{t} test case(s) announced");

    for case in 0..t {
        scan! {
            from &mut source,
            a: [BigInt],
        }
        let red = engine.derange_traced(&a);
        for (step, i) in red.removed.iter().enumerate() {
            trace!("case {case}: removal #{step} at position {i}");
        }
        debug!("case {case}: n = {}, kept {}", a.len(), red.rest.len());
        write_verdict(out, red.into_result().as_deref())?;
    }
    Ok(t)
}

/// Exit policy: input errors stop the run quietly unless `strict`; write
/// errors always fail.
pub fn finish(res: Result<usize, Error>, strict: bool) -> anyhow::Result<()> {
    match res {
        Ok(t) => info!("solved {t} test case(s)"),
        Err(Error::Read(e)) if !strict => {
            warn!("stopped reading input: {e}")
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
fn transcript<S: Source<&'static [u8]>>(
    source: S,
    engine: Engine,
) -> (Result<usize, Error>, String) {
    let mut out = vec![];
    let res = run(source, &mut out, engine);
    (res, String::from_utf8(out).unwrap())
}

#[test]
fn sanity_check() {
    use input::AutoSource;

    let text = "2\n3\n1 2 3\n4\n2 1 4 3\n";
    for engine in [Engine::Incremental, Engine::Naive] {
        let (res, out) = transcript(AutoSource::from(text), engine);
        assert_eq!(res.unwrap(), 2);
        assert_eq!(out, "NO\nYES\n4\n2 1 4 3\n");
    }
}

#[test]
fn edge_cases() {
    use input::AutoSource;

    let text = "5  0\n\n1 9  3 5 5 5  3 1 3 2  2 -4 -9";
    let (res, out) = transcript(AutoSource::from(text), Engine::default());
    assert_eq!(res.unwrap(), 5);
    // [-4, -9] vs [-9, -4]: nothing fixed.
    assert_eq!(out, "NO\nNO\nNO\nYES\n2\n3 2\nYES\n2\n-4 -9\n");
}

#[test]
fn huge_values() {
    use input::AutoSource;

    let text = "3\n2\n20000000000000000000 10000000000000000000\n2\n2 1\n\
                3\n-99999999999999999999999 7 -99999999999999999999999\n";
    for engine in [Engine::Incremental, Engine::Naive] {
        let (res, out) = transcript(AutoSource::from(text), engine);
        assert_eq!(res.unwrap(), 3);
        // [-B, 7, -B] vs [-B, -B, 7]: 0 is fixed; [7, -B] vs [-B, 7].
        assert_eq!(
            out,
            "YES\n2\n20000000000000000000 10000000000000000000\n\
             YES\n2\n2 1\n\
             YES\n2\n7 -99999999999999999999999\n"
        );
    }
}

#[test]
fn engines_trace_alike() {
    let a: Vec<BigInt> = [1, 3, 2, 2, 5, 5, 4].map(BigInt::from).to_vec();
    let red = Engine::Naive.derange_traced(&a);
    assert_eq!(red, Engine::Incremental.derange_traced(&a));
    assert_eq!(red.removed.len() + red.rest.len(), a.len());
}

#[test]
fn streaming_matches_slurping() {
    use input::{AutoSource, LineSource};

    let text = "3\n4\n1 3 2 2\n2\n7 7\n5\n5 4 3 2 1\n";
    let (once_res, once) = transcript(AutoSource::from(text), Engine::Naive);
    let (line_res, line) =
        transcript(LineSource::from(text), Engine::default());
    assert_eq!(once_res.unwrap(), line_res.unwrap());
    assert_eq!(once, line);
    assert_eq!(once, "YES\n2\n3 2\nNO\nYES\n4\n5 4 2 1\n");
}

#[test]
fn truncated_input_keeps_earlier_verdicts() {
    use input::AutoSource;

    let text = "3\n2\n2 1\n3\n1 2";
    let (res, out) = transcript(AutoSource::from(text), Engine::default());
    match res {
        Err(Error::Read(ReadError::Eof { ty })) => {
            assert!(ty.ends_with("BigInt"))
        }
        res => panic!("unexpected {res:?}"),
    }
    assert_eq!(out, "YES\n2\n2 1\n");

    let (res, out) = transcript(AutoSource::from(""), Engine::default());
    assert!(matches!(
        res,
        Err(Error::Read(ReadError::Eof { ty: "usize" }))
    ));
    assert!(out.is_empty());
}

#[test]
fn malformed_input() {
    use input::LineSource;

    let text = "2\n1\n4\n2\n1 x\n";
    let (res, out) = transcript(LineSource::from(text), Engine::default());
    match res {
        Err(Error::Read(ReadError::Parse { token, ty, .. })) => {
            assert_eq!(token, "x");
            assert!(ty.ends_with("BigInt"));
        }
        res => panic!("unexpected {res:?}"),
    }
    assert_eq!(out, "NO\n");
}

#[cfg(test)]
struct ClosedPipe;

#[cfg(test)]
impl Write for ClosedPipe {
    fn write(&mut self, _: &[u8]) -> io::Result<usize> {
        Err(io::ErrorKind::BrokenPipe.into())
    }
    fn flush(&mut self) -> io::Result<()> { Ok(()) }
}

#[test]
fn exit_policy() {
    use input::AutoSource;

    let text = "2\n1\n4\n1\nfour";
    let bad = || transcript(AutoSource::from(text), Engine::Naive);

    let (res, out) = bad();
    assert_eq!(out, "NO\n");
    assert!(finish(res, false).is_ok());

    let (res, _) = bad();
    let e = finish(res, true).unwrap_err();
    assert!(e.to_string().contains("`four`"), "{e}");

    assert!(finish(Ok(2), true).is_ok());

    for strict in [false, true] {
        let src = AutoSource::from("1\n1\n5");
        let res = run(src, &mut ClosedPipe, Engine::default());
        assert!(matches!(res, Err(Error::Write(_))));
        assert!(finish(res, strict).is_err());
    }
}

#[test]
fn args() {
    let args = Args::parse_from(["derange"]);
    assert_eq!(args.engine, Engine::Incremental);
    assert!(!args.strict && !args.streaming);

    let args = Args::parse_from([
        "derange",
        "--engine",
        "naive",
        "--strict",
        "--streaming",
    ]);
    assert_eq!(args.engine, Engine::Naive);
    assert!(args.strict && args.streaming);

    let bad = Args::try_parse_from(["derange", "--engine", "exhaustive"]);
    assert!(bad.is_err());
}
