//! Whitespace-separated token input with recoverable errors.
//!
//! # Examples
//! ```
//! use input::{scan, AutoSource, ReadError};
//!
//! fn read_case(src: &mut AutoSource<&[u8]>) -> Result<Vec<i64>, ReadError> {
//!     scan! {
//!         from src,
//!         a: [i64],
//!     }
//!     Ok(a)
//! }
//!
//! let mut src = AutoSource::from("3 2 1 4 2 x");
//! assert_eq!(read_case(&mut src).unwrap(), [2, 1, 4]);
//! assert!(matches!(read_case(&mut src), Err(ReadError::Parse { .. })));
//! ```

use std::any::type_name;
use std::collections::VecDeque;
use std::fmt::Display;
use std::io::{self, BufRead, Read};
use std::marker::PhantomData;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("unexpected end of input while reading `{ty}`")]
    Eof { ty: &'static str },
    #[error("cannot read `{token}` as `{ty}`: {reason}")]
    Parse {
        token: String,
        ty: &'static str,
        reason: String,
    },
    #[error("failed to read input")]
    Io(#[from] io::Error),
}

pub trait Source<R: BufRead> {
    fn next_token(&mut self) -> Result<Option<String>, ReadError>;

    /// Like [`next_token`](Source::next_token), but running out of input is
    /// an error naming the type `ty` that was expected.
    fn expect_token(&mut self, ty: &'static str) -> Result<String, ReadError> {
        self.next_token()?.ok_or(ReadError::Eof { ty })
    }
}

impl<R: BufRead, S: Source<R>> Source<R> for &'_ mut S {
    fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        (*self).next_token()
    }
}

pub type AutoSource<R> = OnceSource<R>;

/// Reads the whole input up front and hands out its tokens.
pub struct OnceSource<R: BufRead> {
    tokens: std::vec::IntoIter<String>,
    _phantom: PhantomData<R>,
}

impl<R: BufRead> OnceSource<R> {
    pub fn new(mut source: R) -> Result<Self, ReadError> {
        let mut context = String::new();
        source.read_to_string(&mut context)?;
        Ok(Self::tokenize(&context))
    }

    fn tokenize(context: &str) -> Self {
        let tokens: Vec<_> =
            context.split_whitespace().map(|s| s.to_owned()).collect();
        Self {
            tokens: tokens.into_iter(),
            _phantom: PhantomData,
        }
    }
}

impl<R: BufRead> Source<R> for OnceSource<R> {
    fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        Ok(self.tokens.next())
    }
}

impl<'a> From<&'a str> for OnceSource<&'a [u8]> {
    fn from(s: &'a str) -> Self { Self::tokenize(s) }
}

/// Reads one line at a time, only when the buffered tokens run out.
pub struct LineSource<R: BufRead> {
    reader: R,
    tokens: VecDeque<String>,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, tokens: VecDeque::new() }
    }
}

impl<R: BufRead> Source<R> for LineSource<R> {
    fn next_token(&mut self) -> Result<Option<String>, ReadError> {
        while self.tokens.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.tokens.extend(line.split_whitespace().map(|s| s.to_owned()));
        }
        Ok(self.tokens.pop_front())
    }
}

impl<'a> From<&'a str> for LineSource<&'a [u8]> {
    fn from(s: &'a str) -> Self { Self::new(s.as_bytes()) }
}

pub trait Readable {
    type Output;
    fn read<R: BufRead, S: Source<R>>(
        source: &mut S,
    ) -> Result<Self::Output, ReadError>;
}

impl<T: FromStr> Readable for T
where
    T::Err: Display,
{
    type Output = T;
    fn read<R: BufRead, S: Source<R>>(source: &mut S) -> Result<T, ReadError> {
        let ty = type_name::<T>();
        let token = source.expect_token(ty)?;
        token.parse().map_err(|e: T::Err| ReadError::Parse {
            reason: e.to_string(),
            token,
            ty,
        })
    }
}

/// Binds variables read from a [`Source`].
///
/// Every binding is a `let` followed by `?`, so the enclosing function must
/// return a `Result` whose error type implements `From<ReadError>`.
///
/// - `x: T` reads one `T`.
/// - `a: [T; n]` reads `n` values; `a: [T]` reads the length first.
/// - `p: (T, U)` reads a tuple, element by element.
#[macro_export]
macro_rules! scan {
    // terminator
    (@from [$source:expr] @rest) => {};

    // parse mutability
    (@from [$source:expr] @rest mut $($rest:tt)*) => {
        $crate::scan! {
            @from [$source]
            @mut [mut]
            @rest $($rest)*
        }
    };
    (@from [$source:expr] @rest $($rest:tt)*) => {
        $crate::scan! {
            @from [$source]
            @mut []
            @rest $($rest)*
        }
    };

    // parse variable pattern
    (@from [$source:expr] @mut [$($mut:tt)?] @rest $var:tt: $($rest:tt)*) => {
        $crate::scan! {
            @from [$source]
            @mut [$($mut)?]
            @var $var
            @kind []
            @rest $($rest)*
        }
    };

    // parse kind (type)
    (@from [$source:expr] @mut [$($mut:tt)?] @var $var:tt @kind [$($kind:tt)*] @rest) => {
        let $($mut)? $var = $crate::read_value!(@source [$source] @kind [$($kind)*])?;
    };
    (@from [$source:expr] @mut [$($mut:tt)?] @var $var:tt @kind [$($kind:tt)*] @rest, $($rest:tt)*) => {
        $crate::scan!(@from [$source] @mut [$($mut)?] @var $var @kind [$($kind)*] @rest);
        $crate::scan!(@from [$source] @rest $($rest)*);
    };
    (@from [$source:expr] @mut [$($mut:tt)?] @var $var:tt @kind [$($kind:tt)*] @rest $tt:tt $($rest:tt)*) => {
        $crate::scan!(@from [$source] @mut [$($mut)?] @var $var @kind [$($kind)* $tt] @rest $($rest)*);
    };

    (from $source:expr, $($rest:tt)*) => {
        #[allow(unused_variables, unused_mut)]
        let mut s = $source;
        $crate::scan! {
            @from [&mut s]
            @rest $($rest)*
        }
    };
}

/// Evaluates to `Result<_, ReadError>`; used by [`scan!`].
#[macro_export]
macro_rules! read_value {
    // variable-length array
    (@source [$source:expr] @kind [[$($kind:tt)*]]) => {
        $crate::read_value!(@vec @source [$source] @kind [] @rest $($kind)*)
    };
    (@vec @source [$source:expr] @kind [$($kind:tt)*] @rest) => {
        match <usize as $crate::Readable>::read($source) {
            Ok(len) => $crate::read_value!(@vec @source [$source] @kind [$($kind)*] @len [len]),
            Err(e) => Err(e),
        }
    };
    (@vec @source [$source:expr] @kind [$($kind:tt)*] @rest ; $($rest:tt)*) => {
        $crate::read_value!(@vec @source [$source] @kind [$($kind)*] @len [$($rest)*])
    };
    (@vec @source [$source:expr] @kind [$($kind:tt)*] @rest $tt:tt $($rest:tt)*) => {
        $crate::read_value!(@vec @source [$source] @kind [$($kind)* $tt] @rest $($rest)*)
    };
    (@vec @source [$source:expr] @kind [$($kind:tt)*] @len [$($len:tt)*]) => {{
        let len = $($len)*;
        (0..len)
            .map(|_| $crate::read_value!(@source [$source] @kind [$($kind)*]))
            .collect::<::std::result::Result<Vec<_>, $crate::ReadError>>()
    }};

    // tuple
    (@source [$source:expr] @kind [($($kinds:tt)*)]) => {
        $crate::read_value!(@tuple @source [$source] @kinds [] @current [] @rest $($kinds)*)
    };
    (@tuple @source [$source:expr] @kinds [$([$($kind:tt)*])*] @current [] @rest) => {
        (|| -> ::std::result::Result<_, $crate::ReadError> {
            Ok((
                $($crate::read_value!(@source [$source] @kind [$($kind)*])?,)*
            ))
        })()
    };
    (@tuple @source [$source:expr] @kinds [$($kinds:tt)*] @current [$($curr:tt)*] @rest) => {
        $crate::read_value!(@tuple @source [$source] @kinds [$($kinds)* [$($curr)*]] @current [] @rest)
    };
    (@tuple @source [$source:expr] @kinds [$($kinds:tt)*] @current [$($curr:tt)*] @rest, $($rest:tt)*) => {
        $crate::read_value!(@tuple @source [$source] @kinds [$($kinds)* [$($curr)*]] @current [] @rest $($rest)*)
    };
    (@tuple @source [$source:expr] @kinds [$($kinds:tt)*] @current [$($curr:tt)*] @rest $tt:tt $($rest:tt)*) => {
        $crate::read_value!(@tuple @source [$source] @kinds [$($kinds)*] @current [$($curr)* $tt] @rest $($rest)*)
    };

    // unreachable
    (@source [$source:expr] @kind []) => {
        compile_error!("Reached unreachable statement while parsing macro input.")
    };

    // normal other
    (@source [$source:expr] @kind [$kind:ty]) => {
        <$kind as $crate::Readable>::read($source)
    };
}

#[test]
fn sanity_check() -> Result<(), ReadError> {
    // primitives
    let src = AutoSource::from("1 2 3 4");
    scan! {
        from src,
        int: u32,
        frac: f64,
        ch: char,
        string: String,
    }
    assert_eq!((int, frac, ch, string), (1, 2.0, '3', "4".to_owned()));

    // lists
    let src = AutoSource::from("2 1 2 3 1 2 3 0");
    scan! {
        from src,
        n: usize,
        vec_n: [u32; n],
        vec: [u32],
        empty: [i64],
    }
    assert_eq!((vec_n, vec), (vec![1, 2], vec![1, 2, 3]));
    assert!(empty.is_empty());

    // tuples
    let src = AutoSource::from("1 2 3 4 5 6 7 8");
    scan! {
        from src,
        a: (i32, i32, (i32, i32), i32),
        (b, c): (i32, i32,),
        mut d: [i32; 1],
    }
    d.push(0);
    assert_eq!((a, b, c, d), ((1, 2, (3, 4), 5), 6, 7, vec![8, 0]));
    Ok(())
}

#[cfg(test)]
fn read_list<R: BufRead, S: Source<R>>(
    src: &mut S,
) -> Result<Vec<i64>, ReadError> {
    scan! {
        from src,
        a: [i64],
    }
    Ok(a)
}

#[test]
fn truncated() {
    let mut src = AutoSource::from("3 10 20");
    match read_list(&mut src) {
        Err(ReadError::Eof { ty }) => assert_eq!(ty, "i64"),
        res => panic!("unexpected {res:?}"),
    }

    let mut src = AutoSource::from("");
    assert!(matches!(
        read_list(&mut src),
        Err(ReadError::Eof { ty: "usize" })
    ));
}

#[test]
fn malformed() {
    let mut src = AutoSource::from("2 7 seven");
    match read_list(&mut src) {
        Err(ReadError::Parse { token, ty, .. }) => {
            assert_eq!(token, "seven");
            assert_eq!(ty, "i64");
        }
        res => panic!("unexpected {res:?}"),
    }

    let mut src = AutoSource::from("-1");
    let e = read_list(&mut src).unwrap_err();
    assert!(e.to_string().starts_with("cannot read `-1` as `usize`"));
}

#[test]
fn line_source() -> Result<(), ReadError> {
    let text = "2\n 1   2\n\n3\n4 5 6\n";
    let mut once = AutoSource::from(text);
    let mut line = LineSource::from(text);
    for _ in 0..2 {
        assert_eq!(read_list(&mut once)?, read_list(&mut line)?);
    }
    assert!(once.next_token()?.is_none());
    assert!(line.next_token()?.is_none());
    Ok(())
}

#[test]
fn once_source_from_reader() -> Result<(), ReadError> {
    let mut src = OnceSource::new(io::Cursor::new("1\n-5\n"))?;
    assert_eq!(read_list(&mut src)?, [-5]);
    Ok(())
}
