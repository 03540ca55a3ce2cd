use std::fmt;

pub struct SpaceSep<I>(pub I);

fn join<I, T, F>(
    iter: I,
    f: &mut fmt::Formatter<'_>,
    mut each: F,
) -> fmt::Result
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    let mut iter = iter.into_iter();
    if let Some(first) = iter.by_ref().next() {
        each(&first, f)?;
    }
    iter.try_for_each(|rest| {
        f.write_str(" ")?;
        each(&rest, f)
    })
}

macro_rules! impl_fmt {
    ( $( $fmt:ident )* ) => { $(
        impl<I, T: fmt::$fmt> fmt::$fmt for SpaceSep<I>
        where
            I: IntoIterator<Item = T> + Clone,
        {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                join(self.0.clone(), f, |x, f| fmt::$fmt::fmt(x, f))
            }
        }
    )* }
}

impl_fmt! { Debug Display }

#[test]
fn sanity_check() {
    let a = [0, 1, 2];
    assert_eq!(format!("{}", SpaceSep(&a[..0])), "");
    assert_eq!(format!("{}", SpaceSep(&a[..1])), "0");
    assert_eq!(format!("{}", SpaceSep(&a)), "0 1 2");
}

#[test]
fn signed() {
    let d: Vec<i64> = vec![2, -1, 4, -3];
    assert_eq!(format!("{}", SpaceSep(&d)), "2 -1 4 -3");
    assert_eq!(format!("{:+}", SpaceSep(&d)), "+2 -1 +4 -3");
    assert_eq!(
        format!("{:?}", SpaceSep(d.iter().map(|x| x * 10))),
        "20 -10 40 -30"
    );
}
