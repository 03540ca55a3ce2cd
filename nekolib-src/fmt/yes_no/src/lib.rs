use std::fmt;

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct YESNO(pub bool);

impl fmt::Display for YESNO {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(if self.0 { "YES" } else { "NO" })
    }
}

#[test]
fn sanity_check() {
    assert_eq!(format!("{}", YESNO(true)), "YES");
    assert_eq!(format!("{}", YESNO(false)), "NO");
    assert_eq!(format!("{:>4}", YESNO(false)), "  NO");
}
