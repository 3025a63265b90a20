use std::ops::BitOr;

/// Controls how much a [`Field`](crate::Field) prints about itself.
///
/// * `dscrp`: append the description to the key, `key(description)`
/// * `vmap`: append the symbol map to the key, `key[0: False, 1: True]`
/// * `vorig`: print the original symbol instead of the stored code. This is meant for
///   inspection only; the solver cannot read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Verbose {
    pub dscrp: bool,
    pub vmap: bool,
    pub vorig: bool,
}

impl Verbose {
    pub const NONE: Verbose = Verbose::new(false, false, false);
    pub const DSCRP: Verbose = Verbose::new(true, false, false);
    pub const VMAP: Verbose = Verbose::new(false, true, false);
    pub const KEYALL: Verbose = Verbose::new(true, true, false);
    pub const VORIG: Verbose = Verbose::new(false, false, true);
    pub const ALL: Verbose = Verbose::new(true, true, true);

    pub const fn new(dscrp: bool, vmap: bool, vorig: bool) -> Self {
        Self { dscrp, vmap, vorig }
    }
}

impl BitOr for Verbose {
    type Output = Verbose;

    fn bitor(self, rhs: Verbose) -> Verbose {
        Verbose::new(
            self.dscrp || rhs.dscrp,
            self.vmap || rhs.vmap,
            self.vorig || rhs.vorig,
        )
    }
}

#[test]
fn flags_combine() {
    assert_eq!(Verbose::DSCRP | Verbose::VMAP, Verbose::KEYALL);
    assert_eq!(Verbose::KEYALL | Verbose::VORIG, Verbose::ALL);
}
