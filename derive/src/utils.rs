use darling::FromMeta;

/// naming convention applied to every member without an explicit `rename`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RenameRule {
    /// keep the member name as written
    Verbatim,
    /// `xgrid_unif` becomes `xgridUnif`
    CamelCase,
}

impl Default for RenameRule {
    fn default() -> Self {
        RenameRule::Verbatim
    }
}

impl FromMeta for RenameRule {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "camelCase" => Ok(RenameRule::CamelCase),
            "verbatim" => Ok(RenameRule::Verbatim),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

impl RenameRule {
    pub(crate) fn apply(self, member: &str) -> String {
        match self {
            RenameRule::Verbatim => member.to_string(),
            RenameRule::CamelCase => camel_case(member),
        }
    }
}

fn camel_case(member: &str) -> String {
    let mut out = String::with_capacity(member.len());
    let mut upper = false;

    for c in member.trim_start_matches("r#").chars() {
        if c == '_' {
            // leading underscores are dropped, not capitalised
            upper = !out.is_empty();
            continue;
        }

        if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }

    out
}

#[test]
fn camel_case_names() {
    assert_eq!(camel_case("nx"), "nx");
    assert_eq!(camel_case("n_dim"), "nDim");
    assert_eq!(camel_case("xgrid_unif"), "xgridUnif");
    assert_eq!(camel_case("user_wall_vel"), "userWallVel");
    assert_eq!(camel_case("_hidden"), "hidden");
}
