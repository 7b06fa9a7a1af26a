use {
    std::fmt,
    thiserror::Error,
    crate::slot::SlotRole
};

/// How a variant was asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VariantKey {
    Name(String),
    Index(u32)
}

impl fmt::Display for VariantKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VariantKey::Name(name) => write!(f, "{:?}", name),
            VariantKey::Index(index) => write!(f, "with index {}", index)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown acceleration type {0}")]
pub struct UnknownVariant(pub VariantKey);

/// A slot's text could not be read as the number its role requires.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value {text:?} for {slot}")]
pub struct ParseError {
    pub slot: SlotRole,
    pub text: String
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    UnknownVariant(#[from] UnknownVariant),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unknown parameter {0:?}")]
    UnknownSlot(String),
    #[error("expected `<parameter>=<value>`, got {0:?}")]
    Assignment(String)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            UnknownVariant(VariantKey::Name("Jump".into())).to_string(),
            "unknown acceleration type \"Jump\""
        );
        assert_eq!(
            UnknownVariant(VariantKey::Index(99)).to_string(),
            "unknown acceleration type with index 99"
        );
        assert_eq!(
            ParseError { slot: SlotRole::Midpoint, text: "abc".into() }.to_string(),
            "invalid value \"abc\" for midpoint"
        );
        assert_eq!(
            Error::Assignment("acceleration".into()).to_string(),
            "expected `<parameter>=<value>`, got \"acceleration\""
        )
    }
}
