use std::fmt;
use std::ops::{
    Deref,
    DerefMut,
};
use crate::review::*;

impl From<Vec<Review>> for Reviews {
    fn from(args: Vec<Review>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Review; N]> for Reviews {
    fn from(args: [Review; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Reviews {
    type Target = Vec<Review>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Reviews {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl fmt::Display for SpecValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // flags render as Yes/No in the specs table
            SpecValue::Flag(true) => f.write_str("Yes"),
            SpecValue::Flag(false) => f.write_str("No"),
            SpecValue::Number(value) => write!(f, "{value}"),
            SpecValue::Text(value) => f.write_str(value),
        }
    }
}
