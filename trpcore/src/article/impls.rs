use std::ops::{
    Deref,
    DerefMut,
};
use crate::article::*;

impl From<Vec<Article>> for Articles {
    fn from(args: Vec<Article>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Article; N]> for Articles {
    fn from(args: [Article; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Articles {
    type Target = Vec<Article>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Articles {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
