use std::ops::{
    Deref,
    DerefMut,
};
use crate::video::*;

impl From<Vec<Video>> for Videos {
    fn from(args: Vec<Video>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Video; N]> for Videos {
    fn from(args: [Video; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Videos {
    type Target = Vec<Video>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Videos {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
