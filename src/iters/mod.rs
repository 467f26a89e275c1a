
mod iter;
mod iter_mut;
mod into_iter;

pub use self::{
    iter::*,
    iter_mut::*,
    into_iter::*,
};

macro_rules! node_err {
    () => (concat!("SingleList nodes not maintained: at ", file!(), ":", line!(),))
}

pub(crate) use node_err;
