mod array;
mod inner;
mod into_iter;

pub use array::DynArr;
pub use into_iter::IntoIter;
