mod array;

pub use array::FixedArr;
