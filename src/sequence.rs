pub(crate) mod range;
mod sort;
#[cfg(test)]
mod tests;
mod traits;

pub use traits::Clear;
pub use traits::Sequence;
