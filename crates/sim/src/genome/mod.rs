//! Genome structures: the diploid individual and its maternal-effect matrix.

mod individual;

pub use individual::{Individual, MaternalMatrix};
