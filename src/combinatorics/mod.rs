//! Cartesian products, permutations and combinations.

mod permutations;
mod product;

pub use permutations::{
    Combinations, Permutations, Picks, PoolInit, combinations, combinations_with_replacement,
    permutations,
};
pub use product::{Odometer, Product, ProductInit, product};
