#[macro_use]
extern crate approx;

mod batch;
mod cells;
mod centroid_optimization;
mod fraction_matching;
mod monotonicity;
mod watertightness;
