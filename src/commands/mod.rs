/// Command modules for sprout.
pub mod create;
