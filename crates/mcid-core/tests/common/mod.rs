pub mod jar;
