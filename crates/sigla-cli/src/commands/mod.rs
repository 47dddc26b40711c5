pub mod abbrev;
