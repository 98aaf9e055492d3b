pub mod match_prefix;
