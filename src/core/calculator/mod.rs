pub mod aggregate;
pub mod compare;
pub mod filter;
pub mod grouping;
pub mod series;
pub mod staking;
pub mod tournament;
