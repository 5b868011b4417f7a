pub mod bankroll;
pub mod currency;
pub mod dashboard;
pub mod location;
pub mod session;
pub mod snapshot;
pub mod stakes;
pub mod transaction;

pub use bankroll::{Bankroll, BankrollSelector};
pub use currency::CurrencyType;
pub use dashboard::Dashboard;
pub use location::Location;
pub use session::{
    Session, SessionDuration, SessionType, Staker, TournamentDetails, TournamentSize, TournamentSpeed,
};
pub use snapshot::Snapshot;
pub use stakes::Stakes;
pub use transaction::{Transaction, TransactionType};
