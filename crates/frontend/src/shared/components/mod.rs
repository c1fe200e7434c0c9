pub mod athlete_card;
pub mod page_header;
pub mod stat_card;

pub use athlete_card::AthleteCard;
pub use page_header::PageHeader;
pub use stat_card::StatCard;
