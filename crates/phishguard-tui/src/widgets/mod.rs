//! Custom widget components

mod detector;
mod header;
mod pages;
mod result_card;
mod status_bar;

pub use detector::DetectorView;
pub use header::MainHeader;
pub use pages::PageContent;
pub use result_card::ResultCard;
pub use status_bar::StatusBar;
