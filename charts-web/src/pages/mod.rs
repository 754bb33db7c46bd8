mod home;
mod layout;
mod search;

pub use home::Home;
pub use layout::AppLayout;
pub use search::Search;
