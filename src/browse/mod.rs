pub mod debounce;
pub mod pagination;
pub mod state;

pub use debounce::Debouncer;
pub use pagination::Pagination;
pub use state::BrowseState;
