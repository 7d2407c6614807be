mod records;
mod session;

pub use records::RecordStore;
pub use session::SessionStore;
