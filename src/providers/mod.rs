pub mod tgju;

pub use tgju::{DEFAULT_BASE_URL, TgjuProvider, fetch_price};
