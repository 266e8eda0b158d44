pub mod config;
pub mod error;
pub mod record;
pub mod store;

pub use config::{load_dotenv, StoreConfig};
pub use error::{Result, StoreError};
pub use record::{Album, NewAlbum};
pub use store::RecordStore;
