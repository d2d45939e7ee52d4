mod catalog_state;
mod command_sender;

pub use catalog_state::{CatalogState, CatalogView};
pub use command_sender::CatalogCommandSender;
