pub mod logging;

pub mod http;
pub mod path_map;
pub mod plex;
pub mod transfer;
