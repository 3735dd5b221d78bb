pub mod config_cmd;
pub mod entries;
pub mod groups;
pub mod nav;
pub mod tile;
