//! Game room page: reads the room id and player name, loads the room from a
//! [`source::GameSource`] and renders it with Yew.

pub mod actions;
pub mod components;
pub mod config;
pub mod error;
pub mod model;
pub mod source;
pub mod state;
pub mod util;
