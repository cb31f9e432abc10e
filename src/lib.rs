//! World Visited Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod geodata;
pub mod listfile;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState, UiState, ViewState};
pub use core::{
    locate_by_ids, locate_by_point, Camera2D, CountryCatalog, CountryRecord, LandEdit, LandLayer,
    MapExtent,
};
pub use geodata::{load_country_catalog, parse_country_catalog, CatalogError};
pub use listfile::{format_visited_list, parse_visited_list};
pub use shared::{MapOptions, RenderScene};
