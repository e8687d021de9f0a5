pub mod settings_mapper;
pub mod stats_mapper;
