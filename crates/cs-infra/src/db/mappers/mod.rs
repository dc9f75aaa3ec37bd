mod clip_data_mapper;
mod clip_mapper;

pub use clip_data_mapper::ClipDataRowMapper;
pub use clip_mapper::ClipRowMapper;
