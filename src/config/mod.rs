#[cfg(feature = "cli")]
pub mod cli;
pub mod input;
pub mod output;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// 2010 年人口普查中美國前 26 大都會區人口
pub const CENSUS_POPULATIONS: [u64; 26] = [
    18897109, 12828837, 9461105, 6371773, 5965343, 5946800, 5582170, 5564635, 5268860, 4552402,
    4335391, 4296250, 4224851, 4192887, 3439809, 3279833, 3095313, 2812896, 2783243, 2710489,
    2543482, 2356285, 2226009, 2149127, 2142508, 2134411,
];

pub const CENSUS_TARGET: u64 = 100_000_000;
