#![no_main]

use libfuzzer_sys::fuzz_target;
use synthfit::config::RunConfig;
use synthfit::pipeline;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Parsing must not panic; accepted configs must run or fail cleanly
        if let Ok(config) = RunConfig::from_toml_str(input) {
            if config.parameters.point_count <= 10_000 {
                let _ = pipeline::run_with_top_k(&config.parameters, config.report.top_k);
            }
        }
    }
});
