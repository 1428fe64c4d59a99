mod engine_scenarios;
mod properties;
