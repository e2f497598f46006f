pub mod aurora_api;
