pub mod riesgo_env;
