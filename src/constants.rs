// Process-wide constants, loaded from the environment with defaults.

use std::env;

// Use lazy_static to initialize static variables safely.
lazy_static::lazy_static! {
    pub static ref OPENAI_BASE_URL: String = env::var("OPENAI_BASE_URL").unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
    pub static ref OPENAI_API_KEY: String = env::var("OPENAI_API_KEY").unwrap_or_default();
    pub static ref CHAT_MODEL: String = env::var("MEU_CHAT_MODEL").unwrap_or_else(|_| "gpt-4o".to_string());
    pub static ref DATA_PATH: String = env::var("MEU_DATA_PATH").unwrap_or_else(|_| "meu_logistics_data.csv".to_string());
}
