use std::path::PathBuf;

pub const DEFAULT_COUNT_HINT: &str = "2-3";

pub fn default_work_duration_minutes() -> u64 {
    25
}

pub fn default_break_duration_minutes() -> u64 {
    5
}

pub fn default_system_prompt() -> String {
    "You are a task breakdown expert. Break down tasks into specific, actionable subtasks \
     that can be completed in 3 or fewer pomodoro sessions (75 minutes total)."
        .to_string()
}

pub fn default_timeout_sec() -> u64 {
    120
}

pub fn default_openai_model() -> String {
    "gpt-3.5-turbo".to_string()
}

pub fn default_openai_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

pub fn default_api_key_env() -> String {
    "OPENAI_API_KEY".to_string()
}

pub fn default_claude_binary() -> PathBuf {
    // Check common install location first
    if let Some(home) = std::env::var_os("HOME") {
        let local_path = PathBuf::from(home).join(".claude/local/claude");
        if local_path.exists() {
            return local_path;
        }
    }
    // Fall back to PATH lookup
    PathBuf::from("claude")
}

pub fn default_claude_model() -> String {
    "sonnet".to_string()
}

pub fn default_speech_binary() -> PathBuf {
    if cfg!(target_os = "macos") {
        PathBuf::from("say")
    } else {
        PathBuf::from("espeak")
    }
}

pub fn default_rate_flag() -> String {
    if cfg!(target_os = "macos") {
        "-r".to_string()
    } else {
        "-s".to_string()
    }
}

pub fn default_speech_rate() -> Option<u32> {
    Some(150)
}

pub fn default_true() -> bool {
    true
}
