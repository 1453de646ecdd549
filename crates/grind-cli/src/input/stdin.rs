use serde_json::Value;
use std::io::Read;

/// Read piped JSON from stdin, if any. Interactive terminals (and empty
/// pipes) yield None so flag-based input takes over.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.trim().is_empty() {
        return Ok(None);
    }

    Ok(Some(serde_json::from_str(buffer.trim())?))
}
