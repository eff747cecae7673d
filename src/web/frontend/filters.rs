use std::collections::HashMap;
use tera::Value;

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Format a number of bytes the way upload limits are announced, e.g. `5 MB`.
pub fn human_size(bytes: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let mut size: u64 = serde::Deserialize::deserialize(bytes)?;
    let mut unit = 0;
    while size >= 1024 && size % 1024 == 0 && unit < UNITS.len() - 1 {
        size /= 1024;
        unit += 1;
    }
    Ok(Value::String(format!("{size} {}", UNITS[unit])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        bytes = {0, 512, 1024, 5 * 1024 * 1024, 10 * 1024 * 1024, 1536, 2 * 1024 * 1024 * 1024},
        expected = {"0 B", "512 B", "1 KB", "5 MB", "10 MB", "1536 B", "2 GB"}
    )]
    fn should_format_size(bytes: u64, expected: &str) {
        let result = human_size(&Value::from(bytes), &HashMap::new()).unwrap();
        assert_eq!(Value::String(expected.to_owned()), result);
    }

    #[test]
    fn should_refuse_non_numbers() {
        assert!(human_size(&Value::from("5MB"), &HashMap::new()).is_err());
    }
}
