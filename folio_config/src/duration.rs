use std::ops::Deref;

use serde::Deserialize;

/// A duration written as whitespace separated parts like `"1h 30m"`.
///
/// Supported units are `ms`, `s`, `m`, `h` and `d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration(pub std::time::Duration);

impl From<Duration> for std::time::Duration {
    fn from(value: Duration) -> Self {
        value.0
    }
}

impl Deref for Duration {
    type Target = std::time::Duration;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::str::FromStr for Duration {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace()
            .try_fold(std::time::Duration::ZERO, |total, part| {
                let unit_start = part
                    .find(|c: char| !c.is_ascii_digit())
                    .ok_or("Missing duration unit")?;
                let (amount, unit) = part.split_at(unit_start);
                let amount = amount.parse::<u64>().map_err(|_| "Invalid duration amount")?;
                let part = match unit {
                    "ms" => Some(std::time::Duration::from_millis(amount)),
                    "s" => Some(std::time::Duration::from_secs(amount)),
                    "m" => amount.checked_mul(60).map(std::time::Duration::from_secs),
                    "h" => amount.checked_mul(60 * 60).map(std::time::Duration::from_secs),
                    "d" => amount
                        .checked_mul(24 * 60 * 60)
                        .map(std::time::Duration::from_secs),
                    _ => return Err("Invalid duration unit"),
                };
                part.and_then(|part| total.checked_add(part))
                    .ok_or("Duration too large")
            })
            .map(Self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration() {
        for (input, expected) in [
            ("13s", Some(13_000)),
            ("250ms", Some(250)),
            ("42m", Some(42 * 60 * 1000)),
            ("7h", Some(7 * 60 * 60 * 1000)),
            ("2d", Some(2 * 24 * 60 * 60 * 1000)),
            ("", Some(0)),
            ("1h 30m 5s", Some(((60 + 30) * 60 + 5) * 1000)),
            ("xyz", None),
            ("10", None),
            ("7dd", None),
            ("s", None),
            ("18446744073709551615h", None),
            ("18446744073709551615s 1s", None),
        ] {
            let input = serde_json::Value::String(input.into());
            let output = serde_json::from_value::<Duration>(input)
                .ok()
                .map(|x| x.as_millis() as u64);
            assert_eq!(output, expected);
        }
    }

    #[test]
    fn too_large() {
        assert_eq!(
            "999999999999999999d".parse::<Duration>().map(|_| ()),
            Err("Duration too large")
        );
        assert_eq!(
            format!("{}s 1s", u64::MAX).parse::<Duration>().map(|_| ()),
            Err("Duration too large")
        );
    }
}
