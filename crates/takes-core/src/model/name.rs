/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn sanitize(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Return `name` unchanged if it is free, otherwise the first free name
/// reached by incrementing its trailing number (or appending `1`, `2`, ...
/// when it has none).
///
/// `t1` taken yields `t2`; `shot` taken yields `shot1`. A gap below an
/// existing digit run is never probed: with `t5` taken, the answer is `t6`
/// even if `t1` is free.
pub fn allocate<S: AsRef<str>>(name: &str, existing: &[S]) -> String {
    let taken = |candidate: &str| existing.iter().any(|e| e.as_ref() == candidate);

    let mut candidate = name.to_string();
    let mut appended = 1u64;
    while taken(&candidate) {
        match split_trailing_number(&candidate) {
            Some((stem, number)) => {
                candidate = format!("{stem}{}", number + 1);
            }
            None => {
                candidate = format!("{candidate}{appended}");
                appended += 1;
            }
        }
    }
    candidate
}

/// Split `shot012` into (`shot`, 12). `None` when there is no trailing digit
/// run or it does not fit in a u64.
fn split_trailing_number(name: &str) -> Option<(&str, u64)> {
    let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
    if stem.len() == name.len() {
        return None;
    }
    let number = name[stem.len()..].parse::<u64>().ok()?;
    number.checked_add(1)?;
    Some((stem, number))
}
