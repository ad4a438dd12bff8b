//! Length-preserving prefix/suffix splicing.

const UUID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

/// Overwrite the head and tail of `value` with `prefix` and `suffix`.
///
/// Lengths are counted in characters and the output always has as many
/// characters as `value`. When the affixes do not fit, the prefix wins and
/// the remaining room is filled from the end of the suffix.
pub fn splice_affix(value: &str, prefix: &str, suffix: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let n = chars.len();
    let p = prefix.chars().count();
    let s = suffix.chars().count();

    if p + s < n {
        let mut out = String::with_capacity(value.len() + prefix.len() + suffix.len());
        out.push_str(prefix);
        out.extend(&chars[p..n - s]);
        out.push_str(suffix);
        return out;
    }

    let head: String = prefix.chars().take(n).collect();
    let room = n - p.min(n);
    let tail: String = suffix.chars().skip(s - room.min(s)).collect();
    head + &tail
}

/// Splice into the 32 hex characters of a UUID and restore 8-4-4-4-12 hyphens.
pub fn splice_uuid(uuid: &str, prefix: &str, suffix: &str) -> String {
    let body: String = uuid.chars().filter(|ch| *ch != '-').collect();
    let spliced: Vec<char> = splice_affix(&body, prefix, suffix).chars().collect();

    let mut out = String::with_capacity(36);
    let mut start = 0;
    for (index, width) in UUID_GROUPS.iter().enumerate() {
        if index > 0 {
            out.push('-');
        }
        let end = (start + width).min(spliced.len());
        out.extend(&spliced[start.min(end)..end]);
        start = end;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generic_rule_overwrites_windows() {
        assert_eq!(splice_affix("abcdefgh", "XY", "Z"), "XYcdefgZ");
        assert_eq!(splice_affix("abcdefgh", "", ""), "abcdefgh");
    }

    #[test]
    fn degrade_rule_prefers_prefix_then_suffix_tail() {
        assert_eq!(splice_affix("abcd", "XY", "12345"), "XY45");
        assert_eq!(splice_affix("abcd", "LONGPREFIX", "S"), "LONG");
        assert_eq!(splice_affix("abcd", "XY", "ZW"), "XYZW");
        assert_eq!(splice_affix("", "XY", "Z"), "");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let out = splice_affix("abcdef", "é", "ß");
        assert_eq!(out, "ébcdeß");
        assert_eq!(out.chars().count(), 6);
    }

    #[test]
    fn uuid_keeps_hyphen_layout() {
        let uuid = "123e4567-e89b-42d3-a456-426614174000";
        assert_eq!(
            splice_uuid(uuid, "ab", "ff"),
            "ab3e4567-e89b-42d3-a456-4266141740ff"
        );
        let long = "x".repeat(40);
        let out = splice_uuid(uuid, &long, "");
        assert_eq!(out, "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx");
    }
}
