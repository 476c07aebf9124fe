//! Trimming of text shared by every label on an axis.
//!
//! Labels of one axis are compared as a set: a suffix that starts at a `.` or
//! a space and is common to all of them (".00" for whole numbers, " V" for a
//! unit) is dropped, as is a common prefix ending in a space.

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let (ab, bb) = (a.as_bytes(), b.as_bytes());
    let mut breakpoint = 0;
    for i in 0..ab.len().min(bb.len()) {
        if ab[i] != bb[i] {
            break;
        }
        if ab[i] == b' ' {
            breakpoint = i + 1;
        }
    }
    &a[..breakpoint]
}

fn common_suffix<'a>(a: &'a str, b: &str) -> &'a str {
    let (ab, bb) = (a.as_bytes(), b.as_bytes());
    let mut breakpoint = 0;
    for i in 1..=ab.len().min(bb.len()) {
        let c = ab[ab.len() - i];
        if c != bb[bb.len() - i] {
            break;
        }
        if c == b'.' || c == b' ' {
            breakpoint = i;
        }
    }
    &a[a.len() - breakpoint..]
}

/// Strips the shared prefix and suffix in place. Needs at least two labels.
pub fn strip_common_affixes(labels: &mut [String]) {
    if labels.len() < 2 {
        return;
    }

    let (prefix_len, suffix_len) = {
        let first = labels[0].as_str();
        let prefix = labels[1..]
            .iter()
            .fold(first, |acc, l| common_prefix(acc, l));
        let suffix = labels[1..]
            .iter()
            .fold(first, |acc, l| common_suffix(acc, l));
        (prefix.len(), suffix.len())
    };
    if prefix_len == 0 && suffix_len == 0 {
        return;
    }

    for label in labels.iter_mut() {
        let end = label.len() - suffix_len;
        let start = prefix_len.min(end);
        *label = label[start..end].to_string();
    }
}
