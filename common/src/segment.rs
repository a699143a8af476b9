//! Suggestion-text segmenter
//!
//! Splits free text into the plain remainder and the top-level
//! parenthetical citation groups, e.g.
//! `"(มาตรา 5) ต้องซ่อม"` -> groups `["(มาตรา 5)"]`, clean `"ต้องซ่อม"`.

/// Result of [`segment`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segmented {
    /// Text outside any group; fragments joined with single spaces.
    pub clean: String,
    /// Top-level `(...)` spans in input order, parens included.
    pub groups: Vec<String>,
}

/// Split `text` into plain text and top-level parenthetical groups.
///
/// Single left-to-right scan with a depth counter. Nested parens stay
/// inside their enclosing top-level group. A group still open at end of
/// input is dropped, not flushed into `clean` — legacy behavior that
/// downstream format strings rely on. A stray `)` at depth 0 is plain
/// text. Total over all inputs; never fails.
pub fn segment(text: &str) -> Segmented {
    let mut parts: Vec<String> = Vec::new();
    let mut buf = String::new();
    let mut group = String::new();
    let mut groups: Vec<String> = Vec::new();
    let mut depth = 0usize;

    for ch in text.chars() {
        match ch {
            '(' => {
                if depth == 0 {
                    let pending = buf.trim();
                    if !pending.is_empty() {
                        parts.push(pending.to_string());
                    }
                    buf.clear();
                }
                depth += 1;
                group.push(ch);
            }
            ')' if depth > 0 => {
                group.push(ch);
                depth -= 1;
                if depth == 0 {
                    groups.push(std::mem::take(&mut group));
                }
            }
            _ => {
                if depth == 0 {
                    buf.push(ch);
                } else {
                    group.push(ch);
                }
            }
        }
    }

    let pending = buf.trim();
    if !pending.is_empty() {
        parts.push(pending.to_string());
    }
    // depth > 0 here means an unterminated group; `group` is discarded.

    Segmented {
        clean: parts.join(" "),
        groups,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let seg = segment("hello world");
        assert_eq!(seg.clean, "hello world");
        assert!(seg.groups.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(segment(""), Segmented::default());
    }

    #[test]
    fn test_single_group() {
        let seg = segment("(มาตรา 5) ต้องซ่อม");
        assert_eq!(seg.groups, vec!["(มาตรา 5)"]);
        assert_eq!(seg.clean, "ต้องซ่อม");
    }

    #[test]
    fn test_nested_parens_collapse_to_one_group() {
        let seg = segment("A (B (C) D) E");
        assert_eq!(seg.groups, vec!["(B (C) D)"]);
        assert_eq!(seg.clean, "A E");
    }

    #[test]
    fn test_multiple_groups_keep_order() {
        let seg = segment("(กฎกระทรวง ข้อ 12) ติดป้าย (มาตรา 40) แก้ไขภายใน 30 วัน");
        assert_eq!(seg.groups, vec!["(กฎกระทรวง ข้อ 12)", "(มาตรา 40)"]);
        assert_eq!(seg.clean, "ติดป้าย แก้ไขภายใน 30 วัน");
    }

    #[test]
    fn test_empty_group_is_kept() {
        let seg = segment("ก่อน () หลัง");
        assert_eq!(seg.groups, vec!["()"]);
        assert_eq!(seg.clean, "ก่อน หลัง");
    }

    #[test]
    fn unclosed_group_is_dropped() {
        // Known quirk: the trailing open buffer is not flushed into clean
        let seg = segment("A (B");
        assert!(seg.groups.is_empty());
        assert_eq!(seg.clean, "A");
    }

    #[test]
    fn test_unclosed_nested_group_is_dropped() {
        let seg = segment("A (B (C) D");
        assert!(seg.groups.is_empty());
        assert_eq!(seg.clean, "A");
    }

    #[test]
    fn test_stray_close_paren_is_plain_text() {
        let seg = segment("A ) B");
        assert!(seg.groups.is_empty());
        assert_eq!(seg.clean, "A ) B");
    }

    #[test]
    fn test_whitespace_trimmed() {
        let seg = segment("  ซ่อมฝ้าเพดาน  ");
        assert_eq!(seg.clean, "ซ่อมฝ้าเพดาน");
    }

    #[test]
    fn test_balanced_input_preserves_content_order() {
        // Non-paren content is reconstructable from clean + groups, in order
        let input = "ตรวจพบ (ก) รอยร้าว (ข) น้ำรั่ว";
        let seg = segment(input);
        assert_eq!(seg.groups, vec!["(ก)", "(ข)"]);
        assert_eq!(seg.clean, "ตรวจพบ รอยร้าว น้ำรั่ว");

        let stripped: String = input.chars().filter(|c| *c != '(' && *c != ')').collect();
        for word in seg.clean.split(' ') {
            assert!(stripped.contains(word));
        }
        for group in &seg.groups {
            assert!(input.contains(group.as_str()));
        }
    }
}
