//! Char-indexed editing helpers for single-line query buffers. Cursor
//! positions are char offsets, not byte offsets.

pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

pub fn clamp_cursor(cursor: usize, value: &str) -> usize {
    cursor.min(char_count(value))
}

pub fn insert_char(value: &mut String, cursor: &mut usize, ch: char) {
    let pos = clamp_cursor(*cursor, value);
    let byte_pos = byte_index_at_char(value, pos);
    value.insert(byte_pos, ch);
    *cursor = pos + 1;
}

pub fn backspace_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos - 1);
    value.remove(byte_pos);
    *cursor = pos - 1;
    true
}

pub fn delete_char(value: &mut String, cursor: &mut usize) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    let byte_pos = byte_index_at_char(value, pos);
    value.remove(byte_pos);
    *cursor = pos;
    true
}

pub fn move_left(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos == 0 {
        return false;
    }
    *cursor = pos - 1;
    true
}

pub fn move_right(cursor: &mut usize, value: &str) -> bool {
    let pos = clamp_cursor(*cursor, value);
    if pos >= char_count(value) {
        return false;
    }
    *cursor = pos + 1;
    true
}

fn byte_index_at_char(value: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    value
        .char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(value.len())
}

#[cfg(test)]
mod tests {
    use super::{backspace_char, delete_char, insert_char, move_left, move_right};

    #[test]
    fn insert_advances_cursor_past_multibyte_chars() {
        let mut value = String::from("té");
        let mut cursor = 2;
        insert_char(&mut value, &mut cursor, 'e');
        assert_eq!(value, "tée");
        assert_eq!(cursor, 3);
    }

    #[test]
    fn backspace_at_start_is_a_no_op() {
        let mut value = String::from("tea");
        let mut cursor = 0;
        assert!(!backspace_char(&mut value, &mut cursor));
        assert_eq!(value, "tea");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut value = String::from("tea");
        let mut cursor = 1;
        assert!(delete_char(&mut value, &mut cursor));
        assert_eq!(value, "ta");
        assert_eq!(cursor, 1);
        let mut end = 2;
        assert!(!delete_char(&mut value, &mut end));
    }

    #[test]
    fn moves_stop_at_the_edges() {
        let value = "ab";
        let mut cursor = 0;
        assert!(!move_left(&mut cursor, value));
        assert!(move_right(&mut cursor, value));
        assert!(move_right(&mut cursor, value));
        assert!(!move_right(&mut cursor, value));
        assert_eq!(cursor, 2);
    }
}
