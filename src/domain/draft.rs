//! The message draft: the locally held copy of the on-chain text.
//!
//! The draft follows a simple lifecycle: it is overwritten whenever the
//! MessageHolder resource arrives, edited freely in the panel, and handed
//! to the wallet verbatim on submit. No length limit is imposed; the
//! on-chain module accepts arbitrary UTF-8 and so does the editor.

/// An editable UTF-8 string with a cursor.
///
/// The cursor is kept as a byte offset into the text, always on a char
/// boundary; `cursor_position` exposes it as a character index for
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DraftState {
    text: String,
    cursor: usize,
}

impl DraftState {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a character index.
    pub fn cursor_position(&self) -> usize {
        self.text[..self.cursor].chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replaces the whole draft with the on-chain value and parks the
    /// cursor at the end.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }

    /// Inserts a character at the cursor and advances past it.
    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Deletes the character before the cursor (backspace).
    pub fn delete_char_before(&mut self) {
        if let Some(start) = self.boundary_before() {
            self.text.remove(start);
            self.cursor = start;
        }
    }

    /// Deletes the character under the cursor (delete key).
    pub fn delete_char_at(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(start) = self.boundary_before() {
            self.cursor = start;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Byte offset of the character immediately before the cursor, if any.
    fn boundary_before(&self) -> Option<usize> {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(start, _)| start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(text: &str) -> DraftState {
        let mut draft = DraftState::default();
        draft.set_text(text);
        draft
    }

    #[test]
    fn starts_empty_with_cursor_at_origin() {
        let draft = DraftState::default();

        assert!(draft.is_empty());
        assert_eq!(draft.text(), "");
        assert_eq!(draft.cursor_position(), 0);
    }

    #[test]
    fn set_text_replaces_edits_and_parks_cursor_at_end() {
        let mut draft = draft_with("local work");
        draft.move_cursor_home();

        draft.set_text("on-chain value");

        assert_eq!(draft.text(), "on-chain value");
        assert_eq!(draft.cursor_position(), 14);
    }

    #[test]
    fn cursor_position_counts_characters_not_bytes() {
        let draft = draft_with("héllo");

        assert_eq!(draft.cursor_position(), 5);
    }

    #[test]
    fn typing_appends_at_the_end() {
        let mut draft = DraftState::default();
        for ch in "gm".chars() {
            draft.insert_char(ch);
        }

        assert_eq!(draft.text(), "gm");
        assert_eq!(draft.cursor_position(), 2);
    }

    #[test]
    fn inserts_at_the_cursor_mid_text() {
        let mut draft = draft_with("ho");
        draft.move_cursor_left();

        draft.insert_char('e');
        draft.insert_char('l');

        assert_eq!(draft.text(), "helo");
        assert_eq!(draft.cursor_position(), 3);
    }

    #[test]
    fn backspace_removes_the_previous_character() {
        let mut draft = draft_with("hey");

        draft.delete_char_before();

        assert_eq!(draft.text(), "he");
        assert_eq!(draft.cursor_position(), 2);
    }

    #[test]
    fn backspace_at_origin_is_a_no_op() {
        let mut draft = draft_with("hey");
        draft.move_cursor_home();

        draft.delete_char_before();

        assert_eq!(draft.text(), "hey");
        assert_eq!(draft.cursor_position(), 0);
    }

    #[test]
    fn delete_removes_the_character_under_the_cursor() {
        let mut draft = draft_with("hey");
        draft.move_cursor_home();

        draft.delete_char_at();

        assert_eq!(draft.text(), "ey");
        assert_eq!(draft.cursor_position(), 0);
    }

    #[test]
    fn delete_at_the_end_is_a_no_op() {
        let mut draft = draft_with("hey");

        draft.delete_char_at();

        assert_eq!(draft.text(), "hey");
    }

    #[test]
    fn cursor_stays_within_the_text() {
        let mut draft = draft_with("ab");

        draft.move_cursor_right();
        assert_eq!(draft.cursor_position(), 2);

        draft.move_cursor_home();
        draft.move_cursor_left();
        assert_eq!(draft.cursor_position(), 0);
    }

    #[test]
    fn edits_multibyte_text_on_char_boundaries() {
        let mut draft = draft_with("héllo ⛓");

        draft.delete_char_before();
        assert_eq!(draft.text(), "héllo ");

        draft.move_cursor_home();
        draft.move_cursor_right();
        draft.delete_char_at();
        assert_eq!(draft.text(), "hllo ");

        draft.insert_char('é');
        assert_eq!(draft.text(), "héllo ");
    }

    #[test]
    fn long_messages_are_not_truncated() {
        let mut draft = DraftState::default();
        for _ in 0..5000 {
            draft.insert_char('x');
        }

        assert_eq!(draft.text().len(), 5000);
        assert_eq!(draft.cursor_position(), 5000);

        draft.insert_char('!');
        assert_eq!(draft.text().len(), 5001);
    }

    #[test]
    fn long_on_chain_value_stays_editable() {
        let mut draft = draft_with(&"m".repeat(3000));

        draft.insert_char('!');
        draft.delete_char_before();

        assert_eq!(draft.text().len(), 3000);
    }
}
