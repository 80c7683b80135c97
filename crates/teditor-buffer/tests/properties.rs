//! Property tests for the buffer and cursor model.

use proptest::prelude::*;
use teditor_buffer::{Cursor, LineBuffer};

fn lines_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-zé ]{0,12}", 1..6)
}

#[derive(Debug, Clone, Copy)]
enum Motion {
    Left,
    Right,
    Up,
    Down,
}

fn motion_strategy() -> impl Strategy<Value = Motion> {
    prop_oneof![
        Just(Motion::Left),
        Just(Motion::Right),
        Just(Motion::Up),
        Just(Motion::Down),
    ]
}

fn assert_in_bounds(buffer: &LineBuffer, cursor: &Cursor) {
    assert!(cursor.row() <= buffer.bottom());
    assert!(cursor.col() <= buffer.line_len(cursor.row()).unwrap());
}

proptest! {
    #[test]
    fn motion_keeps_cursor_in_bounds(
        lines in lines_strategy(),
        motions in prop::collection::vec(motion_strategy(), 0..64),
    ) {
        let buffer = LineBuffer::from_lines(lines);
        let mut cursor = Cursor::at_start();

        for motion in motions {
            match motion {
                Motion::Left => cursor.left(&buffer),
                Motion::Right => cursor.right(&buffer),
                Motion::Up => cursor.up(&buffer),
                Motion::Down => cursor.down(&buffer),
            }
            assert_in_bounds(&buffer, &cursor);
        }
    }

    #[test]
    fn split_then_delete_restores_line(
        lines in lines_strategy(),
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let original = LineBuffer::from_lines(lines);
        let row = row_seed % original.len();
        let col = col_seed % (original.line_len(row).unwrap() + 1);

        let mut buffer = original.clone();
        let cursor = Cursor::new(row, col);
        buffer.split(&cursor);
        prop_assert_eq!(buffer.len(), original.len() + 1);

        let end_of_prefix = buffer.line_len(row).unwrap();
        buffer.delete(&Cursor::new(row, end_of_prefix));
        prop_assert_eq!(buffer.text(), original.text());
    }

    #[test]
    fn insert_then_delete_restores_line(
        lines in lines_strategy(),
        text in "[a-z(){}]{0,8}",
        row_seed in any::<usize>(),
        col_seed in any::<usize>(),
    ) {
        let original = LineBuffer::from_lines(lines);
        let row = row_seed % original.len();
        let col = col_seed % (original.line_len(row).unwrap() + 1);

        let mut buffer = original.clone();
        let cursor = Cursor::new(row, col);
        buffer.insert(&cursor, &text);
        for _ in 0..text.chars().count() {
            buffer.delete(&cursor);
        }
        prop_assert_eq!(buffer.text(), original.text());
    }

    #[test]
    fn vertical_round_trip_restores_column(
        lines in lines_strategy(),
        col_seed in any::<usize>(),
    ) {
        let buffer = LineBuffer::from_lines(lines);
        prop_assume!(buffer.len() >= 2);

        let col = col_seed % (buffer.line_len(0).unwrap() + 1);
        let mut cursor = Cursor::new(0, col);
        cursor.down(&buffer);
        cursor.up(&buffer);
        prop_assert_eq!(cursor.col(), col);
    }
}
