use std::fmt;

use rayon::iter::ParallelIterator;
use rayon::slice::ParallelSliceMut;

/// Row-major grid of characters, one cell per terminal column/row
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharBuffer {
    pub width: usize,
    pub height: usize,
    blank: char,
    data: Vec<char>,
}

impl CharBuffer {
    pub fn new(width: usize, height: usize, blank: char) -> Self {
        CharBuffer {
            width,
            height,
            blank,
            data: vec![blank; width * height],
        }
    }

    pub fn clear(&mut self) {
        let blank = self.blank;
        self.data.par_chunks_mut(1024).for_each(|chunk| {
            for cell in chunk {
                *cell = blank;
            }
        });
    }

    pub fn blank(&self) -> char {
        self.blank
    }

    /// Writes `ch` at column `x`, row `y`. Anything outside the grid is dropped.
    pub fn set(&mut self, x: i32, y: i32, ch: char) {
        if let Some(index) = self.index(x, y) {
            self.data[index] = ch;
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.data[i])
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(x + y * self.width)
        } else {
            None
        }
    }

    /// Row `y`, or `None` below the last row
    pub fn row(&self, y: usize) -> Option<&[char]> {
        if y >= self.height {
            return None;
        }
        self.data.get(y * self.width..(y + 1) * self.width)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics, an empty grid simply has no rows
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&c| c == self.blank)
    }

    /// Inclusive `(min_x, min_y, max_x, max_y)` of every non-blank cell
    pub fn bounds(&self) -> Option<(usize, usize, usize, usize)> {
        let mut out: Option<(usize, usize, usize, usize)> = None;
        for (y, row) in self.rows().enumerate() {
            for (x, &c) in row.iter().enumerate() {
                if c == self.blank {
                    continue;
                }
                out = Some(match out {
                    None => (x, y, x, y),
                    Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
                });
            }
        }
        out
    }
}

impl fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let line: String = row.iter().collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_blank() {
        let buf = CharBuffer::new(4, 3, '.');
        assert!(buf.is_blank());
        assert_eq!(buf.bounds(), None);
        assert_eq!(buf.to_string(), "....\n....\n....\n");
    }

    #[test]
    fn out_of_range_writes_are_dropped() {
        let mut buf = CharBuffer::new(4, 3, ' ');
        buf.set(-1, 0, '#');
        buf.set(0, -1, '#');
        buf.set(4, 0, '#');
        buf.set(0, 3, '#');
        buf.set(i32::MAX, i32::MIN, '#');
        assert!(buf.is_blank());
        assert_eq!(buf.get(4, 0), None);
        assert_eq!(buf.row(3), None);
        assert_eq!(buf.row(usize::MAX), None);
    }

    #[test]
    fn set_get_and_bounds() {
        let mut buf = CharBuffer::new(5, 4, ' ');
        buf.set(1, 2, 'a');
        buf.set(3, 1, 'b');
        assert_eq!(buf.get(1, 2), Some('a'));
        assert_eq!(buf.row(1), Some(&[' ', ' ', ' ', 'b', ' '][..]));
        assert_eq!(buf.bounds(), Some((1, 1, 3, 2)));
    }

    #[test]
    fn clear_resets_every_cell() {
        // larger than one rayon chunk
        let mut buf = CharBuffer::new(200, 50, ' ');
        for y in 0..50 {
            for x in 0..200 {
                buf.set(x, y, '@');
            }
        }
        buf.clear();
        assert!(buf.is_blank());
    }
}
