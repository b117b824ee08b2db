//! Bounds-checked access with Python-style negative indices.

// Maps a possibly negative index into [0, len), if possible.
pub fn normalize_index(idx: i64, len: usize) -> Option<usize> {
    if idx >= 0 {
        let idx = usize::try_from(idx).ok()?;
        (idx < len).then_some(idx)
    } else {
        let back = usize::try_from(idx.unsigned_abs()).ok()?;
        len.checked_sub(back)
    }
}

pub fn get_at<T>(xs: &[T], idx: i64) -> Option<&T> {
    xs.get(normalize_index(idx, xs.len())?)
}

pub fn get_or<T: Clone>(xs: &[T], idx: i64, default: T) -> T {
    get_at(xs, idx).cloned().unwrap_or(default)
}

// Indexes Unicode scalar values, not bytes.
pub fn char_at(text: &str, idx: i64) -> Option<char> {
    let idx = normalize_index(idx, text.chars().count())?;
    text.chars().nth(idx)
}

pub fn nth_at<I>(iter: I, idx: i64) -> Option<I::Item>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let mut iter = iter.into_iter();
    let idx = normalize_index(idx, iter.len())?;
    iter.nth(idx)
}

pub fn in_bounds<T: PartialOrd>(value: T, low: T, high: T) -> bool {
    low <= value && value < high
}

pub fn in_grid(r: i64, c: i64, rows: i64, cols: i64) -> bool {
    in_bounds(r, 0, rows) && in_bounds(c, 0, cols)
}

pub trait SliceExt<'a, T: 'a> {
    fn as_slice(&'a self) -> &'a [T];

    fn get_signed(&'a self, idx: i64) -> Option<&'a T> {
        get_at(self.as_slice(), idx)
    }

    fn get_signed_or(&'a self, idx: i64, default: T) -> T
    where
        T: Clone,
    {
        get_or(self.as_slice(), idx, default)
    }
}

impl<'a, T: 'a> SliceExt<'a, T> for [T] {
    fn as_slice(&'a self) -> &'a [T] {
        self
    }
}
