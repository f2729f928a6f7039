/// Linear indices of the cardinal neighbours of `idx` in search order:
/// up, right, down, left.
///
/// `cols` is the row width and `len` the total cell count. Moving right
/// from the last column or left from the first column yields `None` rather
/// than wrapping onto the adjacent row; indices outside `[0, len)` are
/// `None` too.
#[inline]
pub(crate) fn cardinal(idx: usize, cols: usize, len: usize) -> [Option<usize>; 4] {
    let up = idx.checked_sub(cols);
    let right = if (idx + 1) % cols == 0 {
        None
    } else {
        Some(idx + 1).filter(|&n| n < len)
    };
    let down = Some(idx + cols).filter(|&n| n < len);
    let left = if idx % cols == 0 { None } else { Some(idx - 1) };
    [up, right, down, left]
}
