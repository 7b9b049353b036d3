use crate::error::DimsError;

#[allow(clippy::len_without_is_empty)]
/// A dimension type for a matrix
pub trait Dimension: AsRef<[usize]> + AsMut<[usize]> + Clone {
    fn len(&self) -> usize {
        self.as_ref().iter().product()
    }

    /// Like [`Dimension::len`], but `None` on overflow.
    fn checked_len(&self) -> Option<usize> {
        self.as_ref()
            .iter()
            .try_fold(1_usize, |acc, &d| acc.checked_mul(d))
    }

    #[must_use]
    fn column_major_strides(&self) -> Self {
        let mut strides = self.clone();
        let s = strides.as_mut();
        s[0] = 1;

        for i in 1..s.len() {
            s[i] = s[i - 1] * self.as_ref()[i - 1];
        }

        strides
    }
}

impl<const N: usize> Dimension for [usize; N] {}

/// Offset of the element at `(rows-1, cols-1)`, the highest address a view touches.
/// `None` for an empty matrix.
pub fn largest_offset(
    [rows, cols]: [usize; 2],
    [rs, cs]: [usize; 2],
) -> Result<Option<usize>, DimsError> {
    if rows == 0 || cols == 0 {
        return Ok(None);
    }

    let offset0 = rs.checked_mul(rows - 1).ok_or(DimsError::SizeOverflow)?;
    let offset1 = cs.checked_mul(cols - 1).ok_or(DimsError::SizeOverflow)?;
    let offset = offset0
        .checked_add(offset1)
        .ok_or(DimsError::SizeOverflow)?;

    // strides end up as `isize` at the backend
    if offset > isize::MAX as usize {
        return Err(DimsError::SizeOverflow);
    }
    Ok(Some(offset))
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let tmp = a % b;
        a = b;
        b = tmp;
    }
    a
}

/// Finds `(i, j)` such that elements `(i, 0)` and `(0, j)` share an address.
///
/// Any aliasing pair implies a solution of `rs * i == cs * j`, and the smallest one
/// is `i = cs / gcd`, `j = rs / gcd`, so that is the only one worth checking.
pub fn self_alias([rows, cols]: [usize; 2], [rs, cs]: [usize; 2]) -> Option<(usize, usize)> {
    if rows == 0 || cols == 0 {
        return None;
    }
    if rs == 0 && rows > 1 {
        return Some((1, 0));
    }
    if cs == 0 && cols > 1 {
        return Some((0, 1));
    }
    if rs == 0 || cs == 0 {
        return None;
    }

    let r = gcd(rs, cs);
    let (i, j) = (cs / r, rs / r);
    (i < rows && j < cols).then_some((i, j))
}

#[cfg(test)]
mod tests {
    use super::{largest_offset, self_alias, Dimension};
    use crate::error::DimsError;

    #[test]
    fn column_major() {
        assert_eq!([3, 2].column_major_strides(), [1, 3]);
        assert_eq!([3, 2].len(), 6);
        assert_eq!([usize::MAX, 2].checked_len(), None);
    }

    #[test]
    fn offsets() {
        assert_eq!(largest_offset([3, 2], [1, 3]), Ok(Some(5)));
        assert_eq!(largest_offset([3, 2], [2, 8]), Ok(Some(12)));
        assert_eq!(largest_offset([0, 2], [1, 3]), Ok(None));
        assert_eq!(
            largest_offset([2, 2], [usize::MAX, 1]),
            Err(DimsError::SizeOverflow)
        );
    }

    #[test]
    fn no_self_alias() {
        assert_eq!(self_alias([2, 1], [1, 0]), None);
        assert_eq!(self_alias([1, 2], [0, 1]), None);
        assert_eq!(self_alias([1, 1], [0, 0]), None);
        assert_eq!(self_alias([3, 2], [1, 3]), None);
        assert_eq!(self_alias([3, 2], [2, 1]), None);
    }

    #[test]
    fn self_aliased() {
        assert_eq!(self_alias([2, 1], [0, 0]), Some((1, 0)));
        assert_eq!(self_alias([1, 2], [0, 0]), Some((0, 1)));
        // (2, 0) and (0, 1) are both at offset 2
        assert_eq!(self_alias([3, 2], [1, 2]), Some((2, 1)));
    }
}
